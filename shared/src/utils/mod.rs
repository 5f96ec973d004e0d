//! Common utility functions

pub mod email;
pub mod format;
pub mod validation;

// Re-export commonly used utilities
pub use email::*;
pub use format::*;
pub use validation::*;
