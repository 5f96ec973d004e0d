pub mod auth;
pub mod recommendation;

pub use auth::*;
pub use recommendation::*;
