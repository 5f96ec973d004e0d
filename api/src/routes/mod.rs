pub mod auth;
pub mod plans;

pub use auth::AppState;
