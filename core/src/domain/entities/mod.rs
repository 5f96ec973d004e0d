//! Domain entities representing core business objects.

pub mod otp_code;
pub mod plan;
pub mod user;
pub mod user_history;

// Re-export commonly used types
pub use otp_code::{OtpCode, CODE_LENGTH, DEFAULT_TTL_SECONDS};
pub use plan::{Plan, PlanType, RiskLevel};
pub use user::{NewUser, User};
pub use user_history::{NewUserHistory, UserHistory};
