//! Business services containing domain logic and use cases.

pub mod auth;
pub mod email;
pub mod matcher;
pub mod otp;
pub mod recommendation;

// Re-export commonly used types
pub use auth::{AuthService, VerifyOtpResult};
pub use email::{EmailServiceTrait, MockEmailService};
pub use matcher::{is_eligible, rank_plans};
pub use otp::{
    Clock, ManualClock, MemoryOtpStore, OtpConfig, OtpManager, OtpStore, SystemClock,
};
pub use recommendation::{RecommendationOutcome, RecommendationService};
