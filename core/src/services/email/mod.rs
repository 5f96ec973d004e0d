//! Outbound email seam
//!
//! The domain renders verification emails and hands them to an
//! [`EmailServiceTrait`] implementation; delivery mechanics live in the
//! infrastructure layer. A console-backed mock ships alongside the trait
//! for tests and local development.

pub mod mock;

use async_trait::async_trait;

pub use mock::MockEmailService;

/// Subject line for verification-code emails
pub const OTP_EMAIL_SUBJECT: &str = "Your Verification Code to SafeCheck";

/// HTML body for a verification-code email
pub fn render_otp_body(code: &str, expires_in_minutes: i64) -> String {
    format!(
        "<html>\
         <body style=\"font-family: Arial, sans-serif; color: #333;\">\
         <h2>SafeCheck Verification</h2>\
         <p>Use the code below to verify your email address:</p>\
         <p style=\"font-size: 28px; font-weight: bold; letter-spacing: 4px;\">{}</p>\
         <p>This code will expire in {} minutes.</p>\
         <p>If you did not request this code, you can ignore this email.</p>\
         </body>\
         </html>",
        code, expires_in_minutes
    )
}

/// Abstraction over an outbound email provider
///
/// Implementations return a provider-side message identifier on success.
/// Errors are plain strings here; callers translate them into domain
/// errors with whatever context they have.
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Deliver a single HTML email
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<String, String>;

    /// Render and deliver a verification-code email
    async fn send_otp_email(
        &self,
        to: &str,
        code: &str,
        expires_in_minutes: i64,
    ) -> Result<String, String> {
        let body = render_otp_body(code, expires_in_minutes);
        self.send_email(to, OTP_EMAIL_SUBJECT, &body).await
    }

    /// Short provider label for logs
    fn provider_name(&self) -> &str;
}

#[async_trait]
impl EmailServiceTrait for Box<dyn EmailServiceTrait> {
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<String, String> {
        (**self).send_email(to, subject, html_body).await
    }

    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }
}
