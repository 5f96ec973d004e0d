//! Email Delivery Module
//!
//! This module provides the outbound email implementations behind the
//! core delivery seam:
//!
//! - **Mailgun**: Production delivery over the Mailgun HTTP API
//! - **Console**: Development implementation that prints to the console
//! - **Security**: Recipient addresses are masked in logs
//!
//! Verification codes ride on this seam; a broken provider configuration
//! falls back to the console implementation so local environments work
//! without credentials.

pub mod mailgun;
pub mod mock_email;

// Re-export commonly used types
pub use mailgun::{MailgunConfig, MailgunEmailService};
pub use mock_email::ConsoleEmailService;

use sc_core::services::email::EmailServiceTrait;
use sc_shared::config::email::EmailConfig;

/// Create an email service based on configuration
///
/// Returns the implementation selected by `provider`; an unknown
/// provider or an invalid Mailgun configuration falls back to the
/// console implementation.
///
/// # Arguments
///
/// * `config` - Email configuration containing provider settings
///
/// # Returns
///
/// A boxed email service implementation
pub fn create_email_service(config: &EmailConfig) -> Box<dyn EmailServiceTrait> {
    match config.provider.as_str() {
        "mock" => Box::new(ConsoleEmailService::new()),
        "mailgun" => {
            let mailgun_config = MailgunConfig {
                domain: config.domain.clone(),
                api_key: config.api_key.clone(),
                from_address: config.from_address.clone(),
                max_retries: 3,
                retry_delay_ms: 1000,
                request_timeout_secs: 30,
            };

            match MailgunEmailService::new(mailgun_config) {
                Ok(service) => Box::new(service),
                Err(e) => {
                    tracing::error!("Failed to initialize Mailgun email service: {}", e);
                    tracing::warn!("Falling back to console email service");
                    Box::new(ConsoleEmailService::new())
                }
            }
        }
        _ => {
            tracing::warn!(
                "Unknown email provider '{}', using console implementation",
                config.provider
            );
            Box::new(ConsoleEmailService::new())
        }
    }
}
