//! Console Email Service Implementation
//!
//! A development implementation of the email service that prints
//! messages to the console instead of delivering them. Verification
//! codes land in the server log, which is enough for local signup
//! flows without SMTP or API credentials.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

use sc_core::services::email::EmailServiceTrait;
use sc_shared::utils::email::mask_email;

/// Console email service for development and testing
///
/// This implementation:
/// - Prints emails to the console
/// - Generates sequential message IDs
/// - Tracks message count for testing
#[derive(Clone)]
pub struct ConsoleEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl ConsoleEmailService {
    /// Create a new console email service
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a console service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }
}

impl Default for ConsoleEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailServiceTrait for ConsoleEmailService {
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<String, String> {
        if !to.contains('@') {
            return Err(format!("Invalid recipient address: {}", mask_email(to)));
        }

        if self.simulate_failure {
            warn!(
                "Console email service simulating failure for: {}",
                mask_email(to)
            );
            return Err("Simulated email delivery failure".to_string());
        }

        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        let message_id = format!("console-{}", count);

        if self.console_output {
            // Console output for development - show the full message
            println!("\n{}", "=".repeat(60));
            println!("CONSOLE EMAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", to);
            println!("Subject: {}", subject);
            println!("Message ID: {}", message_id);
            println!("Body: {}", html_body);
            println!("{}\n", "=".repeat(60));
        }

        // Structured logging for non-interactive environments
        info!(
            target: "email_service",
            provider = "console",
            to = %mask_email(to),
            message_id = %message_id,
            body_length = html_body.len(),
            "Email sent successfully (console)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "console"
    }
}
