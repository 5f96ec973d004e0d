//! Recording email service for tests and local development

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::EmailServiceTrait;

/// One captured outbound email
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Email service that records instead of sending
///
/// Every accepted message is kept in order, so tests can assert on the
/// exact recipient, subject, and body. Flip `set_should_fail` to make the
/// next sends error, for exercising failure paths.
pub struct MockEmailService {
    sent: Mutex<Vec<SentEmail>>,
    should_fail: AtomicBool,
}

impl MockEmailService {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            should_fail: AtomicBool::new(false),
        }
    }

    /// Make subsequent sends fail until cleared
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Snapshot of everything recorded so far, oldest first
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<String, String> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err("Mock email service configured to fail".to_string());
        }

        let mut sent = self
            .sent
            .lock()
            .map_err(|e| format!("Mock email lock poisoned: {}", e))?;
        sent.push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html_body: html_body.to_string(),
        });

        Ok(format!("mock-email-{}", sent.len()))
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
