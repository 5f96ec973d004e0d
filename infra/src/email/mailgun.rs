//! Mailgun Email Service Implementation
//!
//! This module provides email delivery through the Mailgun HTTP API.
//! It implements the core email trait for production delivery.
//!
//! ## Features
//!
//! - Automatic retry logic with exponential backoff
//! - Rate limiting handling
//! - Comprehensive error handling
//! - Security: recipient addresses are masked in logs

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use sc_core::services::email::EmailServiceTrait;
use sc_shared::utils::email::mask_email;

use crate::InfrastructureError;

/// Mailgun email service configuration
#[derive(Debug, Clone)]
pub struct MailgunConfig {
    /// Mailgun sending domain
    pub domain: String,
    /// Mailgun API key
    pub api_key: String,
    /// Sender placed in the From header
    pub from_address: String,
    /// Maximum retry attempts for failed requests
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl MailgunConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let domain = std::env::var("MAILGUN_DOMAIN")
            .map_err(|_| InfrastructureError::Config("MAILGUN_DOMAIN not set".to_string()))?;
        let api_key = std::env::var("MAILGUN_API_KEY")
            .map_err(|_| InfrastructureError::Config("MAILGUN_API_KEY not set".to_string()))?;

        Ok(Self {
            domain,
            api_key,
            from_address: std::env::var("EMAIL_FROM_ADDRESS")
                .unwrap_or_else(|_| "SafeCheck <no-reply@safecheck.io>".to_string()),
            max_retries: std::env::var("MAILGUN_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            retry_delay_ms: std::env::var("MAILGUN_RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            request_timeout_secs: std::env::var("MAILGUN_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Successful send response from the Mailgun messages endpoint
#[derive(Debug, Deserialize)]
struct MailgunSendResponse {
    id: String,
}

/// Mailgun email service implementation
pub struct MailgunEmailService {
    client: reqwest::Client,
    config: MailgunConfig,
}

impl MailgunEmailService {
    /// Create a new Mailgun email service
    pub fn new(config: MailgunConfig) -> Result<Self, InfrastructureError> {
        if config.domain.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "Mailgun domain must not be empty".to_string(),
            ));
        }
        if config.api_key.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "Mailgun API key must not be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            "Mailgun email service initialized for domain: {}",
            config.domain
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let config = MailgunConfig::from_env()?;
        Self::new(config)
    }

    fn messages_url(&self) -> String {
        format!("https://api.mailgun.net/v3/{}/messages", self.config.domain)
    }

    /// Send an email with retry logic
    ///
    /// Retries rate-limit and server-error responses with exponential
    /// backoff; other client errors fail immediately.
    async fn send_with_retry(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<String, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;

            debug!(
                "Sending email attempt {}/{} to {}",
                attempts,
                self.config.max_retries,
                mask_email(to)
            );

            let request = self
                .client
                .post(self.messages_url())
                .basic_auth("api", Some(&self.config.api_key))
                .form(&[
                    ("from", self.config.from_address.as_str()),
                    ("to", to),
                    ("subject", subject),
                    ("html", html_body),
                ]);

            match request.send().await {
                Ok(response) => {
                    let status = response.status();

                    if status.is_success() {
                        let parsed: MailgunSendResponse =
                            response.json().await.map_err(InfrastructureError::Http)?;
                        info!(
                            "Email sent successfully to {} with id: {}",
                            mask_email(to),
                            parsed.id
                        );
                        return Ok(parsed.id);
                    }

                    let body = response.text().await.unwrap_or_default();
                    error!(
                        "Mailgun returned {} (attempt {}/{}): {}",
                        status, attempts, self.config.max_retries, body
                    );

                    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        warn!("Rate limit detected, backing off for {:?}", delay);
                    } else if status.is_server_error() {
                        warn!("Server error detected, retrying after {:?}", delay);
                    } else {
                        // Client errors will not succeed on retry
                        return Err(InfrastructureError::Email(format!(
                            "Mailgun rejected the request ({}): {}",
                            status, body
                        )));
                    }

                    if attempts >= self.config.max_retries {
                        return Err(InfrastructureError::Email(format!(
                            "Failed to send email after {} attempts: Mailgun returned {}",
                            self.config.max_retries, status
                        )));
                    }
                }
                Err(e) => {
                    error!(
                        "Failed to reach Mailgun (attempt {}/{}): {}",
                        attempts, self.config.max_retries, e
                    );

                    if attempts >= self.config.max_retries {
                        return Err(InfrastructureError::Email(format!(
                            "Failed to send email after {} attempts: {}",
                            self.config.max_retries, e
                        )));
                    }
                }
            }

            // Wait before retrying with exponential backoff
            tokio::time::sleep(delay).await;
            delay *= 2;
        }
    }
}

#[async_trait]
impl EmailServiceTrait for MailgunEmailService {
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<String, String> {
        if !to.contains('@') {
            return Err(format!("Invalid recipient address: {}", mask_email(to)));
        }

        info!(
            "Sending email to {} via Mailgun (body length: {} chars)",
            mask_email(to),
            html_body.len()
        );

        self.send_with_retry(to, subject, html_body)
            .await
            .map_err(|e| e.to_string())
    }

    fn provider_name(&self) -> &str {
        "mailgun"
    }
}
