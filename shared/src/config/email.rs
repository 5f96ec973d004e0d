//! Email delivery configuration module

use serde::{Deserialize, Serialize};

/// Outbound email configuration
///
/// `provider` selects the concrete delivery implementation; anything other
/// than a known provider falls back to the console mock so development
/// environments work without credentials.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Delivery provider identifier ("mailgun" or "mock")
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Sender address placed in the From header
    #[serde(default = "default_from_address")]
    pub from_address: String,

    /// Provider domain (Mailgun sending domain)
    #[serde(default)]
    pub domain: String,

    /// Provider API key
    #[serde(default)]
    pub api_key: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            from_address: default_from_address(),
            domain: String::new(),
            api_key: String::new(),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("EMAIL_PROVIDER").unwrap_or_else(|_| default_provider()),
            from_address: std::env::var("EMAIL_FROM_ADDRESS")
                .unwrap_or_else(|_| default_from_address()),
            domain: std::env::var("MAILGUN_DOMAIN").unwrap_or_default(),
            api_key: std::env::var("MAILGUN_API_KEY").unwrap_or_default(),
        }
    }
}

fn default_provider() -> String {
    String::from("mock")
}

fn default_from_address() -> String {
    String::from("SafeCheck <no-reply@safecheck.io>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_config_default() {
        let config = EmailConfig::default();
        assert_eq!(config.provider, "mock");
        assert!(config.from_address.contains("no-reply"));
        assert!(config.api_key.is_empty());
    }
}
