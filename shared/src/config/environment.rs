//! Runtime environment detection

use serde::{Deserialize, Serialize};

/// Deployment environment the server is running in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Resolve the environment from `ENVIRONMENT`, `ENV`, or `RUST_ENV`
    ///
    /// Unknown or missing values resolve to `Development`.
    pub fn from_env() -> Self {
        let value = std::env::var("ENVIRONMENT")
            .or_else(|_| std::env::var("ENV"))
            .or_else(|_| std::env::var("RUST_ENV"))
            .unwrap_or_default();

        match value.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Development,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
