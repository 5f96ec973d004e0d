//! Insurance plan entity and its classification enums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{DomainError, DomainResult};

/// Product category of an insurance plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    Term,
    Endowment,
    Ulip,
    WholeLife,
    MoneyBack,
}

impl PlanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Term => "term",
            PlanType::Endowment => "endowment",
            PlanType::Ulip => "ulip",
            PlanType::WholeLife => "whole_life",
            PlanType::MoneyBack => "money_back",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "term" => Ok(PlanType::Term),
            "endowment" => Ok(PlanType::Endowment),
            "ulip" => Ok(PlanType::Ulip),
            "whole_life" => Ok(PlanType::WholeLife),
            "money_back" => Ok(PlanType::MoneyBack),
            other => Err(format!("unknown plan type: {}", other)),
        }
    }
}

/// Risk appetite bucket, used both on plans (capacity served) and on
/// user profiles (tolerance declared)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => Err(format!("unknown risk level: {}", other)),
        }
    }
}

/// Insurance plan from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: i64,

    /// Marketed plan name
    pub plan_name: String,

    /// Product category
    pub plan_type: PlanType,

    /// Minimum entry age, inclusive
    pub min_age: i32,

    /// Maximum entry age, inclusive
    pub max_age: i32,

    /// Lower bound of the sum-assured band, in whole rupees
    pub min_sum_assured: i64,

    /// Upper bound of the sum-assured band, in whole rupees
    pub max_sum_assured: i64,

    /// Risk appetites this plan serves; never empty
    pub risk_capacity: Vec<RiskLevel>,

    /// Marketing description
    pub description: Option<String>,

    /// Free-form feature list, stored as JSON
    pub features: Option<serde_json::Value>,

    /// Whether the plan is currently offered
    pub is_active: bool,

    /// Timestamp when the plan was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the plan was last updated
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    /// Checks the catalog invariants: a sane age band inside 18..=100, an
    /// ordered sum-assured band, and at least one risk capacity
    pub fn validate(&self) -> DomainResult<()> {
        if self.plan_name.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "Plan name must not be empty".to_string(),
            });
        }
        if self.min_age < 18 || self.max_age > 100 || self.min_age > self.max_age {
            return Err(DomainError::Validation {
                message: format!(
                    "Plan age band {}..={} must lie within 18..=100",
                    self.min_age, self.max_age
                ),
            });
        }
        if self.min_sum_assured <= 0 || self.min_sum_assured > self.max_sum_assured {
            return Err(DomainError::Validation {
                message: "Sum assured band must be positive and ordered".to_string(),
            });
        }
        if self.risk_capacity.is_empty() {
            return Err(DomainError::Validation {
                message: "Plan must serve at least one risk capacity".to_string(),
            });
        }
        Ok(())
    }

    /// Midpoint of the entry age band
    pub fn age_midpoint(&self) -> f64 {
        (self.min_age + self.max_age) as f64 / 2.0
    }
}
