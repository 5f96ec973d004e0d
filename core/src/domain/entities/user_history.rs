//! User history entity: the profile snapshot captured with each
//! recommendation request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::plan::RiskLevel;

/// A persisted profile snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserHistory {
    /// Unique identifier for the snapshot
    pub id: i64,

    /// The user this snapshot belongs to
    pub user_id: i64,

    /// Age at the time of the request
    pub age: i32,

    /// Declared annual income, in whole rupees
    pub annual_income: i64,

    /// Number of dependents
    pub no_of_dependent: i32,

    /// Declared risk tolerance
    pub risk_capacity: RiskLevel,

    /// Timestamp when the snapshot was recorded
    pub created_at: DateTime<Utc>,
}

/// Insert shape for a history row; the database assigns id and timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserHistory {
    pub user_id: i64,
    pub age: i32,
    pub annual_income: i64,
    pub no_of_dependent: i32,
    pub risk_capacity: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_serialization_keys() {
        let history = UserHistory {
            id: 7,
            user_id: 3,
            age: 42,
            annual_income: 1_200_000,
            no_of_dependent: 2,
            risk_capacity: RiskLevel::Medium,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&history).unwrap();
        assert_eq!(value["no_of_dependent"], serde_json::json!(2));
        assert_eq!(value["risk_capacity"], serde_json::json!("medium"));
    }
}
