//! PostgreSQL implementation of the UserHistoryRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use std::str::FromStr;

use sc_core::domain::entities::plan::RiskLevel;
use sc_core::domain::entities::user_history::{NewUserHistory, UserHistory};
use sc_core::errors::DomainError;
use sc_core::repositories::UserHistoryRepository;

/// PostgreSQL implementation of UserHistoryRepository
pub struct PgUserHistoryRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgUserHistoryRepository {
    /// Create a new PostgreSQL history repository
    ///
    /// # Arguments
    /// * `pool` - PostgreSQL connection pool from SQLx
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a UserHistory entity
    fn row_to_history(row: &sqlx::postgres::PgRow) -> Result<UserHistory, DomainError> {
        let risk_capacity_raw: String =
            row.try_get("risk_capacity").map_err(|e| DomainError::Database {
                message: format!("Failed to get risk_capacity: {}", e),
            })?;
        let risk_capacity =
            RiskLevel::from_str(&risk_capacity_raw).map_err(|e| DomainError::Database {
                message: format!("Invalid risk_capacity in history row: {}", e),
            })?;

        Ok(UserHistory {
            id: row.try_get("id").map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?,
            user_id: row.try_get("user_id").map_err(|e| DomainError::Database {
                message: format!("Failed to get user_id: {}", e),
            })?,
            age: row.try_get("age").map_err(|e| DomainError::Database {
                message: format!("Failed to get age: {}", e),
            })?,
            annual_income: row
                .try_get("annual_income")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get annual_income: {}", e),
                })?,
            no_of_dependent: row
                .try_get("no_of_dependent")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get no_of_dependent: {}", e),
                })?,
            risk_capacity,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl UserHistoryRepository for PgUserHistoryRepository {
    async fn create(&self, snapshot: NewUserHistory) -> Result<UserHistory, DomainError> {
        let query = r#"
            INSERT INTO user_history (user_id, age, annual_income, no_of_dependent, risk_capacity)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, age, annual_income, no_of_dependent,
                      risk_capacity, created_at
        "#;

        let row = sqlx::query(query)
            .bind(snapshot.user_id)
            .bind(snapshot.age)
            .bind(snapshot.annual_income)
            .bind(snapshot.no_of_dependent)
            .bind(snapshot.risk_capacity.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to save profile snapshot: {}", e),
            })?;

        Self::row_to_history(&row)
    }
}
