//! PostgreSQL implementation of the PlanRepository trait.
//!
//! The `lic_plans` catalog is seeded at startup and read in full on each
//! recommendation request; eligibility filtering happens in the domain
//! layer, not in SQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use std::str::FromStr;

use sc_core::domain::entities::plan::{Plan, PlanType, RiskLevel};
use sc_core::errors::DomainError;
use sc_core::repositories::PlanRepository;

/// PostgreSQL implementation of PlanRepository
pub struct PgPlanRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgPlanRepository {
    /// Create a new PostgreSQL plan repository
    ///
    /// # Arguments
    /// * `pool` - PostgreSQL connection pool from SQLx
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Plan entity
    ///
    /// `plan_type` is stored as TEXT and `risk_capacity` as TEXT[]; both
    /// are parsed back through the enums' `FromStr` impls so an unknown
    /// value surfaces as a database error instead of a silent skip.
    fn row_to_plan(row: &sqlx::postgres::PgRow) -> Result<Plan, DomainError> {
        let id: i64 = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;

        let plan_type_raw: String = row.try_get("plan_type").map_err(|e| DomainError::Database {
            message: format!("Failed to get plan_type: {}", e),
        })?;
        let plan_type = PlanType::from_str(&plan_type_raw).map_err(|e| DomainError::Database {
            message: format!("Invalid plan_type for plan {}: {}", id, e),
        })?;

        let risk_capacity_raw: Vec<String> =
            row.try_get("risk_capacity").map_err(|e| DomainError::Database {
                message: format!("Failed to get risk_capacity: {}", e),
            })?;
        let mut risk_capacity = Vec::with_capacity(risk_capacity_raw.len());
        for level in &risk_capacity_raw {
            risk_capacity.push(RiskLevel::from_str(level).map_err(|e| DomainError::Database {
                message: format!("Invalid risk_capacity for plan {}: {}", id, e),
            })?);
        }

        Ok(Plan {
            id,
            plan_name: row.try_get("plan_name").map_err(|e| DomainError::Database {
                message: format!("Failed to get plan_name: {}", e),
            })?,
            plan_type,
            min_age: row.try_get("min_age").map_err(|e| DomainError::Database {
                message: format!("Failed to get min_age: {}", e),
            })?,
            max_age: row.try_get("max_age").map_err(|e| DomainError::Database {
                message: format!("Failed to get max_age: {}", e),
            })?,
            min_sum_assured: row
                .try_get("min_sum_assured")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get min_sum_assured: {}", e),
                })?,
            max_sum_assured: row
                .try_get("max_sum_assured")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get max_sum_assured: {}", e),
                })?,
            risk_capacity,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get description: {}", e),
                })?,
            features: row.try_get("features").map_err(|e| DomainError::Database {
                message: format!("Failed to get features: {}", e),
            })?,
            is_active: row.try_get("is_active").map_err(|e| DomainError::Database {
                message: format!("Failed to get is_active: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl PlanRepository for PgPlanRepository {
    async fn find_all(&self) -> Result<Vec<Plan>, DomainError> {
        let query = r#"
            SELECT id, plan_name, plan_type, min_age, max_age,
                   min_sum_assured, max_sum_assured, risk_capacity,
                   description, features, is_active, created_at, updated_at
            FROM lic_plans
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to load plan catalog: {}", e),
            })?;

        let mut plans = Vec::with_capacity(rows.len());
        for row in rows {
            plans.push(Self::row_to_plan(&row)?);
        }

        Ok(plans)
    }
}
