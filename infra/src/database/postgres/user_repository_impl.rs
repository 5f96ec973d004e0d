//! PostgreSQL implementation of the UserRepository trait.
//!
//! Persists signup records in the `users` table. Emails are stored
//! lowercased by the domain layer, so lookups are plain equality.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Row};

use sc_core::domain::entities::user::{NewUser, User};
use sc_core::errors::DomainError;
use sc_core::repositories::UserRepository;

/// PostgreSQL implementation of UserRepository
pub struct PgUserRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PostgreSQL user repository
    ///
    /// # Arguments
    /// * `pool` - PostgreSQL connection pool from SQLx
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
        Ok(User {
            id: row.try_get("id").map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Database {
                message: format!("Failed to get name: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            date_of_birth: row
                .try_get::<NaiveDate, _>("date_of_birth")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get date_of_birth: {}", e),
                })?,
            is_active: row.try_get("is_active").map_err(|e| DomainError::Database {
                message: format!("Failed to get is_active: {}", e),
            })?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get is_verified: {}", e),
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
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (name, email, date_of_birth)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, date_of_birth, is_active, is_verified,
                      created_at, updated_at
        "#;

        let row = sqlx::query(query)
            .bind(&new_user.name)
            .bind(&new_user.email)
            .bind(new_user.date_of_birth)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match &e {
                // Unique index on email; races past the service-level
                // existence check land here
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    DomainError::Validation {
                        message: "Email already registered".to_string(),
                    }
                }
                _ => DomainError::Database {
                    message: format!("Failed to create user: {}", e),
                },
            })?;

        Self::row_to_user(&row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, name, email, date_of_birth, is_active, is_verified,
                   created_at, updated_at
            FROM users
            WHERE email = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find user by email: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1) AS user_exists";

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to check user existence: {}", e),
            })?;

        row.try_get("user_exists").map_err(|e| DomainError::Database {
            message: format!("Failed to get existence result: {}", e),
        })
    }

    async fn mark_verified(&self, user_id: i64) -> Result<(), DomainError> {
        let query = r#"
            UPDATE users
            SET is_verified = TRUE, updated_at = NOW()
            WHERE id = $1
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to mark user verified: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("User {}", user_id),
            });
        }

        Ok(())
    }
}
