//! Schema creation and startup initialization.
//!
//! The schema is small enough to manage with idempotent DDL at boot
//! instead of a migration tool; every statement is safe to re-run.

use sqlx::PgPool;

use crate::database::seed::seed_plans;
use crate::InfrastructureError;

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL UNIQUE,
        date_of_birth DATE NOT NULL,
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        is_verified BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_USER_HISTORY_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS user_history (
        id BIGSERIAL PRIMARY KEY,
        user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        age INT NOT NULL CHECK (age >= 18 AND age <= 100),
        annual_income BIGINT NOT NULL,
        no_of_dependent INT NOT NULL,
        risk_capacity TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_USER_HISTORY_USER_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_user_history_user_id
    ON user_history (user_id)
"#;

const CREATE_LIC_PLANS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS lic_plans (
        id BIGSERIAL PRIMARY KEY,
        plan_name VARCHAR(255) NOT NULL,
        plan_type TEXT NOT NULL,
        min_age INT NOT NULL,
        max_age INT NOT NULL,
        min_sum_assured BIGINT NOT NULL,
        max_sum_assured BIGINT NOT NULL,
        risk_capacity TEXT[] NOT NULL,
        description TEXT,
        features JSONB,
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// Create the schema if missing and seed the plan catalog
///
/// Runs at startup before the HTTP server binds. The DDL uses
/// `IF NOT EXISTS` throughout and the seeder skips a populated catalog,
/// so repeated boots leave existing data untouched.
pub async fn initialize_database(pool: &PgPool) -> Result<(), InfrastructureError> {
    for statement in [
        CREATE_USERS_TABLE,
        CREATE_USER_HISTORY_TABLE,
        CREATE_USER_HISTORY_USER_INDEX,
        CREATE_LIC_PLANS_TABLE,
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!(event = "schema_ready", "Database schema is in place");

    seed_plans(pool).await?;

    Ok(())
}
