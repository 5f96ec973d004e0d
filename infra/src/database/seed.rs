//! Built-in LIC plan catalog and startup seeding.
//!
//! The catalog ships with the binary and is inserted once into an empty
//! `lic_plans` table; a populated table is left untouched so redeploys
//! never duplicate or overwrite rows.

use serde_json::json;
use sqlx::{PgPool, Row};

use sc_core::domain::entities::plan::{PlanType, RiskLevel};

use crate::InfrastructureError;

/// Insert shape for a catalog row; the database assigns id, timestamps
/// and the active flag
#[derive(Debug, Clone)]
pub struct SeedPlan {
    pub plan_name: String,
    pub plan_type: PlanType,
    pub min_age: i32,
    pub max_age: i32,
    pub min_sum_assured: i64,
    pub max_sum_assured: i64,
    pub risk_capacity: Vec<RiskLevel>,
    pub description: String,
    pub features: serde_json::Value,
}

fn plan(
    plan_name: &str,
    plan_type: PlanType,
    age_band: (i32, i32),
    sum_assured: (i64, i64),
    risk_capacity: &[RiskLevel],
    description: &str,
    features: serde_json::Value,
) -> SeedPlan {
    SeedPlan {
        plan_name: plan_name.to_string(),
        plan_type,
        min_age: age_band.0,
        max_age: age_band.1,
        min_sum_assured: sum_assured.0,
        max_sum_assured: sum_assured.1,
        risk_capacity: risk_capacity.to_vec(),
        description: description.to_string(),
        features,
    }
}

/// The built-in LIC plan catalog
///
/// Two plans per product category, covering the low/medium/high risk
/// spectrum. Sum-assured bounds are whole rupees.
pub fn seed_catalog() -> Vec<SeedPlan> {
    use PlanType::*;
    use RiskLevel::*;

    vec![
        plan(
            "LIC e-Term",
            Term,
            (18, 65),
            (1_000_000, 75_000_000),
            &[Low, Medium],
            "Pure online term plan with instant issuance",
            json!({
                "instant_issuance": true,
                "medical_test_waiver": true,
                "premium_calculator": true
            }),
        ),
        plan(
            "LIC Anmol Jeevan II",
            Term,
            (18, 55),
            (500_000, 2_500_000),
            &[Low],
            "Affordable term insurance for rural/semi-urban customers",
            json!({
                "simplified_underwriting": true,
                "low_premium": true
            }),
        ),
        plan(
            "LIC New Jeevan Anand",
            Endowment,
            (18, 50),
            (100_000, 10_000_000),
            &[Low, Medium],
            "Combines endowment assurance with whole life cover",
            json!({
                "loyalty_additions": true,
                "accident_benefit": true,
                "premium_waiver": true
            }),
        ),
        plan(
            "LIC Jeevan Lakshya",
            Endowment,
            (18, 50),
            (100_000, 5_000_000),
            &[Low],
            "Child education/marriage protection plan",
            json!({
                "income_benefit": true,
                "premium_waiver": true,
                "maturity_benefit": true
            }),
        ),
        plan(
            "LIC Wealth Plus",
            Ulip,
            (18, 60),
            (500_000, 50_000_000),
            &[Medium, High],
            "Wealth creation with life cover",
            json!({
                "fund_options": ["equity", "debt", "balanced", "index"],
                "topup_premium": true,
                "partial_withdrawal": true
            }),
        ),
        plan(
            "LIC New Endowment Plus",
            Ulip,
            (18, 55),
            (1_000_000, 10_000_000),
            &[Medium],
            "Combines protection with savings",
            json!({
                "guaranteed_additions": true,
                "tax_benefits": true,
                "loyalty_additions": true
            }),
        ),
        plan(
            "LIC Jeevan Tarang",
            WholeLife,
            (18, 60),
            (100_000, 10_000_000),
            &[Low, Medium],
            "Whole life plan with guaranteed income",
            json!({
                "survival_benefit": true,
                "income_till_lifetime": true,
                "death_benefit": true
            }),
        ),
        plan(
            "LIC Bima Shree",
            WholeLife,
            (18, 55),
            (500_000, 5_000_000),
            &[Medium],
            "Limited premium whole life plan",
            json!({
                "limited_premium_payment": true,
                "bonus": true,
                "loan_available": true
            }),
        ),
        plan(
            "LIC New Money Back Plan 25 Years",
            MoneyBack,
            (18, 50),
            (100_000, 5_000_000),
            &[Low, Medium],
            "Long-term money back policy with survival benefits",
            json!({
                "survival_benefit_percentages": [15, 15, 15, 15, 40],
                "bonus": true,
                "accident_benefit": true
            }),
        ),
        plan(
            "LIC Jeevan Shiromani",
            MoneyBack,
            (18, 55),
            (1_000_000, 10_000_000),
            &[High],
            "High-value money back plan for HNIs",
            json!({
                "flexible_premium_payment": true,
                "loyalty_addition": true,
                "premium_waiver": true
            }),
        ),
    ]
}

/// Seed the built-in catalog into an empty `lic_plans` table
///
/// Counts existing rows first and skips seeding when any are present,
/// so the call is idempotent across restarts. All inserts run in one
/// transaction.
///
/// # Returns
/// The number of rows inserted (zero when the table was already seeded)
pub async fn seed_plans(pool: &PgPool) -> Result<u64, InfrastructureError> {
    let row = sqlx::query("SELECT COUNT(*) AS plan_count FROM lic_plans")
        .fetch_one(pool)
        .await?;
    let existing: i64 = row.try_get("plan_count")?;

    if existing > 0 {
        tracing::info!(
            existing = existing,
            event = "plan_catalog_present",
            "Plan catalog already seeded, skipping"
        );
        return Ok(0);
    }

    let catalog = seed_catalog();
    let mut tx = pool.begin().await?;

    for seed in &catalog {
        let capacity: Vec<String> = seed
            .risk_capacity
            .iter()
            .map(|level| level.as_str().to_string())
            .collect();

        sqlx::query(
            r#"
            INSERT INTO lic_plans (
                plan_name, plan_type, min_age, max_age,
                min_sum_assured, max_sum_assured, risk_capacity,
                description, features
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(&seed.plan_name)
        .bind(seed.plan_type.as_str())
        .bind(seed.min_age)
        .bind(seed.max_age)
        .bind(seed.min_sum_assured)
        .bind(seed.max_sum_assured)
        .bind(&capacity)
        .bind(&seed.description)
        .bind(&seed.features)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    let inserted = catalog.len() as u64;
    tracing::info!(
        inserted = inserted,
        event = "plan_catalog_seeded",
        "Seeded plan catalog"
    );

    Ok(inserted)
}
