//! Per-plan scoring arithmetic

use crate::domain::entities::{Plan, RiskLevel};
use crate::domain::value_objects::UserProfile;

/// Weight of the age component in the final score
pub const AGE_WEIGHT: f64 = 0.4;
/// Weight of the risk component in the final score
pub const RISK_WEIGHT: f64 = 0.4;
/// Weight of the dependents component in the final score
pub const DEPENDENTS_WEIGHT: f64 = 0.2;

/// Dependent count at which the dependents component saturates
const DEPENDENTS_SATURATION: f64 = 5.0;

/// Closeness of the applicant's age to the middle of the plan's age band
///
/// Scores 1.0 at the exact midpoint and loses 0.01 per year of distance.
/// Unclamped, so ages far outside the band go negative; eligibility
/// filtering removes those plans before ranking.
pub fn age_match(age: i32, min_age: i32, max_age: i32) -> f64 {
    let midpoint = (min_age + max_age) as f64 / 2.0;
    1.0 - (age as f64 - midpoint).abs() / 100.0
}

/// Risk fit: 1.0 when the plan caters for the applicant's tolerance,
/// 0.5 otherwise
///
/// The 0.5 branch cannot fire for a plan that already passed eligibility,
/// but the function stays total so it can score arbitrary pairs.
pub fn risk_match(tolerance: RiskLevel, capacity: &[RiskLevel]) -> f64 {
    if capacity.contains(&tolerance) {
        1.0
    } else {
        0.5
    }
}

/// Dependents pressure, saturating at five dependents
pub fn dependents_factor(no_of_dependent: i32) -> f64 {
    (no_of_dependent as f64 / DEPENDENTS_SATURATION).min(1.0)
}

/// Weighted composite score for a profile against a plan, rounded to
/// two decimals
pub fn match_score(profile: &UserProfile, plan: &Plan) -> f64 {
    let age = age_match(profile.age, plan.min_age, plan.max_age);
    let risk = risk_match(profile.risk_capacity, &plan.risk_capacity);
    let dependents = dependents_factor(profile.no_of_dependent);

    round_to_two_decimals(AGE_WEIGHT * age + RISK_WEIGHT * risk + DEPENDENTS_WEIGHT * dependents)
}

fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::entities::PlanType;

    fn sample_plan(min_age: i32, max_age: i32, risk_capacity: Vec<RiskLevel>) -> Plan {
        let now = Utc::now();
        Plan {
            id: 1,
            plan_name: "LIC e-Term".to_string(),
            plan_type: PlanType::Term,
            min_age,
            max_age,
            min_sum_assured: 1_000_000,
            max_sum_assured: 75_000_000,
            risk_capacity,
            description: None,
            features: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn age_match_measures_distance_from_midpoint() {
        let score = age_match(42, 18, 65);
        assert!((score - 0.995).abs() < 1e-9);
    }

    #[test]
    fn age_match_is_perfect_at_midpoint() {
        let score = age_match(40, 18, 62);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn age_match_goes_negative_far_outside_band() {
        let score = age_match(150, 18, 30);
        assert!((score - (-0.26)).abs() < 1e-9);
    }

    #[test]
    fn risk_match_is_full_when_capacity_covers_tolerance() {
        let capacity = vec![RiskLevel::Low, RiskLevel::Medium];
        assert_eq!(risk_match(RiskLevel::Medium, &capacity), 1.0);
    }

    #[test]
    fn risk_match_is_half_when_capacity_misses_tolerance() {
        let capacity = vec![RiskLevel::Low, RiskLevel::Medium];
        assert_eq!(risk_match(RiskLevel::High, &capacity), 0.5);
    }

    #[test]
    fn dependents_factor_saturates_at_five() {
        assert_eq!(dependents_factor(0), 0.0);
        assert_eq!(dependents_factor(2), 0.4);
        assert_eq!(dependents_factor(5), 1.0);
        assert_eq!(dependents_factor(9), 1.0);
    }

    #[test]
    fn near_perfect_profile_rounds_up_to_full_score() {
        let plan = sample_plan(18, 65, vec![RiskLevel::Low, RiskLevel::Medium]);
        let profile = UserProfile::new(42, 5, RiskLevel::Medium).unwrap();

        // 0.4 * 0.995 + 0.4 * 1.0 + 0.2 * 1.0 = 0.998, rounded to 1.0
        assert_eq!(match_score(&profile, &plan), 1.0);
    }

    #[test]
    fn score_is_rounded_to_two_decimals() {
        let plan = sample_plan(18, 65, vec![RiskLevel::Low, RiskLevel::Medium]);
        let profile = UserProfile::new(30, 2, RiskLevel::Medium).unwrap();

        // 0.4 * 0.885 + 0.4 * 1.0 + 0.2 * 0.4 = 0.834, rounded to 0.83
        assert_eq!(match_score(&profile, &plan), 0.83);
    }
}
