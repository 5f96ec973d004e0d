//! Eligibility filtering and ranking

use std::cmp::Ordering;

use crate::domain::entities::Plan;
use crate::domain::value_objects::{PlanMatch, UserProfile};
use crate::errors::{DomainError, DomainResult};

use super::scoring::match_score;

/// Hard eligibility gate: the applicant's age must sit inside the plan's
/// age band and the plan must cater for their risk tolerance
pub fn is_eligible(profile: &UserProfile, plan: &Plan) -> bool {
    plan.min_age <= profile.age
        && profile.age <= plan.max_age
        && plan.risk_capacity.contains(&profile.risk_capacity)
}

/// Score every eligible plan and return them ordered best first
///
/// Plans the profile is not eligible for never appear in the result, no
/// matter how well they would have scored. Ties keep the catalog order:
/// the sort is stable and only compares scores. An empty result is an
/// error, not an empty list, so callers surface it as "no match" rather
/// than an empty recommendation set.
pub fn rank_plans(profile: &UserProfile, plans: &[Plan]) -> DomainResult<Vec<PlanMatch>> {
    let mut matches: Vec<PlanMatch> = plans
        .iter()
        .filter(|plan| is_eligible(profile, plan))
        .map(|plan| PlanMatch::from_plan(plan, match_score(profile, plan)))
        .collect();

    if matches.is_empty() {
        return Err(DomainError::NoMatch {
            message: "No matching plans found".to_string(),
        });
    }

    matches.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(Ordering::Equal)
    });

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::entities::{PlanType, RiskLevel};

    fn plan(id: i64, name: &str, min_age: i32, max_age: i32, risk: Vec<RiskLevel>) -> Plan {
        let now = Utc::now();
        Plan {
            id,
            plan_name: name.to_string(),
            plan_type: PlanType::Term,
            min_age,
            max_age,
            min_sum_assured: 500_000,
            max_sum_assured: 5_000_000,
            risk_capacity: risk,
            description: None,
            features: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn eligibility_requires_age_inside_band() {
        let p = plan(1, "Band", 18, 65, vec![RiskLevel::Medium]);
        let inside = UserProfile::new(18, 0, RiskLevel::Medium).unwrap();
        let upper = UserProfile::new(65, 0, RiskLevel::Medium).unwrap();
        let above = UserProfile::new(66, 0, RiskLevel::Medium).unwrap();

        assert!(is_eligible(&inside, &p));
        assert!(is_eligible(&upper, &p));
        assert!(!is_eligible(&above, &p));
    }

    #[test]
    fn eligibility_requires_risk_capacity_overlap() {
        let p = plan(1, "Cautious", 18, 65, vec![RiskLevel::Low, RiskLevel::Medium]);
        let aggressive = UserProfile::new(30, 0, RiskLevel::High).unwrap();

        assert!(!is_eligible(&aggressive, &p));
    }

    #[test]
    fn empty_risk_capacity_matches_nobody() {
        let p = plan(1, "Empty", 18, 65, vec![]);
        let profile = UserProfile::new(30, 0, RiskLevel::Low).unwrap();

        assert!(!is_eligible(&profile, &p));
    }

    #[test]
    fn rank_orders_by_score_descending() {
        let profile = UserProfile::new(42, 5, RiskLevel::Medium).unwrap();
        let plans = vec![
            // Midpoint 36.5: further from 42 than the second plan.
            plan(1, "Off Center", 18, 55, vec![RiskLevel::Medium]),
            // Midpoint 41.5: nearly perfect for a 42 year old.
            plan(2, "Centered", 18, 65, vec![RiskLevel::Medium]),
        ];

        let ranked = rank_plans(&profile, &plans).unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].plan_id, 2);
        assert_eq!(ranked[1].plan_id, 1);
        assert!(ranked[0].match_score >= ranked[1].match_score);
    }

    #[test]
    fn ineligible_plans_never_appear_in_results() {
        let profile = UserProfile::new(42, 5, RiskLevel::High).unwrap();
        let plans = vec![
            plan(1, "Cautious", 18, 65, vec![RiskLevel::Low, RiskLevel::Medium]),
            plan(2, "Aggressive", 18, 65, vec![RiskLevel::High]),
        ];

        let ranked = rank_plans(&profile, &plans).unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].plan_id, 2);
    }

    #[test]
    fn rank_with_no_eligible_plan_is_no_match() {
        let profile = UserProfile::new(70, 0, RiskLevel::Low).unwrap();
        let plans = vec![plan(1, "Young Only", 18, 40, vec![RiskLevel::Low])];

        let err = rank_plans(&profile, &plans).unwrap_err();

        assert!(matches!(err, DomainError::NoMatch { .. }));
        assert_eq!(err.to_string(), "No matching plans: No matching plans found");
    }

    #[test]
    fn rank_over_empty_catalog_is_no_match() {
        let profile = UserProfile::new(30, 0, RiskLevel::Low).unwrap();

        let err = rank_plans(&profile, &[]).unwrap_err();

        assert!(matches!(err, DomainError::NoMatch { .. }));
    }

    #[test]
    fn equal_scores_keep_catalog_order() {
        let profile = UserProfile::new(40, 5, RiskLevel::Medium).unwrap();
        let plans = vec![
            plan(7, "First In Catalog", 20, 60, vec![RiskLevel::Medium]),
            plan(3, "Second In Catalog", 20, 60, vec![RiskLevel::Medium]),
        ];

        let ranked = rank_plans(&profile, &plans).unwrap();

        assert_eq!(ranked[0].match_score, ranked[1].match_score);
        assert_eq!(ranked[0].plan_id, 7);
        assert_eq!(ranked[1].plan_id, 3);
    }
}
