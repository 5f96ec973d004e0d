use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::recommendation::{RecommendRequest, RecommendationData};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::auth::AppState;

use sc_core::repositories::{PlanRepository, UserHistoryRepository, UserRepository};
use sc_core::services::email::EmailServiceTrait;
use sc_core::services::otp::OtpStore;
use sc_shared::types::response::ApiResponse;

/// Handler for POST /api/v1/plans/recommend
///
/// Saves the submitted profile snapshot and returns the catalog plans the
/// profile is eligible for, ranked by match score. The snapshot is saved
/// before matching runs, so a request that matches nothing still leaves a
/// history row.
///
/// # Request Body
///
/// ```json
/// {
///     "user_id": 1,
///     "age": 35,
///     "annual_income": 1200000,
///     "no_of_dependent": 2,
///     "risk_capacity": "medium"
/// }
/// ```
///
/// `dependents_count` and `risk_tolerance` are accepted as aliases.
///
/// # Responses
///
/// - 201 with the saved history row and the ranked plans
/// - 422 when a field is out of range
/// - 404 when no plan accepts the profile
pub async fn recommend<U, E, S, P, H>(
    state: web::Data<AppState<U, E, S, P, H>>,
    request: web::Json<RecommendRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EmailServiceTrait + 'static,
    S: OtpStore + 'static,
    P: PlanRepository + 'static,
    H: UserHistoryRepository + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    log::info!(
        "[{}] Processing recommend request for user {}",
        request_id,
        request.user_id
    );

    if let Err(validation_errors) = request.0.validate() {
        log::warn!("[{}] Recommend request failed validation", request_id);
        return validation_error_response(&validation_errors);
    }

    match state
        .recommendation_service
        .recommend(request.to_new_history())
        .await
    {
        Ok(outcome) => {
            log::info!(
                "[{}] Saved history {} with {} matching plans",
                request_id,
                outcome.history.id,
                outcome.plans.len()
            );
            HttpResponse::Created().json(ApiResponse::success(
                RecommendationData::new(&outcome.history, outcome.plans),
                "User history saved successfully with plan recommendations",
            ))
        }
        Err(e) => {
            log::warn!("[{}] Recommend failed: {}", request_id, e);
            domain_error_response(&e)
        }
    }
}
