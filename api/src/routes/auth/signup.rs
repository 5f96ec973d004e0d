use actix_web::{web, HttpResponse};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth::{SignupData, SignupRequest};
use crate::handlers::{domain_error_response, validation_error_response};

use sc_core::repositories::{PlanRepository, UserHistoryRepository, UserRepository};
use sc_core::services::auth::AuthService;
use sc_core::services::email::EmailServiceTrait;
use sc_core::services::otp::OtpStore;
use sc_core::services::recommendation::RecommendationService;
use sc_shared::types::response::ApiResponse;
use sc_shared::utils::email::mask_email;

/// Application state that holds shared services
pub struct AppState<U, E, S, P, H>
where
    U: UserRepository,
    E: EmailServiceTrait,
    S: OtpStore,
    P: PlanRepository,
    H: UserHistoryRepository,
{
    pub auth_service: Arc<AuthService<U, E, S>>,
    pub recommendation_service: Arc<RecommendationService<P, H>>,
}

/// Handler for POST /api/v1/auth/signup
///
/// Registers a new user from name, email, and date of birth.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Priya Sharma",
///     "email": "priya@example.com",
///     "dateOfBirth": "1990-05-10"
/// }
/// ```
///
/// # Responses
///
/// - 201 with the created user on success
/// - 422 when a field fails validation or the email is already registered
pub async fn signup<U, E, S, P, H>(
    state: web::Data<AppState<U, E, S, P, H>>,
    request: web::Json<SignupRequest>,
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
        "[{}] Processing signup request for email: {}",
        request_id,
        mask_email(&request.email)
    );

    if let Err(validation_errors) = request.0.validate() {
        log::warn!("[{}] Signup request failed validation", request_id);
        return validation_error_response(&validation_errors);
    }

    match state
        .auth_service
        .register(&request.name, &request.email, &request.date_of_birth)
        .await
    {
        Ok(user) => {
            log::info!("[{}] Registered user {}", request_id, user.id);
            HttpResponse::Created().json(ApiResponse::success(
                SignupData::from_user(&user),
                "User registered successfully",
            ))
        }
        Err(e) => {
            log::warn!("[{}] Signup failed: {}", request_id, e);
            domain_error_response(&e)
        }
    }
}
