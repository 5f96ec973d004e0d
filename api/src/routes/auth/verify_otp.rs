use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth::{VerifyOtpData, VerifyOtpRequest};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::auth::AppState;

use sc_core::errors::DomainError;
use sc_core::repositories::{PlanRepository, UserHistoryRepository, UserRepository};
use sc_core::services::email::EmailServiceTrait;
use sc_core::services::otp::OtpStore;
use sc_shared::errors::error_codes;
use sc_shared::types::response::ApiResponse;
use sc_shared::utils::email::mask_email;

/// Handler for POST /api/v1/auth/verify-otp
///
/// Checks a submitted code against the live one for the email. The code
/// may arrive as a JSON string or a number; both verify the same way. A
/// match consumes the code, so a second submission of the same code fails.
///
/// # Responses
///
/// - 200 when the code matched
/// - 401 when the code is wrong, expired, or already used
/// - 404 when the email is not registered
pub async fn verify_otp<U, E, S, P, H>(
    state: web::Data<AppState<U, E, S, P, H>>,
    request: web::Json<VerifyOtpRequest>,
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
        "[{}] Processing verify-otp request for email: {}",
        request_id,
        mask_email(&request.email)
    );

    if let Err(validation_errors) = request.0.validate() {
        log::warn!("[{}] Verify-otp request failed validation", request_id);
        return validation_error_response(&validation_errors);
    }

    let candidate = request.otp.as_candidate();

    match state
        .auth_service
        .verify_otp(&request.email, &candidate)
        .await
    {
        Ok(result) if result.verified => {
            log::info!("[{}] OTP verified for user {}", request_id, result.user.id);
            HttpResponse::Ok().json(ApiResponse::success(
                VerifyOtpData::from_user(&result.user),
                "OTP verified successfully",
            ))
        }
        Ok(_) => {
            log::warn!(
                "[{}] OTP rejected for email: {}",
                request_id,
                mask_email(&request.email)
            );
            HttpResponse::Unauthorized().json(ApiResponse::<()>::error(
                "Invalid OTP or OTP expired",
                error_codes::INVALID_OTP,
            ))
        }
        Err(DomainError::NotFound { .. }) => {
            log::warn!(
                "[{}] Verify-otp for unregistered email: {}",
                request_id,
                mask_email(&request.email)
            );
            HttpResponse::NotFound().json(ApiResponse::<()>::error(
                "User not found",
                error_codes::NOT_FOUND,
            ))
        }
        Err(e) => {
            log::error!("[{}] Verify-otp failed: {}", request_id, e);
            domain_error_response(&e)
        }
    }
}
