use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth::{SendOtpData, SendOtpRequest};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::auth::AppState;

use sc_core::errors::DomainError;
use sc_core::repositories::{PlanRepository, UserHistoryRepository, UserRepository};
use sc_core::services::email::EmailServiceTrait;
use sc_core::services::otp::OtpStore;
use sc_shared::errors::error_codes;
use sc_shared::types::response::ApiResponse;
use sc_shared::utils::email::mask_email;

/// Handler for POST /api/v1/auth/send-otp
///
/// Issues a fresh verification code for a registered email and delivers
/// it. Reissuing replaces any outstanding code for that email.
///
/// # Responses
///
/// - 200 when the code went out
/// - 404 when the email is not registered
/// - 500 when the store or the email provider failed
pub async fn send_otp<U, E, S, P, H>(
    state: web::Data<AppState<U, E, S, P, H>>,
    request: web::Json<SendOtpRequest>,
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
        "[{}] Processing send-otp request for email: {}",
        request_id,
        mask_email(&request.email)
    );

    if let Err(validation_errors) = request.0.validate() {
        log::warn!("[{}] Send-otp request failed validation", request_id);
        return validation_error_response(&validation_errors);
    }

    match state.auth_service.send_otp(&request.email).await {
        Ok(user) => {
            log::info!("[{}] OTP issued for user {}", request_id, user.id);
            HttpResponse::Ok().json(ApiResponse::success(
                SendOtpData::from_user(&user),
                "OTP Sent Successfully",
            ))
        }
        Err(DomainError::NotFound { .. }) => {
            log::warn!(
                "[{}] Send-otp for unregistered email: {}",
                request_id,
                mask_email(&request.email)
            );
            HttpResponse::NotFound().json(ApiResponse::<()>::error(
                "Email not found in our system",
                error_codes::NOT_FOUND,
            ))
        }
        Err(e @ (DomainError::Internal { .. } | DomainError::StoreUnavailable { .. })) => {
            log::error!("[{}] Failed to send OTP: {}", request_id, e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "Failed to send OTP",
                error_codes::INTERNAL_ERROR,
            ))
        }
        Err(e) => {
            log::error!("[{}] Send-otp failed: {}", request_id, e);
            domain_error_response(&e)
        }
    }
}
