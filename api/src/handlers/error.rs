//! Shared error-to-response mapping for route handlers

use actix_web::HttpResponse;
use validator::ValidationErrors;

use sc_core::errors::DomainError;
use sc_shared::errors::error_codes;
use sc_shared::types::response::ApiResponse;

/// Map DTO validation failures onto a 422 envelope
///
/// Each offending field appears in `error.details` with its first message;
/// the envelope message carries one of them so single-field failures read
/// naturally without digging into details.
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut details = serde_json::Map::new();
    let mut envelope_message: Option<String> = None;

    for (field, field_errors) in errors.field_errors() {
        if let Some(first) = field_errors.first() {
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| first.code.to_string());
            if envelope_message.is_none() {
                envelope_message = Some(message.clone());
            }
            details.insert(field.to_string(), serde_json::Value::String(message));
        }
    }

    let message = envelope_message.unwrap_or_else(|| "Validation failed".to_string());

    HttpResponse::UnprocessableEntity().json(ApiResponse::<()>::error_with_details(
        message,
        error_codes::VALIDATION_ERROR,
        serde_json::Value::Object(details),
    ))
}

/// Map a domain error onto the response envelope
///
/// Handlers that need endpoint-specific wording match their own arms first
/// and fall back to this for the rest. Database and internal failures are
/// reported generically; the detail stays in the server log.
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => HttpResponse::UnprocessableEntity().json(
            ApiResponse::<()>::error(message.clone(), error_codes::VALIDATION_ERROR),
        ),
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(
            ApiResponse::<()>::error(format!("{} not found", resource), error_codes::NOT_FOUND),
        ),
        DomainError::NoMatch { message } => HttpResponse::NotFound().json(ApiResponse::<()>::error(
            message.clone(),
            error_codes::NO_MATCHING_PLANS,
        )),
        DomainError::Database { .. } => HttpResponse::InternalServerError().json(
            ApiResponse::<()>::error("A database error occurred", error_codes::DATABASE_ERROR),
        ),
        DomainError::StoreUnavailable { .. } | DomainError::Internal { .. } => {
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "An internal error occurred",
                error_codes::INTERNAL_ERROR,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use serde_json::Value;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(range(min = 18, max = 100, message = "Age must be between 18-100"))]
        age: i32,
    }

    async fn body_json(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_validation_response_carries_field_details() {
        let errors = Probe { age: 101 }.validate().unwrap_err();
        let response = validation_error_response(&errors);
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["success"], Value::Bool(false));
        assert_eq!(body["message"], "Age must be between 18-100");
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["details"]["age"], "Age must be between 18-100");
    }

    #[actix_web::test]
    async fn test_domain_validation_maps_to_422() {
        let response = domain_error_response(&DomainError::Validation {
            message: "Email already registered".to_string(),
        });
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Email already registered");
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_no_match_maps_to_404_with_plan_code() {
        let response = domain_error_response(&DomainError::NoMatch {
            message: "No matching plans found".to_string(),
        });
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["message"], "No matching plans found");
        assert_eq!(body["error"]["code"], "NO_MATCHING_PLANS");
    }

    #[actix_web::test]
    async fn test_database_error_is_not_leaked() {
        let response = domain_error_response(&DomainError::Database {
            message: "connection refused on 10.0.0.3:5432".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "A database error occurred");
        assert_eq!(body["error"]["code"], "DATABASE_ERROR");
    }

    #[actix_web::test]
    async fn test_store_unavailable_maps_to_internal() {
        let response = domain_error_response(&DomainError::StoreUnavailable {
            message: "redis timed out".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
