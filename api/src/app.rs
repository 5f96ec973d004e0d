//! Application factory
//!
//! This module provides the factory for creating the Actix-web
//! application with its routes, middleware, and shared state.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::cors::create_cors;
use crate::routes::auth::{send_otp::send_otp, signup::signup, verify_otp::verify_otp, AppState};
use crate::routes::plans::recommend::recommend;

use sc_core::repositories::{PlanRepository, UserHistoryRepository, UserRepository};
use sc_core::services::email::EmailServiceTrait;
use sc_core::services::otp::OtpStore;

/// Create and configure the application with all dependencies
pub fn create_app<U, E, S, P, H>(
    app_state: web::Data<AppState<U, E, S, P, H>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    E: EmailServiceTrait + 'static,
    S: OtpStore + 'static,
    P: PlanRepository + 'static,
    H: UserHistoryRepository + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware (CORS runs before logging)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(signup::<U, E, S, P, H>))
                        .route("/send-otp", web::post().to(send_otp::<U, E, S, P, H>))
                        .route("/verify-otp", web::post().to(verify_otp::<U, E, S, P, H>)),
                )
                .service(
                    web::scope("/plans")
                        .route("/recommend", web::post().to(recommend::<U, E, S, P, H>)),
                )
                // API documentation endpoint
                .route("/", web::get().to(api_documentation)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "safecheck-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "SafeCheck API v1",
        "endpoints": {
            "health": "/health",
            "auth": {
                "signup": {
                    "path": "/api/v1/auth/signup",
                    "method": "POST",
                    "description": "Register a new user",
                    "request_body": {
                        "name": "string (letters, spaces, hyphens)",
                        "email": "string (email)",
                        "dateOfBirth": "string (YYYY-MM-DD, 18+)"
                    },
                    "responses": {
                        "201": "User registered",
                        "422": "Validation failed or email already registered"
                    }
                },
                "send_otp": {
                    "path": "/api/v1/auth/send-otp",
                    "method": "POST",
                    "description": "Email a one-time verification code",
                    "request_body": {
                        "email": "string (email)"
                    },
                    "responses": {
                        "200": "OTP sent",
                        "404": "Email not registered",
                        "500": "Delivery failed"
                    }
                },
                "verify_otp": {
                    "path": "/api/v1/auth/verify-otp",
                    "method": "POST",
                    "description": "Verify a submitted one-time code",
                    "request_body": {
                        "email": "string (email)",
                        "otp": "string or number"
                    },
                    "responses": {
                        "200": "OTP verified",
                        "401": "Invalid or expired OTP",
                        "404": "Email not registered"
                    }
                }
            },
            "plans": {
                "recommend": {
                    "path": "/api/v1/plans/recommend",
                    "method": "POST",
                    "description": "Save a profile snapshot and rank matching plans",
                    "request_body": {
                        "user_id": "integer",
                        "age": "integer (18-100)",
                        "annual_income": "integer (rupees)",
                        "no_of_dependent": "integer",
                        "risk_capacity": "string (low/medium/high)"
                    },
                    "responses": {
                        "201": "History saved, ranked plans returned",
                        "404": "No matching plans",
                        "422": "Profile out of range"
                    }
                }
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
