//! CORS middleware configuration for cross-origin requests.
//!
//! The recommendation frontend is served from a different origin than the
//! API, so every browser call crosses origins. The configuration is
//! environment-aware: permissive in development, an explicit allow-list
//! in production.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Creates a CORS middleware instance configured for the current environment.
///
/// In development mode, this allows permissive CORS so the frontend dev
/// server (typically `http://localhost:3000`) and API tools work without
/// setup. In production mode, origins are restricted to the configured
/// domains.
///
/// # Environment Variables
/// - `ENVIRONMENT`: Set to "production" for production settings
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (production only)
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let max_age = env::var("CORS_MAX_AGE")
        .unwrap_or_else(|_| "3600".to_string())
        .parse::<usize>()
        .unwrap_or(3600);

    if environment == "production" {
        create_production_cors(max_age)
    } else {
        create_development_cors(max_age)
    }
}

/// Creates CORS configuration for development environment.
fn create_development_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        // Allow any origin in development
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::USER_AGENT,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(max_age)
        .supports_credentials()
}

/// Creates CORS configuration for production environment.
///
/// Only origins listed in `ALLOWED_ORIGINS` (plus the `WEB_DOMAIN`
/// convenience pair) may call the API.
fn create_production_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(max_age);

    if let Ok(allowed_origins) = env::var("ALLOWED_ORIGINS") {
        for origin in allowed_origins.split(',').map(|s| s.trim()) {
            if !origin.is_empty() {
                log::info!("Adding allowed origin: {}", origin);
                cors = cors.allowed_origin(origin);
            }
        }
    }

    if let Ok(web_domain) = env::var("WEB_DOMAIN") {
        cors = cors.allowed_origin(&format!("https://{}", web_domain));
        cors = cors.allowed_origin(&format!("https://www.{}", web_domain));
    }

    cors
}
