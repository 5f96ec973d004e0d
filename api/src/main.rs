use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::info;

use sc_api::app::create_app;
use sc_api::routes::auth::AppState;
use sc_core::services::auth::AuthService;
use sc_core::services::email::EmailServiceTrait;
use sc_core::services::otp::{MemoryOtpStore, OtpConfig, OtpManager, OtpStore};
use sc_core::services::recommendation::RecommendationService;
use sc_infra::cache::{RedisClient, RedisOtpStore};
use sc_infra::database::connection::DatabasePool;
use sc_infra::database::postgres::{PgPlanRepository, PgUserHistoryRepository, PgUserRepository};
use sc_infra::database::setup::initialize_database;
use sc_infra::email::create_email_service;
use sc_shared::config::otp::OtpStoreBackend;
use sc_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting SafeCheck API Server");

    let config = AppConfig::from_env();
    info!(
        "Environment: {:?}, server will bind to: {}",
        config.environment,
        config.server.bind_address()
    );

    // Connect to Postgres, create missing tables, and seed the plan catalog
    let database = DatabasePool::new(config.database.clone())
        .await
        .map_err(into_io_error)?;
    database.health_check().await.map_err(into_io_error)?;
    initialize_database(database.get_pool())
        .await
        .map_err(into_io_error)?;

    // The OTP store backend decides the concrete server type, so each arm
    // monomorphizes its own copy of run_server.
    match config.otp.store {
        OtpStoreBackend::Memory => {
            info!("Using in-memory OTP store");
            let store = Arc::new(MemoryOtpStore::new().with_capacity(config.otp.max_entries));
            run_server(config, database, store).await
        }
        OtpStoreBackend::Redis => {
            info!("Using Redis OTP store");
            let client = RedisClient::new(config.cache.clone())
                .await
                .map_err(into_io_error)?;
            let store = Arc::new(RedisOtpStore::new(client));
            run_server(config, database, store).await
        }
    }
}

/// Wire repositories and services and run the HTTP server until shutdown
async fn run_server<S>(
    config: AppConfig,
    database: DatabasePool,
    otp_store: Arc<S>,
) -> std::io::Result<()>
where
    S: OtpStore + 'static,
{
    let pool = database.get_pool().clone();

    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let plan_repository = Arc::new(PgPlanRepository::new(pool.clone()));
    let history_repository = Arc::new(PgUserHistoryRepository::new(pool));

    let email_service: Arc<Box<dyn EmailServiceTrait>> =
        Arc::new(create_email_service(&config.email));

    let otp_manager = Arc::new(OtpManager::new(
        otp_store,
        OtpConfig::with_ttl_seconds(config.otp.ttl_seconds as i64),
    ));

    let auth_service = Arc::new(AuthService::new(user_repository, email_service, otp_manager));
    let recommendation_service = Arc::new(RecommendationService::new(
        plan_repository,
        history_repository,
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        recommendation_service,
    });

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;

    info!("SafeCheck API listening on {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if workers > 0 {
        server = server.workers(workers);
    }
    server.bind(&bind_address)?.run().await
}

fn into_io_error(error: sc_infra::InfrastructureError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, error.to_string())
}
