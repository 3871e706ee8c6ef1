//! Fabula API Server
//!
//! Startup order: environment → config (fail fast) → database pool →
//! migrations → application services → router → serve. The pool is closed
//! explicitly on shutdown.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::middleware as axum_middleware;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod middleware;
mod models;
mod routes;

use adapters::{GeminiBackend, PgCharacterRepository};
use application::{CharacterService, StoryService};
use config::Config;

/// Type aliases for application services with concrete adapter implementations
pub type AppCharacterService = CharacterService<PgCharacterRepository>;
pub type AppStoryService = StoryService<GeminiBackend>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub characters: Arc<AppCharacterService>,
    pub stories: Arc<AppStoryService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Fabula API initializing...");

    let config = Config::from_env().context("configuration validation failed")?;
    tracing::info!("Configuration validation passed");

    // Validate connections before reuse, recycle them after an hour.
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .test_before_acquire(true)
        .max_lifetime(Duration::from_secs(3600))
        .connect(&config.database_url())
        .await
        .context("failed to connect to database")?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("failed to run database migrations")?;

    tracing::info!("Database migrations completed");

    // Initialize application services
    let character_repo = Arc::new(PgCharacterRepository::new(pool.clone()));
    let backend = Arc::new(GeminiBackend::new(config.gemini_api_key.clone()));
    let characters = Arc::new(CharacterService::new(character_repo));
    let stories = Arc::new(StoryService::new(backend));

    tracing::info!("Story backend configured ({})", stories.model_id());

    let state = AppState {
        pool: pool.clone(),
        characters,
        stories,
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = axum::Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(routes::health::router())
        .merge(routes::characters::router())
        .merge(routes::stories::router())
        // Panics are caught inside the correlation middleware so even a
        // panicked request carries the x-request-id header.
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(axum_middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Fabula API listening on {addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Shutting down application...");
    pool.close().await;
    tracing::info!("Application shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
