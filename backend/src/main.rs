//! Photo gallery backend
//!
//! A REST API over a single JSON document store, plus hosting for uploaded images
//! and the static frontend.

mod api;
mod config;
mod errors;
mod models;
mod store;
mod uploads;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use store::Store;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.json_logs() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting photo gallery backend");
    tracing::info!("Data file: {:?}", config.data_file);
    tracing::info!("Upload directory: {:?}", config.upload_dir);
    tracing::info!("Static directory: {:?}", config.static_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    tokio::fs::create_dir_all(&config.upload_dir).await?;
    if !config.static_dir.join("index.html").exists() {
        tracing::warn!("No index.html in {:?}; the frontend will not load", config.static_dir);
    }

    // Open the store, seeding it on first run
    let store = Arc::new(Store::open(&config.data_file).await?);
    tracing::info!("Store holds {} images", store.list_images().await.len());

    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);
    let uploads = ServeDir::new(&state.config.upload_dir);
    let frontend = ServeDir::new(&state.config.static_dir).append_index_html_on_directories(true);

    // API routes
    let api_routes = Router::new()
        // Images
        .route("/images", get(api::list_images))
        .route(
            "/images/upload",
            post(api::upload_image).layer(upload_limit),
        )
        .route("/images/{id}", get(api::get_image))
        .route("/images/{id}/like", post(api::like_image))
        .route("/images/{id}/favorite", post(api::favorite_image))
        .route("/images/{id}/comment", post(api::comment_image))
        // Categories
        .route("/categories", get(api::list_categories));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .nest_service("/uploads", uploads)
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
