//! HTTP routes: the `/api` router, health check and the static frontend

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderValue, Method};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;

use crate::config::{Config, CorsConfig};
use crate::HelloServerError;

/// State shared by the API handlers
#[derive(Clone)]
pub struct ApiState {
    pub greeting: Arc<str>,
}

/// Build the full application router from configuration
pub fn build_router(config: &Config) -> crate::Result<Router> {
    let api_state = ApiState {
        greeting: Arc::from(config.api.greeting.as_str()),
    };

    let mut router = Router::new()
        .nest("/api", api_router(api_state))
        .route("/health", get(health_handler));

    if config.static_files.enabled {
        tracing::debug!("Serving static files from {:?}", config.static_files.dir);
        router = router.fallback_service(
            ServeDir::new(&config.static_files.dir).append_index_html_on_directories(true),
        );
    }

    Ok(router.layer(cors_layer(&config.cors)?))
}

/// Routes mounted under `/api`
pub fn api_router(state: ApiState) -> Router {
    Router::new()
        .route("/hello", get(hello_handler))
        .with_state(state)
}

/// CORS policy allowing the configured frontend origins
pub fn cors_layer(config: &CorsConfig) -> crate::Result<CorsLayer> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| {
                HelloServerError::Config(format!("Invalid CORS origin {:?}: {}", origin, e))
            })
        })
        .collect::<crate::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

async fn hello_handler(State(api): State<ApiState>) -> impl IntoResponse {
    tracing::debug!("GET /api/hello");
    api.greeting.to_string()
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
