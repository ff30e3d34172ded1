//! HTTP adapters - REST API implementations.
//!
//! `exercise` holds the endpoints; [`app_router`] wraps them with the
//! cross-cutting tower layers.

pub mod exercise;

use axum::Router;
use http::{header, HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::{Environment, ServerConfig};

pub use exercise::{exercise_router, ExerciseAppState};

/// Builds the complete application router.
pub fn app_router(state: ExerciseAppState, server: &ServerConfig) -> Router {
    exercise_router().with_state(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(server.request_timeout()))
            .layer(cors_layer(server)),
    )
}

/// Configured origins win; development without a list is permissive.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if !origins.is_empty() {
        base.allow_origin(origins)
    } else if server.environment == Environment::Development {
        base.allow_origin(Any)
    } else {
        base
    }
}
