//! API routes module

pub mod root;

use axum::{routing::get, Json, Router};
use axum_helpers::responder;
use core_config::server::ServerConfig;
use domain_examples::{handlers, ExampleService, UnitOfWorkFactory};
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

/// Create all API routes
///
/// Anything that matches nothing falls through to the shared 404 responder,
/// so unknown paths get the same envelope as every other failure.
pub fn routes<F: UnitOfWorkFactory + 'static>(
    service: ExampleService<F>,
    server: &ServerConfig,
) -> Router {
    Router::new()
        .merge(root::router())
        .nest("/v1/examples", handlers::router(service))
        .route("/api-docs/openapi.json", get(openapi_json))
        .fallback(responder::not_found)
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Serve the generated OpenAPI document
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
