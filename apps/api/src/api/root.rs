//! Root liveness route

use axum::http::StatusCode;
use axum::response::Response;
use axum::{routing::get, Router};
use axum_helpers::responder;
use serde_json::json;

pub const WELCOME_MESSAGE: &str = "Welcome to the API server. This is the root route.";

async fn welcome() -> Response {
    responder::success(StatusCode::OK, json!({ "message": WELCOME_MESSAGE }))
}

pub fn router() -> Router {
    Router::new().route("/", get(welcome))
}
