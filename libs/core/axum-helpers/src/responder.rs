//! Response envelope and outcome renderers.
//!
//! Every endpoint answers with one envelope shape:
//! `{ status: "success"|"fail"|"error", data?, message?, code? }`.
//! The three renderers keep status codes, envelope fields, and log severity
//! consistent: success logs at trace, fail at info with its code, error at
//! error level. The error renderer never forwards internal detail to the
//! caller; it logs it and answers with a generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, trace};
use utoipa::ToSchema;

/// Error code rendered by the unmatched-route fallback.
pub const LASTSTOP_404_CODE: &str = "LASTSTOP_404";

/// Message rendered by the unmatched-route fallback.
pub const LASTSTOP_404_MESSAGE: &str = "The endpoint you are looking for can't be found.";

/// The only message the error renderer ever returns to a caller.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong.";

/// The envelope wrapping every response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct Envelope {
    /// Outcome marker: "success", "fail", or "error"
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Render a success envelope carrying `data`.
pub fn success(status: StatusCode, data: Value) -> Response {
    trace!("Responding with success.");

    let body = Envelope {
        status: "success".to_string(),
        data: Some(data),
        message: None,
        code: None,
    };

    (status, Json(body)).into_response()
}

/// Render a fail envelope: a caller-correctable problem with its code.
pub fn fail(status: StatusCode, message: String, code: &str) -> Response {
    info!(code, "Responding with fail.");

    let body = Envelope {
        status: "fail".to_string(),
        data: None,
        message: Some(message),
        code: Some(code.to_string()),
    };

    (status, Json(body)).into_response()
}

/// Render an error envelope.
///
/// `detail` is logged for the operator and never returned; callers always
/// see [`GENERIC_ERROR_MESSAGE`].
pub fn error(status: StatusCode, detail: &str) -> Response {
    error!(detail, "Responding with error.");

    let body = Envelope {
        status: "error".to_string(),
        data: None,
        message: Some(GENERIC_ERROR_MESSAGE.to_string()),
        code: None,
    };

    (status, Json(body)).into_response()
}

/// Terminal handler for unmatched routes.
///
/// Register as the router fallback.
pub async fn not_found() -> Response {
    fail(
        StatusCode::NOT_FOUND,
        LASTSTOP_404_MESSAGE.to_string(),
        LASTSTOP_404_CODE,
    )
}
