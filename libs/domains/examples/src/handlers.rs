use axum::{
    Json, Router,
    extract::{Path, State},
    response::Response,
    routing::{get, post},
};
use axum_helpers::responder::{self, Envelope};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ExampleError;
use crate::models::ExampleDto;
use crate::requests::{ExampleRequest, UuidRequest};
use crate::responses::ExampleResponse;
use crate::service::ExampleService;
use crate::unit_of_work::UnitOfWorkFactory;

const TAG: &str = "examples";

/// OpenAPI documentation for Examples API
#[derive(OpenApi)]
#[openapi(
    paths(create_example, read_example, update_example, delete_example),
    components(schemas(ExampleDto, Envelope)),
    tags(
        (name = TAG, description = "Example management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the examples router with all HTTP endpoints
pub fn router<F: UnitOfWorkFactory + 'static>(service: ExampleService<F>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_example))
        .route(
            "/{id}",
            get(read_example).put(update_example).delete(delete_example),
        )
        .with_state(shared_service)
}

/// Translate a service response into the wire envelope.
///
/// One arm per outcome: the item rides under `data.example`, fail messages
/// and codes pass through, and error details reach the responder only for
/// logging.
fn render(response: ExampleResponse) -> Response {
    let status = response.status();
    match response {
        ExampleResponse::Success { item } => {
            responder::success(status, json!({ "example": item }))
        }
        ExampleResponse::Fail { code, message } => responder::fail(status, message, code),
        ExampleResponse::Error { code, detail } => {
            responder::error(status, &format!("{code} {detail}"))
        }
    }
}

/// Create a new example
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = ExampleDto,
    responses(
        (status = 200, description = "Example created", body = Envelope),
        (status = 400, description = "Invalid or conflicting example payload", body = Envelope),
        (status = 500, description = "Internal error", body = Envelope)
    )
)]
async fn create_example<F: UnitOfWorkFactory>(
    State(service): State<Arc<ExampleService<F>>>,
    Json(body): Json<ExampleDto>,
) -> Response {
    let request = ExampleRequest::create(body, None);

    render(service.create(request).await)
}

/// Read one example by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "Example UUID")),
    responses(
        (status = 200, description = "Example found", body = Envelope),
        (status = 400, description = "Invalid or unknown id", body = Envelope),
        (status = 500, description = "Internal error", body = Envelope)
    )
)]
async fn read_example<F: UnitOfWorkFactory>(
    State(service): State<Arc<ExampleService<F>>>,
    Path(id): Path<String>,
) -> Response {
    let request = match UuidRequest::create(&id, None) {
        Ok(request) => request,
        Err(err) => return render(ExampleResponse::from_failure(&ExampleError::ExampleRead, err)),
    };

    render(service.read(request).await)
}

/// Update an example's name
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "Example UUID")),
    request_body = ExampleDto,
    responses(
        (status = 200, description = "Example updated", body = Envelope),
        (status = 400, description = "Invalid, mismatched, or conflicting payload", body = Envelope),
        (status = 500, description = "Internal error", body = Envelope)
    )
)]
async fn update_example<F: UnitOfWorkFactory>(
    State(service): State<Arc<ExampleService<F>>>,
    Path(id): Path<String>,
    Json(body): Json<ExampleDto>,
) -> Response {
    // The path owns the identity; a body that names a different id (or none)
    // is rejected before the service is involved.
    if body.id.as_deref() != Some(id.as_str()) {
        return render(ExampleResponse::from_failure(
            &ExampleError::ExampleUpdate,
            ExampleError::IdMismatch,
        ));
    }

    let request = ExampleRequest::create(body, None);

    render(service.update(request).await)
}

/// Soft-delete an example
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "Example UUID")),
    responses(
        (status = 200, description = "Example deleted", body = Envelope),
        (status = 400, description = "Invalid or unknown id", body = Envelope),
        (status = 500, description = "Internal error", body = Envelope)
    )
)]
async fn delete_example<F: UnitOfWorkFactory>(
    State(service): State<Arc<ExampleService<F>>>,
    Path(id): Path<String>,
) -> Response {
    let request = match UuidRequest::create(&id, None) {
        Ok(request) => request,
        Err(err) => {
            return render(ExampleResponse::from_failure(
                &ExampleError::ExampleDelete,
                err,
            ));
        }
    };

    render(service.delete(request).await)
}
