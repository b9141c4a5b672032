//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Exemplar API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exemplar API",
        version = "0.1.0",
        description = "Example management API",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    nest(
        (path = "/v1/examples", api = domain_examples::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
