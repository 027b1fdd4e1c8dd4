use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::table::{RouteGroup, RouteInfo};

/// OpenAPI documentation for the operational endpoints
///
/// Page routes are HTML and resolved by the route table, so they are not listed here.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "clinic-web API",
        version = "1.0.0",
        description = "Page routing for the clinic appointment application"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            RouteInfo,
            RouteGroup
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "routes", description = "Route table inspection")
    )
)]
pub struct ApiDoc;
