use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{health_handler, list_handler, pages_handler};
use crate::routes;
use crate::state::AppState;

/// Build the application router.
///
/// Operational endpoints are registered with axum directly; every other request
/// falls through to the page route table.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(health_handler))
        .route(routes::ROUTE_LIST, get(list_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(pages_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
