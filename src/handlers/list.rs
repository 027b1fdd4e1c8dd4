use crate::routes;
use crate::state::AppState;
use crate::table::RouteInfo;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/routes handler - List the page route table
///
/// Entries come back in declaration order, which is also resolution order.
#[utoipa::path(
    get,
    path = routes::ROUTE_LIST,
    responses(
        (status = 200, description = "Declared page routes", body = Vec<RouteInfo>)
    ),
    tag = "routes"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<RouteInfo>>) {
    let entries = state.routes.describe();
    tracing::debug!("Listed {} routes", entries.len());
    (StatusCode::OK, Json(entries))
}
