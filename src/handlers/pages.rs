use crate::error::ApiError;
use crate::state::AppState;
use crate::table::Resolution;
use crate::view::ViewContext;
use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

/// Fallback handler - resolve every page request through the route table
///
/// Views render as HTML, redirects answer 302. Unknown paths and wrong methods
/// surface as 404 and 405 JSON errors.
pub async fn pages_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, ApiError> {
    let path = uri.path();

    let resolution = state.routes.resolve(&method, path).map_err(|err| {
        tracing::info!("Route resolution failed: {}", err);
        err
    })?;

    match resolution {
        Resolution::Redirect { location } => {
            tracing::debug!("Redirecting {} to {}", path, location);
            Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
        }
        Resolution::View {
            name,
            view,
            group,
            params,
        } => {
            tracing::debug!(
                "Resolved {} {} to route {} (group: {}, view: {}, params: {:?})",
                method,
                path,
                name,
                group,
                view,
                params
            );

            let context = ViewContext {
                route: name,
                params: &params,
            };
            let page = state.renderer.render(view, &context).map_err(|err| {
                tracing::error!("Failed to render view {}: {}", view, err);
                err
            })?;
            Ok(Html(page).into_response())
        }
    }
}
