use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Number of page routes loaded into the table
    pub routes: usize,
}

/// Failed route resolution
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("no route matches {path}")]
    NotFound { path: String },
    #[error("method {method} not allowed for {path}")]
    MethodNotAllowed {
        method: Method,
        path: String,
        allowed: Vec<Method>,
    },
}

/// Route table declaration rejected at construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("invalid path pattern '{template}': {reason}")]
    InvalidPattern { template: String, reason: String },
    #[error("view route '{0}' has no name")]
    UnnamedView(String),
    #[error("duplicate route name '{0}'")]
    DuplicateName(String),
    #[error("duplicate {method} path '{path}' in group '{group}'")]
    DuplicatePath {
        method: Method,
        path: String,
        group: String,
    },
    #[error("route '{name}' does not belong under group '{group}'")]
    GroupMismatch { name: String, group: String },
    #[error("redirect from '{from}' targets unknown route '{target}'")]
    UnknownRedirectTarget { from: String, target: String },
    #[error("redirect from '{from}' targets '{target}', which needs parameters")]
    ParameterisedRedirectTarget { from: String, target: String },
}

/// Reverse routing failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error("route '{0}' is not defined")]
    UnknownRoute(String),
    #[error("missing parameter '{parameter}' for route '{route}'")]
    MissingParameter { route: String, parameter: String },
}

/// View rendering failure
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("view '{0}' not found")]
    ViewNotFound(String),
    #[error("failed to read view '{view}': {source}")]
    Io {
        view: String,
        #[source]
        source: std::io::Error,
    },
}

/// Custom error type for page endpoints
///
/// Maps resolution and rendering failures to HTTP status codes with a JSON
/// `ErrorResponse` body.
#[derive(Debug)]
pub enum ApiError {
    /// No route or no method matched
    Resolve(ResolveError),
    /// The renderer could not produce the view
    Render(RenderError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message, allow) = match self {
            ApiError::Resolve(ResolveError::NotFound { path }) => (
                StatusCode::NOT_FOUND,
                format!("Route not found: {}", path),
                None,
            ),
            ApiError::Resolve(ResolveError::MethodNotAllowed {
                method,
                path,
                allowed,
            }) => (
                StatusCode::METHOD_NOT_ALLOWED,
                format!("Method {} not allowed for {}", method, path),
                Some(allowed),
            ),
            ApiError::Render(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Render error: {}", err),
                None,
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        let mut response = (status, body).into_response();
        if let Some(allowed) = allow {
            let value = allowed
                .iter()
                .map(Method::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            if let Ok(value) = HeaderValue::from_str(&value) {
                response.headers_mut().insert(header::ALLOW, value);
            }
        }
        response
    }
}

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        ApiError::Resolve(err)
    }
}

impl From<RenderError> for ApiError {
    fn from(err: RenderError) -> Self {
        ApiError::Render(err)
    }
}
