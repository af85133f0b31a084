//! HTTP router and handlers.

use crate::app::AppState;
use crate::error::RequestError;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{Method, StatusCode, header};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod files;
pub mod upload;

/// Assemble the HTTP router with all routes.
///
/// The transport-level body limit is lifted so the upload handler can apply
/// its own 5 MiB policy and answer with the documented JSON error instead
/// of a bare 413.
pub fn build_router(state: AppState) -> Router {
  Router::new()
    .route(
      "/certificates",
      get(files::download)
        .post(upload::upload)
        .delete(files::remove)
        .options(preflight)
        .fallback(invalid_request),
    )
    .fallback(invalid_request)
    .layer(DefaultBodyLimit::disable())
    .layer(TraceLayer::new_for_http())
    .layer(
      CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::GET, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]),
    )
    .with_state(state)
}

/// CORS preflight acknowledgment; no side effects.
async fn preflight() -> StatusCode {
  StatusCode::OK
}

/// Anything matching no operation gets a failure body on a plain 200.
async fn invalid_request() -> RequestError {
  RequestError::InvalidRequest
}
