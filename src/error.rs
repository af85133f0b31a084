//! Request error taxonomy and its JSON rendering.
//!
//! Every failure a request can end with maps to a fixed client-facing
//! message; underlying I/O causes are logged where they occur and never
//! leak into the response body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
  #[error("File too large. Max 5MB")]
  FileTooLarge,
  #[error("Invalid file type")]
  UnsupportedType,
  #[error("Upload failed")]
  UploadFailed,
  /// Delete target absent; reported with a 200 like the other failures.
  #[error("File not found")]
  FileNotFound,
  /// Download target absent; the one failure carried on the status line.
  #[error("File not found")]
  DownloadNotFound,
  #[error("Delete failed")]
  DeleteFailed,
  #[error("Invalid request")]
  InvalidRequest,
  /// Multipart body that could not be parsed at all.
  #[error("Invalid request")]
  BadMultipart,
}

impl RequestError {
  fn status(&self) -> StatusCode {
    match self {
      RequestError::DownloadNotFound => StatusCode::NOT_FOUND,
      _ => StatusCode::OK,
    }
  }
}

impl IntoResponse for RequestError {
  fn into_response(self) -> Response {
    let body = Json(json!({ "success": false, "error": self.to_string() }));
    (self.status(), body).into_response()
  }
}
