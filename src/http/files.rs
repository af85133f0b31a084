//! Certificate download and deletion.

use crate::app::AppState;
use crate::error::RequestError;
use crate::models::delete::{DeleteRequest, DeleteResponse};
use crate::storage;
use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::IntoResponse;
use serde::Deserialize;
use tokio_util::io::ReaderStream;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct DownloadParams {
  pub file: Option<String>,
}

/// Stream a stored certificate back as a forced download.
pub async fn download(
  State(state): State<AppState>,
  params: Result<Query<DownloadParams>, QueryRejection>,
) -> Result<impl IntoResponse, RequestError> {
  let Ok(Query(params)) = params else {
    return Err(RequestError::InvalidRequest);
  };
  let Some(requested) = params.file else {
    return Err(RequestError::InvalidRequest);
  };
  // Only the final path segment is honored
  let Some(name) = storage::sanitize_name(&requested) else {
    return Err(RequestError::DownloadNotFound);
  };

  let (file, len) = match state.storage.open(name).await {
    Ok(Some(v)) => v,
    Ok(None) => return Err(RequestError::DownloadNotFound),
    Err(e) => {
      error!("certificate open error: {e}");
      return Err(RequestError::DownloadNotFound);
    }
  };

  let mut headers = HeaderMap::new();
  headers.insert(
    header::CONTENT_TYPE,
    HeaderValue::from_static("application/octet-stream"),
  );
  headers.insert(
    header::CONTENT_DISPOSITION,
    format!("attachment; filename=\"{name}\"")
      .parse()
      .unwrap_or_else(|_| HeaderValue::from_static("attachment")),
  );
  headers.insert(header::CONTENT_LENGTH, HeaderValue::from(len));

  Ok((headers, Body::from_stream(ReaderStream::new(file))))
}

/// Delete a stored certificate named in the JSON body.
///
/// The body is parsed leniently: anything that is not a JSON object with a
/// `filename` string behaves like an empty filename. The name gets the same
/// final-segment reduction as downloads before any path is built.
pub async fn remove(
  State(state): State<AppState>,
  body: Bytes,
) -> Result<Json<DeleteResponse>, RequestError> {
  let req: DeleteRequest = serde_json::from_slice(&body).unwrap_or_default();
  if req.filename.is_empty() {
    return Err(RequestError::FileNotFound);
  }
  let Some(name) = storage::sanitize_name(&req.filename) else {
    return Err(RequestError::FileNotFound);
  };

  match state.storage.remove(name).await {
    Ok(true) => {
      info!("deleted certificate {name}");
      Ok(Json(DeleteResponse { success: true }))
    }
    Ok(false) => Err(RequestError::FileNotFound),
    Err(e) => {
      error!("certificate delete error: {e}");
      Err(RequestError::DeleteFailed)
    }
  }
}
