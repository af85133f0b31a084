//! Multipart certificate upload.

use crate::app::AppState;
use crate::error::RequestError;
use crate::models::upload::UploadResponse;
use crate::storage;
use axum::Json;
use axum::extract::State;
use axum::extract::multipart::{Multipart, MultipartRejection};
use chrono::Utc;
use tracing::{error, info};

/// Hard cap on a single upload: 5 MiB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// MIME labels accepted for upload. Client-asserted; content is not sniffed.
const ALLOWED_TYPES: [&str; 6] = [
  "application/pdf",
  "image/jpeg",
  "image/png",
  "image/jpg",
  "application/msword",
  "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

struct FilePart {
  original_name: String,
  content_type: String,
  bytes: Vec<u8>,
}

/// Store one uploaded certificate.
///
/// The file field is consumed chunk by chunk and the size policy enforced
/// as it streams, so an oversized body is rejected without buffering more
/// than the threshold plus one chunk.
pub async fn upload(
  State(state): State<AppState>,
  multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, RequestError> {
  let Ok(mut multipart) = multipart else {
    return Err(RequestError::InvalidRequest);
  };

  let mut person_id: Option<String> = None;
  let mut competency_id: Option<String> = None;
  let mut file: Option<FilePart> = None;

  loop {
    let mut field = match multipart.next_field().await {
      Ok(Some(f)) => f,
      Ok(None) => break,
      Err(e) => {
        error!("multipart parse error: {e}");
        return Err(RequestError::BadMultipart);
      }
    };
    let field_name = field.name().unwrap_or("").to_string();
    match field_name.as_str() {
      "file" => {
        let original_name = field.file_name().unwrap_or("").to_string();
        let content_type = field.content_type().unwrap_or("").to_string();
        let mut bytes = Vec::new();
        loop {
          let chunk = match field.chunk().await {
            Ok(Some(c)) => c,
            Ok(None) => break,
            Err(e) => {
              error!("multipart read error: {e}");
              return Err(RequestError::BadMultipart);
            }
          };
          if bytes.len() + chunk.len() > MAX_UPLOAD_BYTES {
            return Err(RequestError::FileTooLarge);
          }
          bytes.extend_from_slice(&chunk);
        }
        file = Some(FilePart {
          original_name,
          content_type,
          bytes,
        });
      }
      "personId" => person_id = field.text().await.ok(),
      "competencyId" => competency_id = field.text().await.ok(),
      _ => {}
    }
  }

  // No file part means the upload trigger was never met
  let Some(file) = file else {
    return Err(RequestError::InvalidRequest);
  };

  if !ALLOWED_TYPES.contains(&file.content_type.as_str()) {
    return Err(RequestError::UnsupportedType);
  }

  let person_id = person_id.unwrap_or_else(|| "unknown".to_string());
  let competency_id = competency_id.unwrap_or_else(|| "unknown".to_string());

  let timestamp = Utc::now().timestamp();
  let filename =
    storage::synthesize_name(&person_id, &competency_id, timestamp, &file.original_name);

  let size = file.bytes.len() as u64;
  if let Err(e) = state.storage.save(&filename, &file.bytes).await {
    error!("certificate persist error: {e}");
    return Err(RequestError::UploadFailed);
  }

  info!("stored certificate {filename} ({size} bytes)");

  let url = format!("/uploads/certificates/{filename}");
  Ok(Json(UploadResponse {
    success: true,
    filename,
    original_name: file.original_name,
    url,
    size,
  }))
}
