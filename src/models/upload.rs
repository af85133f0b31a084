//! Upload success payload.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
  pub success: bool,
  /// Synthesized stored name, `{personId}_{competencyId}_{timestamp}.{ext}`.
  pub filename: String,
  #[serde(rename = "originalName")]
  pub original_name: String,
  /// Relative download path clients can hand back to the GET route.
  pub url: String,
  pub size: u64,
}
