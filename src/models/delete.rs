//! Delete request and acknowledgment.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct DeleteRequest {
  #[serde(default)]
  pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
  pub success: bool,
}
