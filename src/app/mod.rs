//! Application setup and runtime.

use crate::{http, storage::StorageDir};
use std::net::SocketAddr;
use tracing::info;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
  pub storage: StorageDir,
}

/// Start the HTTP server with configured environment.
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  crate::util::init_tracing();

  let root = std::env::var("CERTVAULT_STORAGE_DIR")
    .unwrap_or_else(|_| "/var/www/training-system/uploads/certificates".to_string());
  let storage = StorageDir::new(root);
  storage.ensure().await?;

  let state = AppState {
    storage: storage.clone(),
  };
  let app = http::build_router(state);

  let addr: SocketAddr = std::env::var("CERTVAULT_ADDR")
    .unwrap_or_else(|_| "127.0.0.1:8019".to_string())
    .parse()?;

  info!("certificate endpoint: http://{}/certificates", addr);
  info!("storage directory:    {}", storage.root().display());

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;
  Ok(())
}
