//! certvault library entrypoint.
//!
//! Modules:
//! - `app`: startup, configuration, shared state
//! - `http`: Axum router and handlers
//! - `error`: request error taxonomy and JSON rendering
//! - `models`: typed request/response bodies
//! - `storage`: flat certificate directory on disk
//! - `util`: tracing setup

pub mod app;
pub mod error;
pub mod http;
pub mod models;
pub mod storage;
pub mod util;
