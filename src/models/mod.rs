//! Typed request and response bodies.

pub mod delete;
pub mod upload;
