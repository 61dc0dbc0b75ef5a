//! appraisal-api: HTTP API for the Appraisal Sandbox
//!
//! Exposes the placeholder valuation behind `/health` and `/run`.
//! Built with axum for async HTTP handling.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use error::{ApiError, Result};
pub use routes::create_router;
pub use server::{start_server, start_server_with_shutdown};
