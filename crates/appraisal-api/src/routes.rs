//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, run};

/// Create the API router
pub fn create_router() -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Valuation endpoint
        .route("/run", post(run))
}
