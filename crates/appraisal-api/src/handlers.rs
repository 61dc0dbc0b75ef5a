//! HTTP API handlers

use axum::{body::Bytes, Json};
use tracing::debug;

use appraisal_core::valuation::{self, HealthStatus, Valuation, ValuationRequest};

/// Health check endpoint
pub async fn health() -> Json<HealthStatus> {
    Json(valuation::health())
}

/// Valuation endpoint
///
/// The body is read raw so that malformed JSON, a missing content type, or
/// an unexpected shape all fall back to the default asset instead of a 4xx.
pub async fn run(body: Bytes) -> Json<Valuation> {
    let request = ValuationRequest::from_slice_lenient(&body);
    if request.asset.is_none() {
        debug!("Valuation request without a usable asset ({} bytes), using default", body.len());
    }

    Json(valuation::run(request.asset_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_matches_core_valuation() {
        let Json(result) = run(Bytes::from_static(br#"{"asset": "Lakeside Villa"}"#)).await;
        assert_eq!(result, valuation::run("Lakeside Villa"));

        let Json(result) = run(Bytes::from_static(b"not json")).await;
        assert_eq!(result, valuation::run(valuation::DEFAULT_ASSET));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let Json(status) = health().await;
        assert_eq!(status, HealthStatus::ok());
    }
}
