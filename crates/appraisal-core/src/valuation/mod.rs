//! Placeholder asset valuation
//!
//! A fixed base value scaled by a keyword-driven multiplier. There is no
//! market model behind it; the numbers are constants.

mod types;

pub use types::{AssetCategory, HealthStatus, Valuation, ValuationRequest};

use tracing::debug;

/// Value every estimate starts from
pub const BASE_VALUE: u32 = 100_000;

/// Confidence attached to every estimate, independent of input
pub const CONFIDENCE: f64 = 0.9;

/// Asset description used when the request carries none
pub const DEFAULT_ASSET: &str = "property";

/// Estimate the value of an asset from its free-form description.
pub fn run(asset: &str) -> Valuation {
    let category = AssetCategory::classify(asset);
    let estimated_value = f64::from(BASE_VALUE * category.multiplier_percent() / 100);

    debug!(
        "Valued asset {:?} as {} => {}",
        asset,
        category.as_str(),
        estimated_value
    );

    Valuation {
        estimated_value,
        confidence: CONFIDENCE,
    }
}

/// Liveness check; always healthy.
pub fn health() -> HealthStatus {
    HealthStatus::ok()
}
