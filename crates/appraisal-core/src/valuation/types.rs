//! Valuation types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::DEFAULT_ASSET;

/// Incoming valuation request
#[derive(Debug, Clone, Default)]
pub struct ValuationRequest {
    /// Free-form asset description
    pub asset: Option<String>,
}

impl ValuationRequest {
    /// Build a request from a raw body without ever failing.
    ///
    /// Invalid JSON, a non-object body, or a non-string `asset` all yield a
    /// request with no asset.
    pub fn from_slice_lenient(body: &[u8]) -> Self {
        let asset = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|value| value.get("asset").and_then(Value::as_str).map(str::to_string));

        Self { asset }
    }

    /// The asset description, or `"property"` when absent
    pub fn asset_or_default(&self) -> &str {
        self.asset.as_deref().unwrap_or(DEFAULT_ASSET)
    }
}

/// Valuation result returned by `/run`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    pub estimated_value: f64,
    pub confidence: f64,
}

/// Health check body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Which multiplier rule an asset description matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Villa,
    Land,
    Standard,
}

impl AssetCategory {
    /// Classify by case-insensitive substring; villa is checked before land.
    pub fn classify(asset: &str) -> Self {
        let lower = asset.to_lowercase();
        if lower.contains("villa") {
            Self::Villa
        } else if lower.contains("land") {
            Self::Land
        } else {
            Self::Standard
        }
    }

    /// Multiplier as an integer percentage of the base value
    pub fn multiplier_percent(self) -> u32 {
        match self {
            Self::Villa => 110,
            Self::Land => 90,
            Self::Standard => 100,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Villa => "villa",
            Self::Land => "land",
            Self::Standard => "standard",
        }
    }
}
