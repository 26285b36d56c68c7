//! Market/exchange status and backend liveness shapes.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Open/closed state for one exchange.
#[derive(Clone, Debug, Deserialize)]
pub struct MarketStatus {
    pub market: String,
    pub is_open: bool,
    #[serde(default)]
    pub open_time: Option<String>,
    #[serde(default)]
    pub close_time: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub last_updated: String,
}

/// `/market/status` payload: one entry per exchange.
///
/// A `BTreeMap` keeps the render order stable across refreshes.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MarketStatusMap {
    #[serde(default)]
    pub markets: BTreeMap<String, MarketStatus>,
    #[serde(default)]
    pub timestamp: String,
}

/// `/health` liveness payload.
#[derive(Clone, Debug, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: String,
}

impl HealthStatus {
    /// Whether the backend reports itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}
