//! Volume analysis shapes.

use serde::Deserialize;

/// `/volume-analysis/{ticker}` payload.
#[derive(Clone, Debug, Deserialize)]
pub struct VolumeReport {
    pub ticker: String,
    #[serde(default)]
    pub volume_analysis: VolumeAnalysis,
    /// One-line human summary computed upstream.
    #[serde(default)]
    pub volume_signal: String,
    #[serde(default)]
    pub timestamp: String,
}

/// Detailed volume metrics, all optional since short histories upstream
/// produce partial results.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct VolumeAnalysis {
    #[serde(default)]
    pub current_volume: Option<i64>,
    #[serde(default)]
    pub avg_volume_20d: Option<i64>,
    #[serde(default)]
    pub volume_ratio: Option<f64>,
    #[serde(default)]
    pub price_change_pct: Option<f64>,
    #[serde(default)]
    pub vo_signal: Option<String>,
    #[serde(default)]
    pub pv_relationship: Option<String>,
    #[serde(default)]
    pub conviction: Option<String>,
}
