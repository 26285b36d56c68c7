//! Company fast-info and detailed quote shapes.

use serde::Deserialize;
use serde_json::Value;

/// Cheap-to-fetch per-symbol summary. Everything except the symbol is
/// optional; absent values render as "N/A".
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FastInfo {
    pub symbol: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub quote_type: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub shares: Option<i64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub last_price: Option<f64>,
    #[serde(default)]
    pub previous_close: Option<f64>,
    #[serde(default)]
    pub open_price: Option<f64>,
    #[serde(default)]
    pub day_high: Option<f64>,
    #[serde(default)]
    pub day_low: Option<f64>,
    #[serde(default)]
    pub last_volume: Option<i64>,
    #[serde(default)]
    pub fifty_day_average: Option<f64>,
    #[serde(default)]
    pub two_hundred_day_average: Option<f64>,
    #[serde(default)]
    pub ten_day_average_volume: Option<i64>,
    #[serde(default)]
    pub three_month_average_volume: Option<i64>,
    #[serde(default)]
    pub year_high: Option<f64>,
    #[serde(default)]
    pub year_low: Option<f64>,
    #[serde(default)]
    pub year_change: Option<f64>,
    #[serde(default)]
    pub last_updated: String,
}

/// Full quote record: a free-form `info` map from the upstream provider.
#[derive(Clone, Debug, Deserialize)]
pub struct QuoteDetail {
    pub symbol: String,
    #[serde(default)]
    pub info: serde_json::Map<String, Value>,
    #[serde(default)]
    pub last_updated: String,
}

impl QuoteDetail {
    /// Looks up a string field in the info map.
    pub fn info_str(&self, key: &str) -> Option<&str> {
        self.info.get(key).and_then(Value::as_str)
    }

    /// Looks up a numeric field in the info map.
    pub fn info_num(&self, key: &str) -> Option<f64> {
        self.info.get(key).and_then(Value::as_f64)
    }

    /// The long-form business summary, when present.
    pub fn summary(&self) -> Option<&str> {
        self.info_str("longBusinessSummary")
    }
}
