//! Stock quote and dashboard bundle shapes.

use serde::Deserialize;

use super::news::NewsItem;
use super::signal::Signal;

/// One symbol's quote plus precomputed technical indicators.
///
/// All indicators are computed upstream and delivered as plain numbers;
/// the client only formats them.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StockQuote {
    pub ticker: String,
    pub price: f64,
    #[serde(default)]
    pub price_change_1d: f64,
    #[serde(default)]
    pub price_change_5d: f64,
    #[serde(default)]
    pub rsi: f64,
    #[serde(default)]
    pub rsi_status: String,
    #[serde(default)]
    pub macd: f64,
    #[serde(default)]
    pub macd_signal: f64,
    #[serde(default)]
    pub ema20: f64,
    #[serde(default)]
    pub bollinger_high: f64,
    #[serde(default)]
    pub bollinger_low: f64,
    #[serde(default)]
    pub atr: f64,
    #[serde(default)]
    pub trend: Trend,
    #[serde(default)]
    pub volume: i64,
    #[serde(default)]
    pub last_updated: String,
}

/// Upstream trend classification.
///
/// Unrecognized wire values collapse to [`Trend::Neutral`] so a new backend
/// label can never break rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    #[serde(alias = "bullish")]
    Bullish,
    #[serde(alias = "bearish")]
    Bearish,
    #[default]
    #[serde(other)]
    Neutral,
}

impl Trend {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Bullish => "bullish",
            Trend::Bearish => "bearish",
            Trend::Neutral => "neutral",
        }
    }
}

/// The aggregate payload fetched per dashboard refresh cycle.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DashboardBundle {
    #[serde(default)]
    pub stocks: Vec<StockQuote>,
    #[serde(default)]
    pub news: Vec<NewsItem>,
    #[serde(default)]
    pub signals: Vec<Signal>,
    #[serde(default)]
    pub timestamp: String,
}
