//! AI trading signal shapes.

use serde::Deserialize;

/// The current recommendation for one ticker, generated upstream.
#[derive(Clone, Debug, Deserialize)]
pub struct Signal {
    pub ticker: String,
    pub signal: SignalKind,
    /// Short machine tags supporting the recommendation.
    #[serde(default)]
    pub signals: Vec<String>,
    /// Human-readable reasoning lines.
    #[serde(default)]
    pub reasoning: Vec<String>,
    #[serde(default)]
    pub generated_at: String,
}

/// Discrete recommendation. Unknown wire values fall back to
/// [`SignalKind::Hold`], the neutral recommendation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalKind {
    StrongBuy,
    Buy,
    Sell,
    StrongSell,
    #[default]
    #[serde(other)]
    Hold,
}

impl SignalKind {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::StrongBuy => "STRONG BUY",
            SignalKind::Buy => "BUY",
            SignalKind::Sell => "SELL",
            SignalKind::StrongSell => "STRONG SELL",
            SignalKind::Hold => "HOLD",
        }
    }

    /// Whether the recommendation leans long.
    pub fn is_buy(&self) -> bool {
        matches!(self, SignalKind::Buy | SignalKind::StrongBuy)
    }

    /// Whether the recommendation leans short.
    pub fn is_sell(&self) -> bool {
        matches!(self, SignalKind::Sell | SignalKind::StrongSell)
    }
}
