//! Bulk historical/indicator download request and result shapes.

use serde::Deserialize;

/// Parameters for `POST /enhanced-download`. The backend takes everything as
/// query parameters, with `tickers` repeated per symbol.
#[derive(Clone, Debug)]
pub struct DownloadRequest {
    pub tickers: Vec<String>,
    pub period: String,
    pub interval: String,
    pub include_indicators: bool,
    pub include_sentiment: bool,
}

impl Default for DownloadRequest {
    fn default() -> Self {
        Self {
            tickers: Vec::new(),
            period: "1mo".to_string(),
            interval: "1d".to_string(),
            include_indicators: true,
            include_sentiment: false,
        }
    }
}

impl DownloadRequest {
    /// Query pairs in the order the backend documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = self
            .tickers
            .iter()
            .map(|t| ("tickers", t.clone()))
            .collect();
        pairs.push(("period", self.period.clone()));
        pairs.push(("interval", self.interval.clone()));
        pairs.push(("include_indicators", self.include_indicators.to_string()));
        pairs.push(("include_sentiment", self.include_sentiment.to_string()));
        pairs
    }
}

/// Summary of a completed bulk download. The row data itself is large and is
/// not kept; only the shape is surfaced in the UI.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DownloadResult {
    #[serde(default)]
    pub tickers: Vec<String>,
    #[serde(default)]
    pub columns: Vec<String>,
    /// `[rows, columns]`.
    #[serde(default)]
    pub shape: Vec<i64>,
    #[serde(default)]
    pub technical_indicators_included: Option<bool>,
    #[serde(default)]
    pub sentiment_analysis_included: Option<bool>,
    #[serde(default)]
    pub timestamp: String,
}

impl DownloadResult {
    /// One-line description for the status bar.
    pub fn summary(&self) -> String {
        let rows = self.shape.first().copied().unwrap_or(0);
        let cols = self.shape.get(1).copied().unwrap_or(0);
        format!(
            "downloaded {} ticker(s): {rows} rows x {cols} columns",
            self.tickers.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_repeat_tickers() {
        let request = DownloadRequest {
            tickers: vec!["AAPL".into(), "MSFT".into()],
            ..Default::default()
        };
        let pairs = request.query_pairs();
        assert_eq!(pairs[0], ("tickers", "AAPL".to_string()));
        assert_eq!(pairs[1], ("tickers", "MSFT".to_string()));
        assert!(pairs.contains(&("period", "1mo".to_string())));
    }

    #[test]
    fn summary_reads_shape() {
        let result = DownloadResult {
            tickers: vec!["AAPL".into()],
            shape: vec![120, 14],
            ..Default::default()
        };
        assert_eq!(result.summary(), "downloaded 1 ticker(s): 120 rows x 14 columns");
    }
}
