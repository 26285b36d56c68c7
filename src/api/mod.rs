//! HTTP client for the dashboard backend.
//!
//! Translates logical requests (resource + parameters) into GET/POST calls
//! against a configurable base URL and returns decoded JSON. Every call is
//! fire-once: no retry, no caching. A non-success status or transport
//! failure surfaces as a single [`DeckError`](crate::DeckError) and callers
//! decide how to present it.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, warn};

use crate::Result;
use crate::models::{
    AskResponse, DashboardBundle, DownloadRequest, DownloadResult, FastInfo, FieldCatalog,
    HealthStatus, MarketStatusMap, NewsFeed, NewsItem, OwnershipRecord, QueryType, QuoteDetail,
    ScreenerResult, Signal, StockQuote, ValueCatalog, VolumeReport,
};
use crate::models::domain::DomainData;

/// Per-request timeout; the backend proxies slow upstream providers.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Normalizes a raw ticker: strips surrounding whitespace and single or
/// double quotes, then uppercases. Idempotent; an input that is empty after
/// stripping stays empty (callers reject those).
pub fn normalize_ticker(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| c == '\'' || c == '"')
        .trim()
        .to_uppercase()
}

/// Client for the dashboard backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client against the given base URL (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Http`](crate::DeckError::Http) if the underlying
    /// HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends a prepared request and decodes the JSON body.
    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "backend returned error status");
            return Err(crate::DeckError::Status(status));
        }
        Ok(response.json().await?)
    }

    /// Fetches the aggregate dashboard bundle for a ticker list.
    pub async fn dashboard(&self, tickers: &[String]) -> Result<DashboardBundle> {
        let joined = tickers
            .iter()
            .map(|t| normalize_ticker(t))
            .collect::<Vec<_>>()
            .join(",");
        debug!(tickers = %joined, "fetching dashboard bundle");
        self.send(
            self.http
                .get(self.url("/dashboard"))
                .query(&[("tickers", joined.as_str())]),
        )
        .await
    }

    /// Fetches one symbol's quote and indicators.
    pub async fn stock(&self, ticker: &str) -> Result<StockQuote> {
        let path = format!("/stocks/{}", normalize_ticker(ticker));
        self.send(self.http.get(self.url(&path))).await
    }

    /// Fetches the news feed, accepting both wire shapes.
    pub async fn news(&self, limit: usize) -> Result<Vec<NewsItem>> {
        let feed: NewsFeed = self
            .send(
                self.http
                    .get(self.url("/news"))
                    .query(&[("limit", limit.to_string())]),
            )
            .await?;
        Ok(feed.into_items())
    }

    /// Fetches the current signal for one ticker.
    pub async fn signal(&self, ticker: &str) -> Result<Signal> {
        let path = format!("/signals/{}", normalize_ticker(ticker));
        self.send(self.http.get(self.url(&path))).await
    }

    /// Backend liveness probe.
    pub async fn health(&self) -> Result<HealthStatus> {
        self.send(self.http.get(self.url("/health"))).await
    }

    /// Fetches open/closed status for all exchanges.
    pub async fn market_status(&self) -> Result<MarketStatusMap> {
        self.send(self.http.get(self.url("/market/status"))).await
    }

    /// Fetches the ownership snapshot for one ticker.
    pub async fn ownership(&self, ticker: &str) -> Result<OwnershipRecord> {
        let path = format!("/ownership/{}", normalize_ticker(ticker));
        self.send(self.http.get(self.url(&path))).await
    }

    /// Fetches the cheap per-symbol summary.
    pub async fn fast_info(&self, ticker: &str) -> Result<FastInfo> {
        let path = format!("/fastinfo/{}", normalize_ticker(ticker));
        self.send(self.http.get(self.url(&path))).await
    }

    /// Fetches the full quote record.
    pub async fn quote(&self, ticker: &str) -> Result<QuoteDetail> {
        let path = format!("/quote/{}", normalize_ticker(ticker));
        self.send(self.http.get(self.url(&path))).await
    }

    /// Fetches the volume analysis report.
    pub async fn volume_analysis(&self, ticker: &str) -> Result<VolumeReport> {
        let path = format!("/volume-analysis/{}", normalize_ticker(ticker));
        self.send(self.http.get(self.url(&path))).await
    }

    /// Fetches all sector overviews.
    pub async fn sectors(&self) -> Result<Vec<DomainData>> {
        self.send(self.http.get(self.url("/sectors"))).await
    }

    /// Fetches all industry overviews.
    pub async fn industries(&self) -> Result<Vec<DomainData>> {
        self.send(self.http.get(self.url("/industries"))).await
    }

    /// Fetches the screener field catalog for a query type.
    pub async fn screener_fields(&self, query_type: QueryType) -> Result<FieldCatalog> {
        self.send(
            self.http
                .get(self.url("/query-builder/fields"))
                .query(&[("query_type", query_type.as_str())]),
        )
        .await
    }

    /// Fetches the restricted-value catalog for a query type.
    pub async fn screener_values(&self, query_type: QueryType) -> Result<ValueCatalog> {
        self.send(
            self.http
                .get(self.url("/query-builder/values"))
                .query(&[("query_type", query_type.as_str())]),
        )
        .await
    }

    /// Executes a screen, posting the boolean expression body.
    pub async fn run_screener(
        &self,
        query_type: QueryType,
        query: &serde_json::Value,
    ) -> Result<ScreenerResult> {
        let path = format!("/query-builder/execute/{}", query_type.as_str());
        debug!(query_type = query_type.as_str(), "executing screener query");
        self.send(
            self.http
                .post(self.url(&path))
                .json(&json!({ "query": query })),
        )
        .await
    }

    /// Triggers a bulk historical/indicator download.
    pub async fn enhanced_download(&self, request: &DownloadRequest) -> Result<DownloadResult> {
        self.send(
            self.http
                .post(self.url("/enhanced-download"))
                .query(&request.query_pairs()),
        )
        .await
    }

    /// Asks the assistant a question scoped to a ticker.
    pub async fn ask(&self, question: &str, ticker: &str) -> Result<AskResponse> {
        let normalized = normalize_ticker(ticker);
        self.send(
            self.http
                .get(self.url("/ask"))
                .query(&[("q", question), ("ticker", normalized.as_str())]),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_quotes_and_uppercases() {
        assert_eq!(normalize_ticker("'aapl' "), "AAPL");
        assert_eq!(normalize_ticker("\" msft\""), "MSFT");
        assert_eq!(normalize_ticker("brk.b"), "BRK.B");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["'aapl' ", " TSLA", "\"googl\"", ""] {
            let once = normalize_ticker(raw);
            assert_eq!(normalize_ticker(&once), once);
        }
    }

    #[test]
    fn normalize_empty_after_stripping() {
        assert_eq!(normalize_ticker("  '' "), "");
        assert_eq!(normalize_ticker(""), "");
    }

    #[test]
    fn urls_join_against_base() {
        let client = ApiClient::new("http://127.0.0.1:8000").unwrap();
        assert_eq!(client.url("/dashboard"), "http://127.0.0.1:8000/dashboard");
        assert_eq!(
            client.url("/stocks/AAPL"),
            "http://127.0.0.1:8000/stocks/AAPL"
        );
    }
}
