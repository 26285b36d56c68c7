//! Background fetch tasks.
//!
//! Each function here either spawns a repeating poller or fires a one-shot
//! fetch. Every fetch announces itself with [`Message::FetchStarted`] before
//! the request goes out and delivers exactly one result message afterwards,
//! carrying the fetch's sequence number. Errors cross the channel as display
//! strings; the typed error never leaves the fetch task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::api::ApiClient;
use crate::models::{DownloadRequest, QueryType};
use crate::poll::{PollHandle, Sequence, spawn_interval};
use crate::tui::event::{FetchTarget, Message};

/// Starts the dashboard poller: an immediate fetch, then one per `period`.
///
/// Returns `None` when the ticker list is empty; with nothing to ask for, no
/// request is ever made and the panel stays in its initial state.
pub fn spawn_dashboard_poll(
    api: Arc<ApiClient>,
    tickers: Vec<String>,
    period: Duration,
    seq: Sequence,
    tx: UnboundedSender<Message>,
) -> Option<PollHandle> {
    if tickers.is_empty() {
        debug!("no tickers configured, dashboard poll not started");
        return None;
    }
    Some(spawn_interval(period, move || {
        let api = api.clone();
        let tickers = tickers.clone();
        let tx = tx.clone();
        let seq = seq.next();
        async move {
            let _ = tx.send(Message::FetchStarted {
                target: FetchTarget::Dashboard,
                seq,
            });
            let result = api.dashboard(&tickers).await.map_err(|e| e.to_string());
            let _ = tx.send(Message::Dashboard { seq, result });
        }
    }))
}

/// Starts the market-status poller. Each tick refreshes exchange status and
/// the backend health probe together.
pub fn spawn_markets_poll(
    api: Arc<ApiClient>,
    period: Duration,
    seq: Sequence,
    tx: UnboundedSender<Message>,
) -> PollHandle {
    spawn_interval(period, move || {
        let api = api.clone();
        let tx = tx.clone();
        let markets_seq = seq.next();
        let health_seq = seq.next();
        async move {
            let _ = tx.send(Message::FetchStarted {
                target: FetchTarget::Markets,
                seq: markets_seq,
            });
            let _ = tx.send(Message::FetchStarted {
                target: FetchTarget::Health,
                seq: health_seq,
            });
            let (markets, health) = tokio::join!(api.market_status(), api.health());
            let _ = tx.send(Message::Markets {
                seq: markets_seq,
                result: markets.map_err(|e| e.to_string()),
            });
            let _ = tx.send(Message::Health {
                seq: health_seq,
                result: health.map_err(|e| e.to_string()),
            });
        }
    })
}

/// Fires the four company-scoped fetches for one ticker concurrently.
pub fn fetch_company(
    api: Arc<ApiClient>,
    ticker: String,
    seq: &Sequence,
    tx: UnboundedSender<Message>,
) {
    let fast_seq = seq.next();
    let owner_seq = seq.next();
    let quote_seq = seq.next();
    let volume_seq = seq.next();
    tokio::spawn(async move {
        for (target, n) in [
            (FetchTarget::FastInfo, fast_seq),
            (FetchTarget::Ownership, owner_seq),
            (FetchTarget::Quote, quote_seq),
            (FetchTarget::Volume, volume_seq),
        ] {
            let _ = tx.send(Message::FetchStarted { target, seq: n });
        }
        let (fast, owner, quote, volume) = tokio::join!(
            api.fast_info(&ticker),
            api.ownership(&ticker),
            api.quote(&ticker),
            api.volume_analysis(&ticker),
        );
        let _ = tx.send(Message::FastInfo {
            seq: fast_seq,
            ticker: ticker.clone(),
            result: fast.map_err(|e| e.to_string()),
        });
        let _ = tx.send(Message::Ownership {
            seq: owner_seq,
            ticker: ticker.clone(),
            result: owner.map_err(|e| e.to_string()),
        });
        let _ = tx.send(Message::Quote {
            seq: quote_seq,
            ticker: ticker.clone(),
            result: quote.map_err(|e| e.to_string()),
        });
        let _ = tx.send(Message::Volume {
            seq: volume_seq,
            ticker,
            result: volume.map_err(|e| e.to_string()),
        });
    });
}

/// Fetches sector and industry overviews together.
pub fn fetch_domains(api: Arc<ApiClient>, seq: &Sequence, tx: UnboundedSender<Message>) {
    let sectors_seq = seq.next();
    let industries_seq = seq.next();
    tokio::spawn(async move {
        let _ = tx.send(Message::FetchStarted {
            target: FetchTarget::Sectors,
            seq: sectors_seq,
        });
        let _ = tx.send(Message::FetchStarted {
            target: FetchTarget::Industries,
            seq: industries_seq,
        });
        let (sectors, industries) = tokio::join!(api.sectors(), api.industries());
        let _ = tx.send(Message::Sectors {
            seq: sectors_seq,
            result: sectors.map_err(|e| e.to_string()),
        });
        let _ = tx.send(Message::Industries {
            seq: industries_seq,
            result: industries.map_err(|e| e.to_string()),
        });
    });
}

/// Fetches the screener field catalog for one query type.
pub fn fetch_screener_fields(
    api: Arc<ApiClient>,
    query_type: QueryType,
    seq: &Sequence,
    tx: UnboundedSender<Message>,
) {
    let seq = seq.next();
    tokio::spawn(async move {
        let _ = tx.send(Message::FetchStarted {
            target: FetchTarget::ScreenerFields,
            seq,
        });
        let result = api
            .screener_fields(query_type)
            .await
            .map_err(|e| e.to_string());
        let _ = tx.send(Message::ScreenerFields {
            seq,
            query_type,
            result,
        });
    });
}

/// Executes a screen built from the current condition list.
pub fn run_screener(
    api: Arc<ApiClient>,
    query_type: QueryType,
    query: serde_json::Value,
    seq: &Sequence,
    tx: UnboundedSender<Message>,
) {
    let seq = seq.next();
    tokio::spawn(async move {
        let _ = tx.send(Message::FetchStarted {
            target: FetchTarget::ScreenerResults,
            seq,
        });
        let result = api
            .run_screener(query_type, &query)
            .await
            .map_err(|e| e.to_string());
        let _ = tx.send(Message::ScreenerResults { seq, result });
    });
}

/// Asks the assistant one question. No sequence: replies append to the
/// transcript in arrival order rather than replacing state.
pub fn ask_assistant(
    api: Arc<ApiClient>,
    question: String,
    ticker: String,
    tx: UnboundedSender<Message>,
) {
    tokio::spawn(async move {
        let result = api
            .ask(&question, &ticker)
            .await
            .map_err(|e| e.to_string());
        let _ = tx.send(Message::AssistantReply { result });
    });
}

/// Kicks off a bulk download for the configured tickers.
pub fn start_download(
    api: Arc<ApiClient>,
    request: DownloadRequest,
    seq: &Sequence,
    tx: UnboundedSender<Message>,
) {
    let seq = seq.next();
    tokio::spawn(async move {
        let _ = tx.send(Message::FetchStarted {
            target: FetchTarget::Download,
            seq,
        });
        let result = api
            .enhanced_download(&request)
            .await
            .map_err(|e| e.to_string());
        let _ = tx.send(Message::Download { seq, result });
    });
}
