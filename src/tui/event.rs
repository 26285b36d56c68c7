//! Message types flowing into the UI task and the input reader.
//!
//! All state mutation happens on the UI task; background fetches and the
//! terminal input reader only send [`Message`]s over an unbounded channel.

use std::time::Duration;

use crossterm::event;
use tokio::sync::mpsc::UnboundedSender;

use crate::models::domain::DomainData;
use crate::models::{
    AskResponse, DashboardBundle, DownloadResult, FastInfo, FieldCatalog, HealthStatus,
    MarketStatusMap, OwnershipRecord, QueryType, QuoteDetail, ScreenerResult, VolumeReport,
};

/// Which resource a fetch targets. Used to route `FetchStarted` to the
/// right [`Resource`](crate::poll::Resource).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchTarget {
    Dashboard,
    Markets,
    Health,
    FastInfo,
    Ownership,
    Quote,
    Volume,
    Sectors,
    Industries,
    ScreenerFields,
    ScreenerResults,
    Download,
}

/// Everything the UI task can receive. Fetch results carry the sequence
/// number of the fetch that produced them; company-scoped results also carry
/// the ticker so replies for an abandoned symbol can be discarded.
#[derive(Debug)]
pub enum Message {
    Input(crossterm::event::Event),
    /// Periodic wakeup for time-based UI state such as status flashes.
    Tick,
    FetchStarted {
        target: FetchTarget,
        seq: u64,
    },
    Dashboard {
        seq: u64,
        result: Result<DashboardBundle, String>,
    },
    Markets {
        seq: u64,
        result: Result<MarketStatusMap, String>,
    },
    Health {
        seq: u64,
        result: Result<HealthStatus, String>,
    },
    FastInfo {
        seq: u64,
        ticker: String,
        result: Result<FastInfo, String>,
    },
    Ownership {
        seq: u64,
        ticker: String,
        result: Result<OwnershipRecord, String>,
    },
    Quote {
        seq: u64,
        ticker: String,
        result: Result<QuoteDetail, String>,
    },
    Volume {
        seq: u64,
        ticker: String,
        result: Result<VolumeReport, String>,
    },
    Sectors {
        seq: u64,
        result: Result<Vec<DomainData>, String>,
    },
    Industries {
        seq: u64,
        result: Result<Vec<DomainData>, String>,
    },
    ScreenerFields {
        seq: u64,
        query_type: QueryType,
        result: Result<FieldCatalog, String>,
    },
    ScreenerResults {
        seq: u64,
        result: Result<ScreenerResult, String>,
    },
    Download {
        seq: u64,
        result: Result<DownloadResult, String>,
    },
    AssistantReply {
        result: Result<AskResponse, String>,
    },
}

/// Side effects the update step asks the main loop to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    RefreshDashboard,
    RefreshMarkets,
    LoadCompany(String),
    LoadDomains,
    LoadScreenerFields,
    RunScreener,
    Ask(String),
    StartDownload,
    Quit,
}

/// Spawns a task that forwards terminal events to the UI task. Exits once
/// the receiving side is dropped.
pub fn spawn_event_reader(tx: UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll with a timeout so the blocking task yields regularly.
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(terminal_event)) => {
                    if tx.send(Message::Input(terminal_event)).is_err() {
                        break;
                    }
                }
                Ok(None) => {
                    if tx.is_closed() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
}
