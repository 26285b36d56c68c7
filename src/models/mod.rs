//! Value shapes received from the dashboard backend.
//!
//! Every entity is an immutable snapshot deserialized from JSON. Each carries
//! its own backend timestamp; the client never fabricates one. Optional or
//! unexpected fields deserialize to defaults so a partial payload can never
//! fail rendering.

pub mod assistant;
pub mod domain;
pub mod download;
pub mod fastinfo;
pub mod market;
pub mod news;
pub mod ownership;
pub mod screener;
pub mod signal;
pub mod stock;
pub mod volume;

pub use assistant::{AskResponse, ChatMessage, ChatRole};
pub use domain::{DomainData, DomainKind};
pub use download::{DownloadRequest, DownloadResult};
pub use fastinfo::{FastInfo, QuoteDetail};
pub use market::{HealthStatus, MarketStatus, MarketStatusMap};
pub use news::{NewsFeed, NewsItem, Sentiment};
pub use ownership::OwnershipRecord;
pub use screener::{
    CmpOp, Condition, FieldCatalog, QueryType, ScreenerResult, ValueCatalog, build_query,
};
pub use signal::{Signal, SignalKind};
pub use stock::{DashboardBundle, StockQuote, Trend};
pub use volume::VolumeReport;
