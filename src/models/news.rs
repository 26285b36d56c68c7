//! News feed shapes and sentiment classification.

use serde::Deserialize;

/// One news article with its upstream sentiment classification.
#[derive(Clone, Debug, Deserialize)]
pub struct NewsItem {
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub sentiment: Sentiment,
    #[serde(default)]
    pub confidence: f64,
}

/// Upstream tone classification of a news item.
///
/// Anything the client does not recognize renders with the neutral style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    #[serde(alias = "POSITIVE")]
    Positive,
    #[serde(alias = "NEGATIVE")]
    Negative,
    #[default]
    #[serde(other)]
    Neutral,
}

impl Sentiment {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

/// The `/news` endpoint answers with either a bare array or a `{news: [...]}`
/// wrapper depending on backend version; accept both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NewsFeed {
    Wrapped { news: Vec<NewsItem> },
    Bare(Vec<NewsItem>),
}

impl NewsFeed {
    /// Unwraps into the item list regardless of wire shape.
    pub fn into_items(self) -> Vec<NewsItem> {
        match self {
            NewsFeed::Wrapped { news } => news,
            NewsFeed::Bare(items) => items,
        }
    }
}
