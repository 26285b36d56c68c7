//! Sector and industry overview shapes.

use serde::Deserialize;

/// Whether a domain record describes a sector or an industry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DomainKind {
    #[default]
    Sector,
    Industry,
}

impl DomainKind {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            DomainKind::Sector => "Sectors",
            DomainKind::Industry => "Industries",
        }
    }

    /// Toggles between the two views.
    pub fn toggle(&mut self) {
        *self = match self {
            DomainKind::Sector => DomainKind::Industry,
            DomainKind::Industry => DomainKind::Sector,
        };
    }
}

/// Aggregate statistics for a sector or industry.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DomainOverview {
    #[serde(default)]
    pub companies_count: Option<i64>,
    #[serde(default)]
    pub industries_count: Option<i64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_weight: Option<f64>,
    #[serde(default)]
    pub employee_count: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A top company inside a domain.
#[derive(Clone, Debug, Deserialize)]
pub struct TopCompany {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub market_weight: Option<f64>,
}

/// A research report attached to a domain.
#[derive(Clone, Debug, Deserialize)]
pub struct ResearchReport {
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub date: String,
}

/// One sector or industry record from `/sectors` or `/industries`.
#[derive(Clone, Debug, Deserialize)]
pub struct DomainData {
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub overview: DomainOverview,
    #[serde(default)]
    pub top_companies: Vec<TopCompany>,
    #[serde(default)]
    pub research_reports: Vec<ResearchReport>,
    #[serde(default)]
    pub last_updated: String,
}
