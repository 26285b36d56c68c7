//! Ownership and holder shapes for one ticker.

use serde::Deserialize;
use serde_json::Value;

/// Comprehensive ownership snapshot for one symbol.
///
/// Holder tables come straight from the upstream provider with loosely
/// defined columns; the rows we render get typed fields, the rest stays
/// as raw JSON.
#[derive(Clone, Debug, Deserialize)]
pub struct OwnershipRecord {
    pub symbol: String,
    #[serde(default)]
    pub institutional_holders: Vec<HolderRow>,
    #[serde(default)]
    pub mutual_fund_holders: Vec<HolderRow>,
    #[serde(default)]
    pub major_holders_breakdown: serde_json::Map<String, Value>,
    #[serde(default)]
    pub insider_transactions: Vec<Value>,
    #[serde(default)]
    pub insider_roster: Vec<Value>,
    #[serde(default)]
    pub last_updated: String,
}

/// One row of an institutional or mutual-fund holder table.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct HolderRow {
    #[serde(default, alias = "Holder")]
    pub holder: String,
    #[serde(default, alias = "Shares")]
    pub shares: Option<f64>,
    #[serde(default, alias = "Value")]
    pub value: Option<f64>,
    #[serde(default, alias = "Date Reported")]
    pub date_reported: Option<String>,
}
