//! Core data types for the CAALM search service.
//!
//! Documents mirror the records stored in the backend: contracts and
//! files with optional string fields and a `$createdAt` timestamp.
//! Requests and responses use the camelCase names of the search API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of record a document represents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    #[default]
    Contract,
    File,
}

/// A candidate document evaluated against a search query
///
/// Every field is optional. Absent fields never contribute to a score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Backend document identifier
    #[serde(rename = "$id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub kind: DocumentKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_name: Option<String>,

    /// Display name used by file records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Managers, stored either as one string or a list joined with ", "
    #[serde(
        default,
        deserialize_with = "deserialize_managers",
        skip_serializing_if = "Option::is_none"
    )]
    pub assigned_managers: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Contract value, used by amount filters and sorting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// Creation timestamp as stored by the backend (RFC 3339)
    #[serde(rename = "$createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Managers {
    One(String),
    Many(Vec<String>),
}

fn deserialize_managers<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let managers = Option::<Managers>::deserialize(deserializer)?;
    Ok(managers.map(|m| match m {
        Managers::One(s) => s,
        Managers::Many(list) => list.join(", "),
    }))
}

impl Document {
    /// Display name: `contractName`, falling back to `name`
    pub fn display_name(&self) -> Option<&str> {
        non_empty(self.contract_name.as_deref()).or_else(|| non_empty(self.name.as_deref()))
    }

    /// Parsed creation timestamp
    ///
    /// Returns `None` when the timestamp is missing or unparseable.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC)
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Which record kinds a search covers (`type` query parameter)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    Contracts,
    Files,
    #[default]
    All,
}

impl KindFilter {
    pub fn accepts(&self, kind: DocumentKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Contracts => kind == DocumentKind::Contract,
            KindFilter::Files => kind == DocumentKind::File,
        }
    }
}

impl FromStr for KindFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contracts" => Ok(KindFilter::Contracts),
            "files" => Ok(KindFilter::Files),
            "all" => Ok(KindFilter::All),
            other => Err(format!(
                "unknown type '{other}' (expected contracts, files or all)"
            )),
        }
    }
}

/// Result ordering key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    Relevance,
    CreatedAt,
    Name,
    Amount,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortBy::Relevance),
            "createdAt" => Ok(SortBy::CreatedAt),
            "name" => Ok(SortBy::Name),
            "amount" => Ok(SortBy::Amount),
            other => Err(format!(
                "unknown sort key '{other}' (expected relevance, createdAt, name or amount)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order '{other}' (expected asc or desc)")),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// Request to search contracts and files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Free-text query
    #[serde(default)]
    pub q: String,

    #[serde(rename = "type", default)]
    pub kind: KindFilter,

    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub contract_type: Option<String>,

    #[serde(default)]
    pub amount_min: Option<f64>,
    #[serde(default)]
    pub amount_max: Option<f64>,

    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub sort_order: SortOrder,

    /// Page size (optional, clamped to the configured maximum)
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: Option<usize>,
}

impl SearchRequest {
    /// Request for `q` with every other parameter at its default
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }
}

/// A scored document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Relevance score (higher = more relevant), rounded to 2 decimals
    pub score: f64,

    pub document: Document,
}

/// Response from a search operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Original query string
    pub query: String,

    /// Current page of results
    pub results: Vec<SearchHit>,

    /// Number of documents that passed filtering, before pagination
    pub total: usize,

    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,

    /// Query duration in milliseconds
    pub duration_ms: u64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}
