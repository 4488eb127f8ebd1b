//! Weighted-field relevance scoring.
//!
//! Each searchable field has a fixed weight. A field contributes its
//! weight scaled by the strongest rule it satisfies (exact, prefix,
//! substring, then fractional word overlap for multi-word queries).
//! The field sum is then adjusted by multiplicative boosts derived
//! from document metadata, and rounded to 2 decimal places.
//!
//! Scoring is pure: the current time is passed in, never read.
//!
//! # Timestamps
//!
//! `$createdAt` is parsed with [`parse_timestamp`](crate::core::types::parse_timestamp).
//! A missing or unparseable timestamp gets neither the recency boost
//! nor the staleness penalty.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::core::search::query::NormalizedQuery;
use crate::core::types::{non_empty, Document};

/// Documents created after `now - 30 days` are recent
pub const RECENT_WINDOW_DAYS: i64 = 30;

/// Documents created before `now - 365 days` are stale
pub const STALE_AFTER_DAYS: i64 = 365;

/// Searchable document fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    /// `contractName`, or `name` for records without one
    Name,
    ContractNumber,
    Vendor,
    Department,
    ContractType,
    Description,
    AssignedManagers,
    Compliance,
    Priority,
}

/// Field weights, in scoring order
pub const FIELD_WEIGHTS: [(SearchField, f64); 9] = [
    (SearchField::Name, 15.0),
    (SearchField::ContractNumber, 12.0),
    (SearchField::Vendor, 10.0),
    (SearchField::Department, 8.0),
    (SearchField::ContractType, 8.0),
    (SearchField::Description, 6.0),
    (SearchField::AssignedManagers, 5.0),
    (SearchField::Compliance, 4.0),
    (SearchField::Priority, 3.0),
];

impl SearchField {
    /// Field name as it appears in documents
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Name => "contractName",
            SearchField::ContractNumber => "contractNumber",
            SearchField::Vendor => "vendor",
            SearchField::Department => "department",
            SearchField::ContractType => "contractType",
            SearchField::Description => "description",
            SearchField::AssignedManagers => "assignedManagers",
            SearchField::Compliance => "compliance",
            SearchField::Priority => "priority",
        }
    }

    pub fn weight(&self) -> f64 {
        FIELD_WEIGHTS
            .iter()
            .find(|(field, _)| field == self)
            .map(|(_, weight)| *weight)
            .unwrap_or(0.0)
    }
}

impl Document {
    /// Raw value of a searchable field, `None` when absent or empty
    pub fn field(&self, field: SearchField) -> Option<&str> {
        match field {
            SearchField::Name => self.display_name(),
            SearchField::ContractNumber => non_empty(self.contract_number.as_deref()),
            SearchField::Vendor => non_empty(self.vendor.as_deref()),
            SearchField::Department => non_empty(self.department.as_deref()),
            SearchField::ContractType => non_empty(self.contract_type.as_deref()),
            SearchField::Description => non_empty(self.description.as_deref()),
            SearchField::AssignedManagers => non_empty(self.assigned_managers.as_deref()),
            SearchField::Compliance => non_empty(self.compliance.as_deref()),
            SearchField::Priority => non_empty(self.priority.as_deref()),
        }
    }
}

/// How a field value matched the query
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum MatchKind {
    Exact,
    Prefix,
    Substring,
    WordOverlap { matched: usize, total: usize },
}

impl MatchKind {
    /// Multiplier applied to the field weight
    pub fn factor(&self) -> f64 {
        match self {
            MatchKind::Exact => 2.0,
            MatchKind::Prefix => 1.5,
            MatchKind::Substring => 1.0,
            MatchKind::WordOverlap { matched, total } => *matched as f64 / *total as f64,
        }
    }
}

/// Match a lower-cased field value against the query.
///
/// Rules are tried in order and the first one that holds wins.
pub fn match_field(value: &str, query: &NormalizedQuery) -> Option<MatchKind> {
    let text = query.text();
    if value == text {
        return Some(MatchKind::Exact);
    }
    if value.starts_with(text) {
        return Some(MatchKind::Prefix);
    }
    if value.contains(text) {
        return Some(MatchKind::Substring);
    }
    if !query.is_multi_word() {
        return None;
    }

    let field_words: Vec<&str> = value.split_whitespace().collect();
    let matched = query
        .words()
        .iter()
        .filter(|word| field_words.iter().any(|fw| fw.contains(word.as_str())))
        .count();

    (matched > 0).then_some(MatchKind::WordOverlap {
        matched,
        total: query.words().len(),
    })
}

/// Metadata adjustment applied to the summed field score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Adjustment {
    Recency,
    HighPriority,
    Active,
    Staleness,
}

impl Adjustment {
    pub fn factor(&self) -> f64 {
        match self {
            Adjustment::Recency => 1.2,
            Adjustment::HighPriority => 1.1,
            Adjustment::Active => 1.05,
            Adjustment::Staleness => 0.9,
        }
    }
}

/// Adjustments that apply to `document` at `now`, in application order
pub fn adjustments(document: &Document, now: DateTime<Utc>) -> Vec<Adjustment> {
    let created = document.created_at_utc();
    let mut applied = Vec::with_capacity(4);

    if created.is_some_and(|ts| ts > now - Duration::days(RECENT_WINDOW_DAYS)) {
        applied.push(Adjustment::Recency);
    }
    if matches!(document.priority.as_deref(), Some("High" | "Critical")) {
        applied.push(Adjustment::HighPriority);
    }
    if matches!(document.status.as_deref(), Some("active" | "Active")) {
        applied.push(Adjustment::Active);
    }
    if created.is_some_and(|ts| ts < now - Duration::days(STALE_AFTER_DAYS)) {
        applied.push(Adjustment::Staleness);
    }

    applied
}

/// Per-field part of a score explanation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldScore {
    pub field: SearchField,
    pub weight: f64,
    #[serde(rename = "match")]
    pub match_kind: MatchKind,
    pub contribution: f64,
}

/// Full breakdown of how a score was computed
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Fields that matched, in table order
    pub fields: Vec<FieldScore>,
    /// Sum of field contributions before adjustments
    pub base: f64,
    pub adjustments: Vec<Adjustment>,
    /// Adjusted total before rounding
    pub raw: f64,
    pub score: f64,
}

/// Explain the score of `document` for `query` at `now`.
///
/// A blank query yields an empty breakdown with a score of 0.
pub fn explain(document: &Document, query: &str, now: DateTime<Utc>) -> ScoreBreakdown {
    let Some(query) = NormalizedQuery::parse(query) else {
        return ScoreBreakdown {
            fields: Vec::new(),
            base: 0.0,
            adjustments: Vec::new(),
            raw: 0.0,
            score: 0.0,
        };
    };

    let fields: Vec<FieldScore> = FIELD_WEIGHTS
        .iter()
        .filter_map(|&(field, weight)| {
            let value = document.field(field)?.to_lowercase();
            let match_kind = match_field(&value, &query)?;
            Some(FieldScore {
                field,
                weight,
                match_kind,
                contribution: weight * match_kind.factor(),
            })
        })
        .collect();

    let base: f64 = fields.iter().map(|f| f.contribution).sum();
    let adjustments = adjustments(document, now);
    let raw = adjustments.iter().fold(base, |total, adj| total * adj.factor());

    ScoreBreakdown {
        fields,
        base,
        adjustments,
        raw,
        score: round_score(raw),
    }
}

/// Sum of field contributions for a normalized query, before adjustments
pub fn base_score(document: &Document, query: &NormalizedQuery) -> f64 {
    FIELD_WEIGHTS
        .iter()
        .map(|&(field, weight)| {
            document
                .field(field)
                .and_then(|value| match_field(&value.to_lowercase(), query))
                .map_or(0.0, |m| weight * m.factor())
        })
        .sum()
}

/// Score a document against a normalized query
pub fn score_normalized(document: &Document, query: &NormalizedQuery, now: DateTime<Utc>) -> f64 {
    let raw = adjustments(document, now)
        .iter()
        .fold(base_score(document, query), |total, adj| total * adj.factor());
    round_score(raw)
}

/// Relevance score of `document` for `query` at `now`.
///
/// Returns 0 for a blank query. Never fails.
///
/// # Examples
///
/// ```
/// use caalm_search::core::search::score;
/// use caalm_search::core::types::Document;
/// use chrono::Utc;
///
/// let doc = Document {
///     vendor: Some("Acme Corp".to_string()),
///     ..Document::default()
/// };
///
/// // Prefix match on vendor (weight 10): 10 * 1.5
/// assert_eq!(score(&doc, "acme", Utc::now()), 15.0);
/// assert_eq!(score(&doc, "   ", Utc::now()), 0.0);
/// ```
pub fn score(document: &Document, query: &str, now: DateTime<Utc>) -> f64 {
    match NormalizedQuery::parse(query) {
        Some(query) => score_normalized(document, &query, now),
        None => 0.0,
    }
}

/// Round to 2 decimal places
pub fn round_score(raw: f64) -> f64 {
    (raw * 100.0).round() / 100.0
}
