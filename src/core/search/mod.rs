//! Relevance search for contracts and files.
//!
//! - **query**: query normalization and validation
//! - **scorer**: weighted-field scoring with metadata adjustments
//! - **filter**: query pre-filter and structured attribute filters
//! - **service**: fetch, filter, score, sort and paginate

mod filter;
mod query;
mod scorer;
mod service;

pub use filter::{matches_query, AttributeFilter};
pub use query::{validate_query, NormalizedQuery};
pub use scorer::{
    adjustments, base_score, explain, match_field, round_score, score, score_normalized,
    Adjustment, FieldScore, MatchKind, ScoreBreakdown, SearchField, FIELD_WEIGHTS,
    RECENT_WINDOW_DAYS, STALE_AFTER_DAYS,
};
pub use service::{sort_hits, SearchService};
