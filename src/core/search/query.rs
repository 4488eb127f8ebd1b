//! Query normalization and validation.
//!
//! Queries are matched case-insensitively: the raw string is trimmed,
//! lower-cased and split on whitespace. A blank query normalizes to
//! nothing, which the scorer treats as a zero score and the service
//! rejects as invalid input.

use crate::core::error::{Result, SearchError};

/// A trimmed, lower-cased query and its whitespace-delimited words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    text: String,
    words: Vec<String>,
}

impl NormalizedQuery {
    /// Normalize a raw query, returning `None` when it is blank
    ///
    /// # Examples
    ///
    /// ```
    /// use caalm_search::core::search::NormalizedQuery;
    ///
    /// let q = NormalizedQuery::parse("  Acme   Support ").unwrap();
    /// assert_eq!(q.text(), "acme   support");
    /// assert_eq!(q.words(), ["acme", "support"]);
    ///
    /// assert!(NormalizedQuery::parse("   ").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            return None;
        }
        let words = text.split_whitespace().map(str::to_string).collect();
        Some(Self { text, words })
    }

    /// The full normalized query
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Query words (never empty)
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_multi_word(&self) -> bool {
        self.words.len() > 1
    }
}

/// Validate a raw query for the search service.
///
/// Rejects blank queries and queries longer than `max_length`
/// characters (measured before trimming).
pub fn validate_query(raw: &str, max_length: usize) -> Result<NormalizedQuery> {
    let length = raw.chars().count();
    if length > max_length {
        return Err(SearchError::InvalidQuery(format!(
            "Query is {length} characters long (maximum {max_length})"
        )));
    }

    NormalizedQuery::parse(raw)
        .ok_or_else(|| SearchError::InvalidQuery("Query cannot be empty".to_string()))
}
