//! Search service: candidate fetch, filtering, scoring and paging.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;

use crate::core::clock::Clock;
use crate::core::config::SearchConfig;
use crate::core::error::Result;
use crate::core::search::filter::{matches_query, AttributeFilter};
use crate::core::search::query::validate_query;
use crate::core::search::scorer::score_normalized;
use crate::core::source::DocumentSource;
use crate::core::types::{SearchHit, SearchRequest, SearchResponse, SortBy, SortOrder};

/// Relevance search over a document source
pub struct SearchService {
    source: Arc<dyn DocumentSource>,
    clock: Arc<dyn Clock>,
    config: SearchConfig,
}

impl SearchService {
    /// Create a new search service
    pub fn new(
        source: Arc<dyn DocumentSource>,
        clock: Arc<dyn Clock>,
        config: SearchConfig,
    ) -> Self {
        Self {
            source,
            clock,
            config,
        }
    }

    /// Execute a search request
    ///
    /// # Errors
    ///
    /// - `InvalidQuery`: query is blank or too long
    /// - `InvalidParameter`: malformed dates or inverted ranges
    /// - `SourceUnavailable`: the document source failed
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let start = Instant::now();

        let query = validate_query(&request.q, self.config.max_query_length)?;
        let filter = AttributeFilter::from_request(request)?;
        let limit = request
            .limit
            .unwrap_or(self.config.default_limit)
            .clamp(1, self.config.max_limit);
        let offset = request.offset.unwrap_or(0);

        let candidates = self
            .source
            .fetch(&filter, self.config.candidate_cap)
            .await?;
        let candidate_count = candidates.len();

        let now = self.clock.now();
        let mut hits: Vec<SearchHit> = candidates
            .into_iter()
            .filter(|doc| matches_query(doc, &query))
            .map(|document| SearchHit {
                score: score_normalized(&document, &query, now),
                document,
            })
            .collect();

        sort_hits(&mut hits, request.sort_by, request.sort_order);

        let total = hits.len();
        let results: Vec<SearchHit> = hits.into_iter().skip(offset).take(limit).collect();
        let has_more = offset.saturating_add(results.len()) < total;

        tracing::debug!(
            query = %query.text(),
            source = %self.source.describe(),
            filtered = !filter.is_empty(),
            candidates = candidate_count,
            matched = total,
            returned = results.len(),
            "Search completed"
        );

        Ok(SearchResponse {
            query: request.q.clone(),
            results,
            total,
            limit,
            offset,
            has_more,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Sort hits in place. The sort is stable, and documents missing the
/// sort key always come last.
pub fn sort_hits(hits: &mut [SearchHit], sort_by: SortBy, order: SortOrder) {
    match sort_by {
        SortBy::Relevance => hits.sort_by(|a, b| {
            directed(
                a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal),
                order,
            )
        }),
        SortBy::CreatedAt => hits.sort_by(|a, b| {
            compare_present(
                a.document.created_at_utc(),
                b.document.created_at_utc(),
                order,
                |x, y| x.cmp(y),
            )
        }),
        SortBy::Name => hits.sort_by(|a, b| {
            compare_present(
                a.document.display_name().map(str::to_lowercase),
                b.document.display_name().map(str::to_lowercase),
                order,
                |x, y| x.cmp(y),
            )
        }),
        SortBy::Amount => hits.sort_by(|a, b| {
            compare_present(a.document.amount, b.document.amount, order, |x, y| {
                x.partial_cmp(y).unwrap_or(Ordering::Equal)
            })
        }),
    }
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

fn compare_present<T>(
    a: Option<T>,
    b: Option<T>,
    order: SortOrder,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => directed(cmp(&x, &y), order),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
