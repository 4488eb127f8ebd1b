//! End-to-end search pipeline over the sample documents

use crate::common::fixtures::{contract, days_ago, reference_now, sample_documents, DocumentFile};
use crate::common::helpers::{create_memory_services, create_test_services};
use caalm_search::core::clock::FixedClock;
use caalm_search::core::config::SearchConfig;
use caalm_search::core::search::SearchService;
use caalm_search::core::source::MemorySource;
use caalm_search::core::types::{KindFilter, SearchRequest, SortBy, SortOrder};
use caalm_search::SearchError;
use std::sync::Arc;

fn ids(response: &caalm_search::SearchResponse) -> Vec<&str> {
    response
        .results
        .iter()
        .map(|hit| hit.document.id.as_deref().unwrap_or(""))
        .collect()
}

#[tokio::test]
async fn test_relevance_ranking() {
    let services = create_memory_services(sample_documents());

    let response = services
        .search
        .search(&SearchRequest::new("acme"))
        .await
        .unwrap();

    // c-3 never mentions acme and is dropped by the pre-filter
    assert_eq!(response.total, 4);
    assert_eq!(ids(&response), vec!["c-1", "f-1", "c-4", "c-2"]);
    assert_eq!(response.results[1].score, 22.5);
    assert_eq!(response.results[2].score, 6.0);
    assert_eq!(response.results[3].score, 5.4);
    assert!(!response.has_more);
}

#[tokio::test]
async fn test_query_is_case_insensitive() {
    let services = create_memory_services(sample_documents());

    let lower = services.search.search(&SearchRequest::new("acme")).await.unwrap();
    let upper = services
        .search
        .search(&SearchRequest::new("  ACME "))
        .await
        .unwrap();

    assert_eq!(ids(&lower), ids(&upper));
    assert_eq!(upper.query, "  ACME ");
}

#[tokio::test]
async fn test_word_overlap_only_documents_are_excluded() {
    let services = create_memory_services(vec![
        contract("Acme Support"),
        contract("Support for Acme"),
    ]);

    let response = services
        .search
        .search(&SearchRequest::new("acme support"))
        .await
        .unwrap();

    // The second contract would score via word overlap but does not
    // contain the whole phrase
    assert_eq!(response.total, 1);
    assert_eq!(response.results[0].score, 30.0);
}

#[tokio::test]
async fn test_attribute_filters() {
    let services = create_memory_services(sample_documents());

    let mut request = SearchRequest::new("acme");
    request.department = Some("Legal".to_string());
    let response = services.search.search(&request).await.unwrap();
    assert_eq!(ids(&response), vec!["f-1", "c-4"]);

    let mut request = SearchRequest::new("acme");
    request.kind = KindFilter::Files;
    let response = services.search.search(&request).await.unwrap();
    assert_eq!(ids(&response), vec!["f-1"]);

    let mut request = SearchRequest::new("acme");
    request.amount_min = Some(10_000.0);
    let response = services.search.search(&request).await.unwrap();
    assert_eq!(ids(&response), vec!["c-1", "c-2"]);
}

#[tokio::test]
async fn test_date_range_filter() {
    let services = create_memory_services(sample_documents());

    let mut request = SearchRequest::new("acme");
    request.start_date = Some(days_ago(200));
    let response = services.search.search(&request).await.unwrap();

    // c-2 is older and c-4 has no timestamp
    assert_eq!(ids(&response), vec!["c-1", "f-1"]);
}

#[tokio::test]
async fn test_sort_by_amount_puts_missing_last() {
    let services = create_memory_services(sample_documents());

    let mut request = SearchRequest::new("acme");
    request.sort_by = SortBy::Amount;
    request.sort_order = SortOrder::Asc;
    let response = services.search.search(&request).await.unwrap();
    assert_eq!(ids(&response), vec!["c-1", "c-2", "f-1", "c-4"]);

    request.sort_order = SortOrder::Desc;
    let response = services.search.search(&request).await.unwrap();
    assert_eq!(ids(&response), vec!["c-2", "c-1", "f-1", "c-4"]);
}

#[tokio::test]
async fn test_sort_by_created_at() {
    let services = create_memory_services(sample_documents());

    let mut request = SearchRequest::new("acme");
    request.sort_by = SortBy::CreatedAt;
    let response = services.search.search(&request).await.unwrap();

    assert_eq!(ids(&response), vec!["c-1", "f-1", "c-2", "c-4"]);
}

#[tokio::test]
async fn test_pagination() {
    let services = create_memory_services(sample_documents());

    let mut request = SearchRequest::new("acme");
    request.limit = Some(3);
    let first = services.search.search(&request).await.unwrap();
    assert_eq!(first.results.len(), 3);
    assert_eq!(first.total, 4);
    assert!(first.has_more);

    request.offset = Some(3);
    let second = services.search.search(&request).await.unwrap();
    assert_eq!(ids(&second), vec!["c-2"]);
    assert!(!second.has_more);

    request.offset = Some(10);
    let past_end = services.search.search(&request).await.unwrap();
    assert!(past_end.results.is_empty());
    assert_eq!(past_end.total, 4);
}

#[tokio::test]
async fn test_candidate_cap_limits_fetch() {
    let documents: Vec<_> = (0..10).map(|i| contract(&format!("Acme {i}"))).collect();
    let config = SearchConfig {
        candidate_cap: 4,
        ..SearchConfig::default()
    };
    let service = SearchService::new(
        Arc::new(MemorySource::new(documents)),
        Arc::new(FixedClock(reference_now())),
        config,
    );

    let response = service.search(&SearchRequest::new("acme")).await.unwrap();
    assert_eq!(response.total, 4);
}

#[tokio::test]
async fn test_invalid_requests() {
    let services = create_memory_services(sample_documents());

    let blank = services.search.search(&SearchRequest::new(" ")).await;
    assert!(matches!(blank, Err(SearchError::InvalidQuery(_))));

    let mut inverted = SearchRequest::new("acme");
    inverted.amount_min = Some(10.0);
    inverted.amount_max = Some(1.0);
    let result = services.search.search(&inverted).await;
    assert!(matches!(result, Err(SearchError::InvalidParameter { .. })));

    let mut bad_date = SearchRequest::new("acme");
    bad_date.end_date = Some("yesterday".to_string());
    let result = services.search.search(&bad_date).await;
    assert!(matches!(result, Err(SearchError::InvalidParameter { .. })));
}

#[tokio::test]
async fn test_search_from_json_file() {
    let file = DocumentFile::new(&sample_documents());
    let services = create_test_services(file.path());

    let response = services
        .search
        .search(&SearchRequest::new("initech"))
        .await
        .unwrap();

    assert_eq!(ids(&response), vec!["c-3"]);
}
