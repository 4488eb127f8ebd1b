//! Tests for the search CLI command
//!
//! - Valid queries with results in both output formats
//! - Empty results
//! - Invalid input and unreadable sources

use crate::common::fixtures::{sample_documents, DocumentFile};
use crate::common::helpers::{create_memory_services, create_test_services};
use caalm_search::cli::commands::search::{execute, SearchArgs};
use caalm_search::cli::OutputFormat;
use caalm_search::core::types::{KindFilter, SortBy};

#[tokio::test]
async fn test_search_valid_query_human() {
    let services = create_memory_services(sample_documents());

    let result = execute(SearchArgs::for_query("acme"), &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_search_valid_query_json() {
    let services = create_memory_services(sample_documents());

    let mut args = SearchArgs::for_query("acme");
    args.kind = KindFilter::Contracts;
    args.sort_by = SortBy::Name;
    args.limit = Some(2);

    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(
        result.is_ok(),
        "JSON search should succeed: {:?}",
        result.err()
    );
}

#[tokio::test]
async fn test_search_empty_results() {
    let services = create_memory_services(sample_documents());

    let result = execute(
        SearchArgs::for_query("nonexistent vendor"),
        &services,
        OutputFormat::Human,
    )
    .await;
    assert!(result.is_ok(), "Empty search should still succeed");
}

#[tokio::test]
async fn test_search_blank_query_fails() {
    let services = create_memory_services(sample_documents());

    let result = execute(SearchArgs::for_query("   "), &services, OutputFormat::Human).await;

    let err = result.expect_err("Blank query should fail");
    assert!(err.to_string().contains("Invalid query"));
}

#[tokio::test]
async fn test_search_inverted_amount_range_fails() {
    let services = create_memory_services(sample_documents());

    let mut args = SearchArgs::for_query("acme");
    args.amount_min = Some(500.0);
    args.amount_max = Some(100.0);

    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_search_document_file() {
    let file = DocumentFile::new(&sample_documents());
    let services = create_test_services(file.path());

    let result = execute(SearchArgs::for_query("globex"), &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "File search should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_search_missing_file_fails() {
    let services = create_test_services(std::path::Path::new("/nonexistent/documents.json"));

    let result = execute(SearchArgs::for_query("acme"), &services, OutputFormat::Human).await;

    let err = result.expect_err("Missing file should fail");
    assert!(err.to_string().contains("unavailable"));
}
