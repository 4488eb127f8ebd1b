//! Search command - rank documents from the configured source

use crate::cli::output::{colors, format_relative_time};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{KindFilter, SearchRequest, SearchResponse, SortBy, SortOrder};
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query (case-insensitive)
    pub query: String,

    /// JSON file with the documents to search (overrides config)
    #[arg(long, short = 'd')]
    pub documents: Option<PathBuf>,

    /// Record type: contracts, files or all
    #[arg(long = "type", default_value = "all")]
    pub kind: KindFilter,

    #[arg(long)]
    pub department: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub priority: Option<String>,

    #[arg(long)]
    pub vendor: Option<String>,

    #[arg(long)]
    pub contract_type: Option<String>,

    /// Earliest creation date (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Latest creation date (RFC 3339 or YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub end_date: Option<String>,

    #[arg(long)]
    pub amount_min: Option<f64>,

    #[arg(long)]
    pub amount_max: Option<f64>,

    /// Sort key: relevance, createdAt, name or amount
    #[arg(long, default_value = "relevance")]
    pub sort_by: SortBy,

    /// Sort order: asc or desc
    #[arg(long, default_value = "desc")]
    pub sort_order: SortOrder,

    /// Maximum number of results (defaults to the configured page size)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Number of results to skip
    #[arg(long, default_value_t = 0)]
    pub offset: usize,
}

impl SearchArgs {
    /// Arguments for `query` with every option at its default
    pub fn for_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            documents: None,
            kind: KindFilter::All,
            department: None,
            status: None,
            priority: None,
            vendor: None,
            contract_type: None,
            start_date: None,
            end_date: None,
            amount_min: None,
            amount_max: None,
            sort_by: SortBy::Relevance,
            sort_order: SortOrder::Desc,
            limit: None,
            offset: 0,
        }
    }

    pub fn to_request(&self) -> SearchRequest {
        SearchRequest {
            q: self.query.clone(),
            kind: self.kind,
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            department: self.department.clone(),
            status: self.status.clone(),
            priority: self.priority.clone(),
            vendor: self.vendor.clone(),
            contract_type: self.contract_type.clone(),
            amount_min: self.amount_min,
            amount_max: self.amount_max,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            limit: self.limit,
            offset: Some(self.offset),
        }
    }
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = services.search.search(&args.to_request()).await?;

    match format {
        OutputFormat::Human => print_human(&response),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

fn print_human(response: &SearchResponse) {
    if response.results.is_empty() {
        println!(
            "No results found for '{}' ({} matching document(s))",
            colors::label(&response.query),
            colors::number(&response.total.to_string())
        );
        return;
    }

    let first = response.offset + 1;
    let last = response.offset + response.results.len();
    println!(
        "Found {} result(s) for '{}', showing {}-{}:\n",
        colors::number(&response.total.to_string()),
        colors::label(&response.query),
        first,
        last
    );

    let now = Utc::now();
    for (i, hit) in response.results.iter().enumerate() {
        let doc = &hit.document;
        println!(
            "[{}] {} {}",
            colors::rank(&(first + i).to_string()),
            colors::label(doc.display_name().unwrap_or("(untitled)")),
            colors::score(&format!("(score: {:.2})", hit.score))
        );

        let details: Vec<String> = [
            ("number", doc.contract_number.as_deref()),
            ("vendor", doc.vendor.as_deref()),
            ("department", doc.department.as_deref()),
            ("status", doc.status.as_deref()),
            ("priority", doc.priority.as_deref()),
        ]
        .iter()
        .filter_map(|(label, value)| value.map(|v| format!("{label}: {v}")))
        .collect();
        if !details.is_empty() {
            println!("    {}", colors::dim(&details.join("  ")));
        }

        if let Some(created) = doc.created_at_utc() {
            println!(
                "    {}",
                colors::dim(&format!("created {}", format_relative_time(&created, &now)))
            );
        }
        println!();
    }

    if response.has_more {
        println!(
            "{}",
            colors::dim(&format!(
                "More results available: use --offset {}",
                response.offset + response.results.len()
            ))
        );
    }
}
