//! Score command - explain how one document scores for a query

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::search::{explain, MatchKind, ScoreBreakdown};
use crate::core::types::{parse_timestamp, Document};
use chrono::Utc;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the score command
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Free-text query
    pub query: String,

    /// JSON file holding a single document
    #[arg(long)]
    pub document: PathBuf,

    /// Evaluate recency as of this instant (RFC 3339, defaults to now)
    #[arg(long)]
    pub now: Option<String>,
}

/// Score response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreOutput {
    pub query: String,
    pub evaluated_at: String,
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
}

/// Execute the score command
pub async fn execute(
    args: ScoreArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let contents = tokio::fs::read_to_string(&args.document)
        .await
        .map_err(|e| format!("Failed to read {}: {e}", args.document.display()))?;
    let document: Document = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse {}: {e}", args.document.display()))?;

    let now = match &args.now {
        Some(raw) => parse_timestamp(raw).ok_or_else(|| format!("Invalid --now value '{raw}'"))?,
        None => Utc::now(),
    };

    let output = ScoreOutput {
        query: args.query.clone(),
        evaluated_at: now.to_rfc3339(),
        breakdown: explain(&document, &args.query, now),
    };

    match format {
        OutputFormat::Human => print_human(&output),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn describe_match(kind: &MatchKind) -> String {
    match kind {
        MatchKind::Exact => "exact".to_string(),
        MatchKind::Prefix => "prefix".to_string(),
        MatchKind::Substring => "substring".to_string(),
        MatchKind::WordOverlap { matched, total } => format!("words {matched}/{total}"),
    }
}

fn print_human(output: &ScoreOutput) {
    let breakdown = &output.breakdown;

    println!(
        "Score for '{}': {}",
        colors::label(&output.query),
        colors::score(&format!("{:.2}", breakdown.score))
    );

    if breakdown.fields.is_empty() {
        println!("  {}", colors::dim("no fields matched"));
    }
    for field in &breakdown.fields {
        println!(
            "  {:<18} {:>5} x {:<14} = {}",
            colors::field(field.field.as_str()),
            field.weight,
            describe_match(&field.match_kind),
            colors::number(&format!("{:.2}", field.contribution))
        );
    }
    println!("  base: {:.2}", breakdown.base);

    for adjustment in &breakdown.adjustments {
        println!(
            "  {} x{}",
            colors::dim(&format!("{adjustment:?}")),
            adjustment.factor()
        );
    }
    println!("  {}", colors::dim(&format!("as of {}", output.evaluated_at)));
}
