//! caalm-search - relevance search for contract and compliance records
//!
//! # Examples
//!
//! ```bash
//! # Search a document export
//! caalm-search search "acme support" --documents contracts.json
//!
//! # Only active IT contracts, newest first
//! caalm-search search acme -d contracts.json --department IT --status active --sort-by createdAt
//!
//! # Explain one document's score
//! caalm-search score "acme" --document contract.json
//!
//! # Run the HTTP API
//! caalm-search serve --port 8787 --documents contracts.json
//! ```

use caalm_search::cli::output::print_error;
use caalm_search::cli::{run, Cli};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
