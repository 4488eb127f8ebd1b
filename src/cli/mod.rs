//! CLI adapter for CAALM search
//!
//! Provides a command-line interface over the search core. This
//! module is parallel to `http/`: both depend on `core/` but not on
//! each other.
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      http/       |      |      cli/        |
//! | (axum adapter)   |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::core::services::Services;

/// CAALM Search - contract relevance search
///
/// Scores contract and file records against a free-text query using
/// weighted fields and recency, priority and status adjustments.
#[derive(Parser, Debug)]
#[command(name = "caalm-search")]
#[command(author = "CAALM Solutions")]
#[command(version)]
#[command(about = "Relevance search for contracts and compliance records", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search a document file
    Search(commands::SearchArgs),

    /// Explain the score of a single document
    Score(commands::ScoreArgs),

    /// Run the HTTP search API
    Serve(commands::ServeArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  caalm-search completions bash > ~/.local/share/bash-completion/completions/caalm-search
    ///   zsh:   caalm-search completions zsh > ~/.zfunc/_caalm-search
    ///   fish:  caalm-search completions fish > ~/.config/fish/completions/caalm-search.fish
    Completions(commands::CompletionsArgs),
}

/// Install the global tracing subscriber on stderr
///
/// `RUST_LOG` takes precedence over `default_filter`. Repeated calls
/// are ignored.
pub fn init_logging(default_filter: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}

/// Apply command-line overrides on top of the loaded configuration
pub fn apply_overrides(config: &mut Config, command: &Commands) {
    match command {
        Commands::Search(args) => {
            if let Some(path) = &args.documents {
                config.source.documents_path = path.clone();
            }
        }
        Commands::Serve(args) => {
            if let Some(path) = &args.documents {
                config.source.documents_path = path.clone();
            }
            if let Some(host) = &args.host {
                config.server.host = host.clone();
            }
            if let Some(port) = args.port {
                config.server.port = port;
            }
        }
        Commands::Score(_) | Commands::ShowConfig(_) | Commands::Completions(_) => {}
    }
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let default_filter = match cli.command {
        Commands::Serve(_) => "caalm_search=info,tower_http=info",
        _ => "caalm_search=warn",
    };
    init_logging(default_filter, cli.log_json);

    // Load configuration
    let mut config = Config::load()?;
    apply_overrides(&mut config, &cli.command);
    config.validate()?;

    // Create services
    let services = Arc::new(Services::new(config));

    // Execute command
    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Score(args) => commands::score::execute(args, cli.format).await,
        Commands::Serve(args) => commands::serve::execute(args, &services).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
