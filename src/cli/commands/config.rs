//! Show-config command - print the effective configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show where the configuration file is looked up
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    #[serde(flatten)]
    pub config: Config,
}

impl ConfigResponse {
    pub fn new(config: &Config, all: bool) -> Self {
        let config_file = all.then(|| {
            crate::core::xdg::XdgDirs::new()
                .config_file()
                .to_string_lossy()
                .into_owned()
        });
        Self {
            config_file,
            config: config.clone(),
        }
    }
}

/// Execute the show-config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse::new(&services.config, args.all);

    match format {
        OutputFormat::Human => {
            let config = &response.config;
            println!("Configuration:");
            if let Some(path) = &response.config_file {
                println!("  config_file: {path}");
            }
            println!("  server:");
            println!("    host: {}", config.server.host);
            println!("    port: {}", config.server.port);
            println!("  search:");
            println!("    default_limit: {}", config.search.default_limit);
            println!("    max_limit: {}", config.search.max_limit);
            println!("    candidate_cap: {}", config.search.candidate_cap);
            println!("    max_query_length: {}", config.search.max_query_length);
            println!("  source:");
            println!(
                "    documents_path: {}",
                config.source.documents_path.display()
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
