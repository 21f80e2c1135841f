//! Config command - show the resolved configuration

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub target: String,
    pub timeout_sec: u64,
    pub index: String,
    pub doc_type: String,
}

/// Execute the config command
pub async fn execute(
    _args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_output = ConfigOutput {
        target: config.connection.base_url(),
        timeout_sec: config.connection.timeout_sec,
        index: config.scenario.index.clone(),
        doc_type: config.scenario.doc_type.clone(),
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  target: {}", config_output.target);
            println!("  timeout_sec: {}", config_output.timeout_sec);
            println!(
                "  scenario: {}/{}",
                config_output.index, config_output.doc_type
            );
        }
        OutputFormat::Json => {
            output::print_json(&config_output);
        }
    }

    Ok(())
}
