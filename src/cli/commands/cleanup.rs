//! Cleanup command - delete the scenario document
//!
//! The scenario assumes an empty corpus; running it twice against
//! the same service would double the hit counts. This restores the
//! starting state.

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::client::ElasticClient;
use crate::core::config::Config;
use crate::harness;
use clap::Args;
use serde::Serialize;

/// Arguments for the cleanup command
#[derive(Args, Debug)]
pub struct CleanupArgs {
    /// Document id to delete
    #[arg(long, default_value = harness::DOC_ID)]
    pub id: String,
}

/// Cleanup response
#[derive(Debug, Serialize)]
pub struct CleanupOutput {
    pub index: String,
    pub doc_type: String,
    pub id: String,
    pub deleted: bool,
}

/// Execute the cleanup command
pub async fn execute(
    args: CleanupArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = ElasticClient::connect(&config.connection).await?;
    let deleted = client
        .delete_document(&config.scenario.index, &config.scenario.doc_type, &args.id)
        .await?;

    let cleanup_output = CleanupOutput {
        index: config.scenario.index.clone(),
        doc_type: config.scenario.doc_type.clone(),
        id: args.id,
        deleted,
    };

    match format {
        OutputFormat::Human => {
            if cleanup_output.deleted {
                output::print_success(&format!(
                    "Deleted document {} from {}/{}",
                    cleanup_output.id, cleanup_output.index, cleanup_output.doc_type
                ));
            } else {
                println!(
                    "Document {} not present in {}/{}",
                    colors::number(&cleanup_output.id),
                    cleanup_output.index,
                    cleanup_output.doc_type
                );
            }
        }
        OutputFormat::Json => {
            output::print_json(&cleanup_output);
        }
    }

    Ok(())
}
