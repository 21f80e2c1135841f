//! Health command - check cluster health only

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::client::ElasticClient;
use crate::core::config::Config;
use crate::core::types::HealthStatus;
use clap::Args;
use serde::Serialize;

/// Arguments for the health command
#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Exit non-zero unless status is yellow or green
    #[arg(long)]
    pub strict: bool,
}

/// Cluster health response
#[derive(Debug, Serialize)]
pub struct HealthOutput {
    pub cluster_name: String,
    pub status: HealthStatus,
    pub acceptable: bool,
    pub number_of_nodes: i64,
}

/// Execute the health command
pub async fn execute(
    args: HealthArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = ElasticClient::connect(&config.connection).await?;
    let health = client.cluster_health().await?;

    let health_output = HealthOutput {
        cluster_name: health.cluster_name.clone(),
        status: health.status,
        acceptable: health.status.is_acceptable(),
        number_of_nodes: health.number_of_nodes,
    };

    match format {
        OutputFormat::Human => {
            let status = health.status.to_string();
            let colored_status = if health_output.acceptable {
                colors::success(&status)
            } else {
                colors::error(&status)
            };
            println!(
                "Cluster {} is {} ({} node(s))",
                colors::label(&health_output.cluster_name),
                colored_status,
                colors::number(&health_output.number_of_nodes.to_string())
            );
        }
        OutputFormat::Json => {
            output::print_json(&health_output);
        }
    }

    if args.strict && !health_output.acceptable {
        return Err(format!(
            "cluster status is {}, expected yellow or green",
            health.status
        )
        .into());
    }

    Ok(())
}
