//! Run command - execute the full verification scenario

use crate::cli::output::{self, colors, format_duration_ms};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::harness::{CheckOutcome, CheckStatus, Scenario};
use clap::Args;
use serde::Serialize;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Delete the scenario document after the run
    #[arg(long)]
    pub cleanup: bool,
}

/// Scenario run response
#[derive(Debug, Serialize)]
pub struct RunOutput {
    pub target: String,
    pub passed: bool,
    pub checks_passed: usize,
    pub checks_total: usize,
    pub checks: Vec<CheckOutcome>,
}

/// Execute the run command
pub async fn execute(
    args: RunArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let scenario = Scenario::setup(config).await?;
    let report = scenario.run().await;

    if args.cleanup {
        scenario.cleanup().await?;
    }

    let run_output = RunOutput {
        target: report.target.clone(),
        passed: report.passed(),
        checks_passed: report.passed_count(),
        checks_total: report.total_count(),
        checks: report.checks().to_vec(),
    };

    match format {
        OutputFormat::Human => {
            println!(
                "Verifying search service at {}\n",
                colors::label(&run_output.target)
            );

            for check in &run_output.checks {
                let tag = match check.status {
                    CheckStatus::Passed => colors::success("PASS"),
                    CheckStatus::Failed => colors::error("FAIL"),
                };
                println!(
                    "  [{}] {}  {}  {}",
                    tag,
                    colors::check_name(&check.name),
                    check.detail,
                    colors::dim(&format!("({})", format_duration_ms(check.duration_ms)))
                );
            }

            println!();
            let summary = format!(
                "{} of {} checks passed",
                run_output.checks_passed, run_output.checks_total
            );
            if run_output.passed {
                output::print_success(&summary);
            } else {
                println!("{}", colors::error(&summary));
            }
        }
        OutputFormat::Json => {
            output::print_json(&run_output);
        }
    }

    if !run_output.passed {
        return Err(format!(
            "verification failed: {} of {} checks passed",
            run_output.checks_passed, run_output.checks_total
        )
        .into());
    }

    Ok(())
}
