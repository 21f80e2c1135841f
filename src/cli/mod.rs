//! CLI adapter for escompat
//!
//! Thin clap layer over the harness: resolve configuration (flags >
//! env > TOML file > defaults), then dispatch to one command per
//! operation surface.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::Config;

/// escompat - Elasticsearch compatibility verification harness
///
/// Runs a fixed create/read/search/health round trip against an
/// Elasticsearch-compatible search service and reports whether the
/// service behaved as the contract requires.
#[derive(Parser, Debug)]
#[command(name = "escompat")]
#[command(version)]
#[command(about = "Verification harness for Elasticsearch-compatible services", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Host of the service under test
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port of the service under test
    #[arg(long, global = true, env = "ELASTIC_PORT")]
    pub port: Option<u16>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_sec: Option<u64>,

    /// Index the scenario writes to and searches
    #[arg(long, global = true)]
    pub index: Option<String>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full verification scenario
    Run(commands::RunArgs),

    /// Check cluster health only
    Health(commands::HealthArgs),

    /// Delete the scenario document from the service
    Cleanup(commands::CleanupArgs),

    /// Show the resolved configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  escompat completions bash > ~/.local/share/bash-completion/completions/escompat
    ///   zsh:   escompat completions zsh > ~/.zfunc/_escompat
    ///   fish:  escompat completions fish > ~/.config/fish/completions/escompat.fish
    Completions(commands::CompletionsArgs),
}

impl Cli {
    /// Apply command-line flags on top of file/env configuration.
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.connection.host = host.clone();
        }
        if let Some(port) = self.port {
            config.connection.port = port;
        }
        if let Some(timeout) = self.timeout_sec {
            config.connection.timeout_sec = timeout;
        }
        if let Some(index) = &self.index {
            config.scenario.index = index.clone();
        }
    }

    /// Resolve the effective configuration for this invocation.
    pub fn resolve_config(&self) -> Result<Config, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => {
                let mut config = Config::from_file(path)?;
                config.merge_env();
                config
            }
            None => Config::load()?,
        };

        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Handle completions command early (doesn't need config)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = cli.resolve_config()?;
    config.log_config();

    match cli.command {
        Commands::Run(args) => commands::run::execute(args, &config, cli.format).await,
        Commands::Health(args) => commands::health::execute(args, &config, cli.format).await,
        Commands::Cleanup(args) => commands::cleanup::execute(args, &config, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &config, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
