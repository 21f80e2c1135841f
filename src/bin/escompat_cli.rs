//! escompat CLI - command-line interface for the verification harness
//!
//! # Examples
//!
//! ```bash
//! # Run the full scenario against localhost:9200
//! escompat run
//!
//! # Against a different port, cleaning up afterwards
//! ELASTIC_PORT=9201 escompat run --cleanup
//!
//! # Health only, machine-readable
//! escompat health --format json
//! ```

use clap::Parser;
use escompat::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing; logs go to stderr so stdout stays clean
    // for --format json consumers.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "escompat=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
