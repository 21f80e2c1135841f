//! CLI command implementations
//!
//! One file per command; each exposes an `Args` struct and an
//! `execute` function.

pub mod cleanup;
pub mod completions;
pub mod config;
pub mod health;
pub mod run;

pub use cleanup::CleanupArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use health::HealthArgs;
pub use run::RunArgs;
