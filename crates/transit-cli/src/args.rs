//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use transit_core::config::{CliOverrides, LogFormat};

/// Classify transit assistant queries into intents.
#[derive(Parser, Debug, Clone)]
#[command(name = "transit-intent")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Embedding-based multi-intent classifier for transit queries")]
pub struct CliArgs {
    /// Config file (defaults to ./transit.toml when present)
    #[arg(short, long, global = true, env = "TRANSIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Embedding provider: openai, ollama, tfidf
    #[arg(long, global = true)]
    pub provider: Option<String>,

    /// Embedding model identifier
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Embedding endpoint URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Per-request embedding timeout in milliseconds
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Log output format: json or pretty
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

impl CliArgs {
    /// The flags that override file and environment configuration.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            provider: self.provider.clone(),
            model: self.model.clone(),
            endpoint: self.endpoint.clone(),
            timeout_ms: self.timeout_ms,
            log_format: self.log_format,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify one or more queries
    Classify(ClassifyArgs),

    /// Classify queries read from stdin, one per line
    Interactive(OutputArgs),

    /// Print the configured example bank
    Bank(BankArgs),

    /// Print the resolved configuration as TOML
    Config,
}

#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub output: OutputArgs,

    /// Queries to classify
    #[arg(required = true)]
    pub queries: Vec<String>,
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Emit one JSON object per query
    #[arg(long)]
    pub json: bool,

    /// Also show every label's blended score
    #[arg(long)]
    pub scores: bool,
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct BankArgs {
    /// Emit the bank as JSON
    #[arg(long)]
    pub json: bool,
}
