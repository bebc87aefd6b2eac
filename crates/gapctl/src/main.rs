//! Gap Control - CLI for the conceptual gap analyzer.
//!
//! Thin driver around gap_core: picks a topic, takes an explanation, and
//! prints the structured critique.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gapctl")]
#[command(about = "Conceptual gap analyzer - evaluate how deeply you understand a topic", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the analyzer config file
    #[arg(long, default_value = gap_core::config::CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List known topics and their concept maps
    Topics,

    /// Analyze an explanation of a topic
    Analyze {
        /// Topic being explained (e.g. "CNN")
        #[arg(long)]
        topic: String,

        /// Explanation text; read from stdin when omitted
        #[arg(long)]
        explanation: Option<String>,
    },

    /// Print the gap-analysis prompt for a topic, for use with any chat frontend
    Prompt {
        /// Topic to build the prompt for
        #[arg(long)]
        topic: String,

        /// Explanation text; read from stdin when omitted
        #[arg(long)]
        explanation: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Topics => commands::topics(),
        Commands::Analyze { topic, explanation } => {
            commands::analyze(&cli.config, &topic, explanation)
        }
        Commands::Prompt { topic, explanation } => commands::prompt(&topic, explanation),
    }
}
