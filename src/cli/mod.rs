//! CLI module for Svar.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Svar - Multi-agent triage assistant demo
///
/// Declares a small agent graph (triage, account, web search) over the
/// OpenAI API and routes queries through it. The name "Svar" comes from the
/// Norwegian/Scandinavian word for "answer."
#[derive(Parser, Debug)]
#[command(name = "svar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the canned demo queries through the triage assistant
    Demo,

    /// Ask the triage assistant a single question
    Ask {
        /// The question to ask
        question: String,
    },

    /// Create a hosted knowledge collection
    Bootstrap {
        /// Collection name (defaults to knowledge.store_name from config)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Upload files into a hosted knowledge collection
    Ingest {
        /// Files to upload
        #[arg(required = true)]
        files: Vec<String>,

        /// Target collection ID (e.g. vs_...)
        #[arg(short, long)]
        store: String,
    },

    /// Check configuration and API access
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
