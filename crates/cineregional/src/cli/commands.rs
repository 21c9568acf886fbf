//! CLI command definitions.

use cineregional::PromptVariant;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CineRegional - regional box office analysis grounded in live web search
#[derive(Parser, Debug)]
#[command(name = "cineregional")]
#[command(about = "Regional box office analysis grounded in live web search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the web and analyze a movie
    Analyze {
        /// Movie title
        title: String,

        /// Data blocks to request (full or regional); defaults to the configured variant
        #[arg(long)]
        variant: Option<PromptVariant>,

        /// Gemini model to use instead of the configured one
        #[arg(long)]
        model: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Print the prompt that would be sent, without calling upstream
    Prompt {
        /// Movie title
        title: String,

        /// Data blocks to request (full or regional); defaults to the configured variant
        #[arg(long)]
        variant: Option<PromptVariant>,
    },

    /// Run extraction over a saved model answer
    Extract {
        /// File holding the answer text
        #[arg(long)]
        response: PathBuf,

        /// Movie title the answer is about
        #[arg(long)]
        title: String,

        /// Data blocks the answer was asked for; defaults to the configured variant
        #[arg(long)]
        variant: Option<PromptVariant>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report
    Human,
    /// JSON format
    Json,
}
