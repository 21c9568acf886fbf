//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the cineregional binary.

mod commands;
mod run;

pub use commands::{Cli, Commands, OutputFormat};
pub use run::{run_analyze, run_extract, run_prompt};
