//! CineRegional CLI binary.
//!
//! - Analyze a movie with live search grounding
//! - Print the prompt that would be sent
//! - Re-run extraction over a saved answer

use clap::Parser;
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    use cineregional::CineConfig;
    use cineregional::observability::{ObservabilityConfig, init_observability};
    use cli::{Cli, Commands, run_analyze, run_extract, run_prompt};

    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    init_observability(
        &ObservabilityConfig::default()
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )?;

    let config = CineConfig::load()?;

    let code = match cli.command {
        Commands::Analyze {
            title,
            variant,
            model,
            format,
        } => run_analyze(&config, &title, variant, model, format).await?,

        Commands::Prompt { title, variant } => {
            run_prompt(&config, &title, variant)?;
            ExitCode::SUCCESS
        }

        Commands::Extract {
            response,
            title,
            variant,
            format,
        } => {
            run_extract(&config, &response, &title, variant, format)?;
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}
