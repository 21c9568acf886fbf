//! Command handlers.

use super::OutputFormat;
use cineregional::{
    AnalysisError, AnalysisErrorKind, AnalysisRequest, CineConfig, CineError, CineResult,
    GeminiClient, GroundedDriver, IoError, JsonError, MovieAnalysis, MovieAnalyzer,
    PromptVariant, SearchController, SearchState, build_prompt, extract_analysis,
    render_report,
};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info, instrument};

/// Analyze a movie through the search controller and print the result.
///
/// An upstream failure prints the user-facing message to stderr and
/// yields a failing exit code.
///
/// # Errors
///
/// Fails when no API key is available or the title is blank.
#[instrument(skip(config))]
pub async fn run_analyze(
    config: &CineConfig,
    title: &str,
    variant: Option<PromptVariant>,
    model: Option<String>,
    format: OutputFormat,
) -> CineResult<ExitCode> {
    let api_key = config.api_key(|name| std::env::var(name).ok())?;
    let model = model.unwrap_or_else(|| config.model.clone());
    let client = GeminiClient::with_api_key(api_key, model)?
        .with_base_url(config.base_url.clone())
        .with_timeout(config.request_timeout())?;

    let analyzer = MovieAnalyzer::new(client).with_variant(variant.unwrap_or(config.variant));
    info!(
        model = analyzer.driver().model_name(),
        variant = %analyzer.variant(),
        "Starting analysis"
    );

    let mut controller = SearchController::new();
    match controller.submit(&analyzer, title).await {
        None => Err(AnalysisError::new(AnalysisErrorKind::EmptyTitle).into()),
        Some(SearchState::Result(analysis)) => {
            print_analysis(analysis, format)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(SearchState::Error(message)) => {
            eprintln!("{}", message);
            Ok(ExitCode::FAILURE)
        }
        Some(state) => {
            debug!(?state, "Search did not settle");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Print the prompt for a title without calling upstream.
pub fn run_prompt(
    config: &CineConfig,
    title: &str,
    variant: Option<PromptVariant>,
) -> CineResult<()> {
    let request = AnalysisRequest::new(title, variant.unwrap_or(config.variant))?;
    println!("{}", build_prompt(&request));
    Ok(())
}

/// Run extraction over an answer saved to a file.
///
/// # Errors
///
/// Fails when the title is blank or the file cannot be read.
#[instrument(skip(config), fields(response = %response.display()))]
pub fn run_extract(
    config: &CineConfig,
    response: &Path,
    title: &str,
    variant: Option<PromptVariant>,
    format: OutputFormat,
) -> CineResult<()> {
    let request = AnalysisRequest::new(title, variant.unwrap_or(config.variant))?;
    let text = std::fs::read_to_string(response).map_err(|e| {
        CineError::from(IoError::new(format!(
            "Failed to read {}: {}",
            response.display(),
            e
        )))
    })?;
    debug!(bytes = text.len(), "Loaded saved answer");

    let analysis = extract_analysis(&request, &text, Vec::new());
    print_analysis(&analysis, format)
}

fn print_analysis(analysis: &MovieAnalysis, format: OutputFormat) -> CineResult<()> {
    match format {
        OutputFormat::Human => print!("{}", render_report(analysis)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(analysis).map_err(|e| {
                CineError::from(JsonError::new(format!(
                    "Failed to serialize analysis: {}",
                    e
                )))
            })?;
            println!("{}", json);
        }
    }
    Ok(())
}
