//! CineRegional - regional box office analysis grounded in live web search.
//!
//! One search sends a single prompt to a search-grounded Gemini model, then
//! pulls a summary, highlights and JSON market breakdowns out of the prose
//! answer. Each field is extracted on its own, so a garbled block costs one
//! field rather than the whole analysis.
//!
//! # Quick Start
//!
//! ```no_run
//! use cineregional::{GeminiClient, MovieAnalyzer, render_report};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let analyzer = MovieAnalyzer::new(GeminiClient::new()?);
//!     let analysis = analyzer.analyze("Dune: Part Two").await?;
//!     println!("{}", render_report(&analysis));
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `cineregional_error` - Error types
//! - `cineregional_core` - Data model (analysis aggregate, market entries, citations)
//! - `cineregional_interface` - `GroundedDriver` trait
//! - `cineregional_models` - Gemini REST client with Google Search grounding
//! - `cineregional_analysis` - Prompt building and field-local extraction
//!
//! This crate re-exports them and adds configuration, the search
//! controller, terminal rendering and the `cineregional` binary.
//!
//! # Cargo Features
//!
//! - `otel` - Export tracing spans through OpenTelemetry (stdout exporter)
//! - `api` - Gate tests that call the real Gemini API

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod controller;
pub mod observability;
mod render;

pub use config::CineConfig;
pub use controller::{SearchController, SearchState, SearchTicket};
pub use render::render_report;

pub use cineregional_analysis::*;
pub use cineregional_core::*;
pub use cineregional_error::*;
pub use cineregional_interface::*;
pub use cineregional_models::*;
