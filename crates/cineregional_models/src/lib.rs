//! LLM provider integrations for CineRegional.
//!
//! Each provider sits behind its own feature flag. Only Google Gemini is
//! supported today, because the pipeline needs a backend that can ground its
//! answer in live web search and report the pages it used.
//!
//! # Example
//!
//! ```no_run
//! use cineregional_models::GeminiClient;
//! use cineregional_interface::GroundedDriver;
//! use cineregional_core::GroundedRequest;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let request = GroundedRequest::builder()
//!     .prompt("Who directed Arrival?")
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{} ({} sources)", response.text(), response.citations().len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    API_KEY_ENV_VARS, ApiErrorBody, ApiErrorEnvelope, Candidate, Content,
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiClient, GeminiResult,
    GenerateContentRequest, GenerateContentResponse, GoogleSearch, GroundingChunk,
    GroundingMetadata, Part, Tool, WebSource, resolve_api_key,
};
