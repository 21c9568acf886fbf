//! Google Gemini REST client with Google Search grounding.
//!
//! [`GeminiClient`] issues one `generateContent` call per request with the
//! `google_search` tool enabled, then folds the first candidate into a
//! [`cineregional_core::GroundedResponse`]: its text parts concatenated, and
//! the web sources listed in its grounding metadata.

mod client;
mod dto;

pub use client::{
    API_KEY_ENV_VARS, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiClient,
    resolve_api_key,
};
pub use dto::{
    ApiErrorBody, ApiErrorEnvelope, Candidate, Content, GenerateContentRequest,
    GenerateContentResponse, GoogleSearch, GroundingChunk, GroundingMetadata, Part, Tool,
    WebSource,
};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, cineregional_error::GeminiError>;
