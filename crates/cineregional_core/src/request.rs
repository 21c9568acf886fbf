//! Request and response types exchanged with a search-grounded model.

use crate::SourceCitation;
use cineregional_error::{AnalysisError, AnalysisErrorKind};
use serde::{Deserialize, Serialize};

/// Which set of data blocks the prompt asks the model to emit.
///
/// # Examples
///
/// ```
/// use cineregional_core::PromptVariant;
/// use std::str::FromStr;
///
/// assert_eq!(PromptVariant::from_str("regional").unwrap(), PromptVariant::Regional);
/// assert_eq!(PromptVariant::default().to_string(), "full");
/// assert!(PromptVariant::Full.requests_global_stats());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PromptVariant {
    /// Regional and continental blocks plus a global stats block
    #[default]
    Full,
    /// Regional and continental blocks only
    Regional,
}

impl PromptVariant {
    /// Whether this variant asks for a `GLOBAL_STATS` block.
    pub fn requests_global_stats(self) -> bool {
        matches!(self, PromptVariant::Full)
    }
}

/// A validated request to analyze one movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    title: String,
    variant: PromptVariant,
}

impl AnalysisRequest {
    /// Create a request, trimming surrounding whitespace from the title.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisErrorKind::EmptyTitle`] when nothing is left after
    /// trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use cineregional_core::{AnalysisRequest, PromptVariant};
    ///
    /// let req = AnalysisRequest::new("  Dune: Part Two ", PromptVariant::Full).unwrap();
    /// assert_eq!(req.title(), "Dune: Part Two");
    /// assert!(AnalysisRequest::new("   ", PromptVariant::Full).is_err());
    /// ```
    #[track_caller]
    pub fn new(title: impl AsRef<str>, variant: PromptVariant) -> Result<Self, AnalysisError> {
        let title = title.as_ref().trim();
        if title.is_empty() {
            return Err(AnalysisError::new(AnalysisErrorKind::EmptyTitle));
        }
        Ok(Self {
            title: title.to_string(),
            variant,
        })
    }

    /// The trimmed movie title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The prompt variant to use.
    pub fn variant(&self) -> PromptVariant {
        self.variant
    }
}

/// A single-turn generation request with optional search grounding.
///
/// # Examples
///
/// ```
/// use cineregional_core::GroundedRequest;
///
/// let request = GroundedRequest::builder()
///     .prompt("Analyze the movie \"Arrival\"")
///     .build()
///     .unwrap();
/// assert!(request.search_grounding);
/// assert!(request.model.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GroundedRequest {
    /// Instruction text sent as the user turn
    pub prompt: String,
    /// Model override; the driver's default is used when `None`
    #[builder(default)]
    pub model: Option<String>,
    /// Whether to enable live web search for this request
    #[builder(default = "true")]
    pub search_grounding: bool,
}

impl GroundedRequest {
    /// Creates a new builder for `GroundedRequest`.
    pub fn builder() -> GroundedRequestBuilder {
        GroundedRequestBuilder::default()
    }
}

/// Free text answer plus the raw citation list from grounding metadata.
///
/// Citations are reported exactly as the upstream returned them; empty
/// uris and duplicates are removed by the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_getters::Getters)]
pub struct GroundedResponse {
    /// Answer text
    text: String,
    /// Citations in upstream order
    citations: Vec<SourceCitation>,
}

impl GroundedResponse {
    /// Create a response from text and citations.
    pub fn new(text: impl Into<String>, citations: Vec<SourceCitation>) -> Self {
        Self {
            text: text.into(),
            citations,
        }
    }

    /// Split into text and citations.
    pub fn into_parts(self) -> (String, Vec<SourceCitation>) {
        (self.text, self.citations)
    }
}
