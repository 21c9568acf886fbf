//! Wire types for the Gemini `generateContent` REST endpoint.
//!
//! Only the fields the pipeline reads are modelled; everything else in the
//! response is ignored on deserialization.

use cineregional_core::SourceCitation;
use serde::{Deserialize, Serialize};

/// Title used for a grounding source that carries none.
const UNTITLED_SOURCE: &str = "Source";

/// Request body for `models/{model}:generateContent`.
///
/// # Examples
///
/// ```
/// use cineregional_models::GenerateContentRequest;
///
/// let body = GenerateContentRequest::user_prompt("Hello", true);
/// let json = serde_json::to_value(&body).unwrap();
/// assert_eq!(json["contents"][0]["parts"][0]["text"], "Hello");
/// assert!(json["tools"][0]["google_search"].is_object());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// Conversation turns
    pub contents: Vec<Content>,
    /// Tools made available to the model
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

impl GenerateContentRequest {
    /// A single user turn, with Google Search grounding when `grounded`.
    pub fn user_prompt(prompt: impl Into<String>, grounded: bool) -> Self {
        let tools = if grounded {
            vec![Tool::google_search()]
        } else {
            Vec::new()
        };
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
            }],
            tools,
        }
    }
}

/// One turn of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// "user" or "model"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts; non-text parts deserialize with `text: None`
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A content part. Only text parts are modelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Text of the part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A tool declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Live web search grounding
    #[serde(rename = "google_search")]
    pub google_search: GoogleSearch,
}

impl Tool {
    /// The Google Search grounding tool.
    pub fn google_search() -> Self {
        Self {
            google_search: GoogleSearch {},
        }
    }
}

/// Marker object enabling Google Search; serializes as `{}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GoogleSearch {}

/// Response body of `generateContent`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    /// Candidate answers; the pipeline reads only the first
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, or an empty string.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    /// Why the first candidate stopped, if reported.
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
    }

    /// Search queries the model issued for the first candidate.
    pub fn search_queries(&self) -> &[String] {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|meta| meta.web_search_queries.as_slice())
            .unwrap_or_default()
    }

    /// Web sources from the first candidate's grounding metadata, in order.
    ///
    /// Chunks without a web source are skipped; a missing uri becomes an
    /// empty string and a missing title becomes `"Source"`. Filtering and
    /// de-duplication are left to the caller.
    pub fn citations(&self) -> Vec<SourceCitation> {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|meta| {
                meta.grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref())
                    .map(|web| {
                        SourceCitation::new(
                            web.uri.clone().unwrap_or_default(),
                            web.title
                                .clone()
                                .unwrap_or_else(|| UNTITLED_SOURCE.to_string()),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A candidate answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Answer content
    #[serde(default)]
    pub content: Option<Content>,
    /// Sources and queries used for grounding
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
    /// Why generation stopped, e.g. "STOP" or "SAFETY"
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Grounding metadata attached to a candidate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    /// Retrieved pages
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
    /// Search queries the model issued
    #[serde(default)]
    pub web_search_queries: Vec<String>,
}

/// One retrieved item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundingChunk {
    /// Web page, when the chunk came from web search
    #[serde(default)]
    pub web: Option<WebSource>,
}

/// A web page used for grounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebSource {
    /// Page address
    #[serde(default)]
    pub uri: Option<String>,
    /// Page title
    #[serde(default)]
    pub title: Option<String>,
}

/// Error body returned with non-success statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorEnvelope {
    /// The error
    pub error: ApiErrorBody,
}

/// Details of an API error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// HTTP-like status code
    #[serde(default)]
    pub code: Option<u16>,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Canonical status, e.g. "RESOURCE_EXHAUSTED"
    #[serde(default)]
    pub status: Option<String>,
}
