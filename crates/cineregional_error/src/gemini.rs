//! Gemini-specific error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key not found in environment
    #[display("{} environment variable not set", _0)]
    MissingApiKey(String),
    /// Failed to create the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// Request could not be sent or the body could not be read
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// Non-success HTTP status with the API's error message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response body was not a valid generateContent response
    #[display("Invalid Gemini response: {}", _0)]
    InvalidResponse(String),
    /// Request exceeded the configured timeout
    #[display("Gemini request timed out after {} seconds", _0)]
    Timeout(u64),
}

impl GeminiErrorKind {
    /// Whether the failure is an authentication or authorization rejection.
    pub fn is_auth(&self) -> bool {
        match self {
            GeminiErrorKind::MissingApiKey(_) => true,
            GeminiErrorKind::HttpError { status_code, .. } => {
                matches!(*status_code, 401 | 403)
            }
            _ => false,
        }
    }

    /// Whether the failure is a quota or rate-limit rejection.
    pub fn is_quota(&self) -> bool {
        matches!(self, GeminiErrorKind::HttpError { status_code: 429, .. })
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use cineregional_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey("GEMINI_API_KEY".into()));
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// assert!(err.kind.is_auth());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
