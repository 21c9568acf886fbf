//! Top-level error wrapper types.

use crate::{AnalysisError, ConfigError, GeminiError, IoError, JsonError};

/// Every error kind the workspace produces.
///
/// # Examples
///
/// ```
/// use cineregional_error::{CineError, IoError};
///
/// let err: CineError = IoError::new("answer.txt: permission denied").into();
/// assert!(format!("{}", err).contains("IO Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CineErrorKind {
    /// Local I/O error
    #[from(IoError)]
    Io(IoError),
    /// JSON serialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Analysis pipeline error
    #[from(AnalysisError)]
    Analysis(AnalysisError),
}

/// CineRegional error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("CineRegional Error: {}", _0)]
pub struct CineError(Box<CineErrorKind>);

impl CineError {
    /// Create a new error from a kind.
    pub fn new(kind: CineErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CineErrorKind {
        &self.0
    }
}

impl<T> From<T> for CineError
where
    T: Into<CineErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for CineRegional operations.
pub type CineResult<T> = std::result::Result<T, CineError>;
