//! Errors surfaced by the analysis pipeline.

/// The message shown to an end user when the upstream call fails.
pub const UPSTREAM_FAILURE_MESSAGE: &str =
    "Failed to analyze movie. Ensure search access is available.";

/// Conditions that make an analysis fail as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AnalysisErrorKind {
    /// The generation call itself was rejected (network, auth, quota,
    /// malformed request, timeout). The detail is kept for logs; the
    /// display text is the fixed user-facing message.
    #[display("Failed to analyze movie. Ensure search access is available.")]
    UpstreamFailure {
        /// Description of the underlying failure
        detail: String,
    },
    /// The movie title was empty after trimming
    #[display("Movie title must not be empty")]
    EmptyTitle,
}

/// Analysis error with location tracking.
///
/// # Examples
///
/// ```
/// use cineregional_error::{AnalysisError, AnalysisErrorKind, UPSTREAM_FAILURE_MESSAGE};
///
/// let err = AnalysisError::new(AnalysisErrorKind::UpstreamFailure {
///     detail: "HTTP 429".into(),
/// });
/// assert_eq!(err.user_message(), UPSTREAM_FAILURE_MESSAGE);
/// assert_eq!(err.detail(), Some("HTTP 429"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Analysis Error: {} at line {} in {}", kind, line, file)]
pub struct AnalysisError {
    /// The kind of error that occurred
    pub kind: AnalysisErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AnalysisError {
    /// Create a new AnalysisError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AnalysisErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Wrap an upstream failure, keeping its text as the detail.
    #[track_caller]
    pub fn upstream(source: impl std::fmt::Display) -> Self {
        Self::new(AnalysisErrorKind::UpstreamFailure {
            detail: source.to_string(),
        })
    }

    /// The single message suitable for showing to an end user.
    pub fn user_message(&self) -> String {
        self.kind.to_string()
    }

    /// Underlying upstream detail, if any.
    pub fn detail(&self) -> Option<&str> {
        match &self.kind {
            AnalysisErrorKind::UpstreamFailure { detail } => Some(detail),
            AnalysisErrorKind::EmptyTitle => None,
        }
    }
}
