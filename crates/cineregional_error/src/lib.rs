//! Error types for the CineRegional library.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! Only two conditions ever reach a caller of the analysis pipeline: an
//! upstream failure and an invalid request. Per-field extraction misses are
//! handled inside the pipeline and never become errors.
//!
//! # Examples
//!
//! ```
//! use cineregional_error::{CineResult, IoError};
//!
//! fn read_answer() -> CineResult<String> {
//!     Err(IoError::new("answer.txt: No such file or directory"))?
//! }
//!
//! assert!(read_answer().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod config;
mod error;
mod gemini;
mod io;
mod json;

pub use analysis::{AnalysisError, AnalysisErrorKind, UPSTREAM_FAILURE_MESSAGE};
pub use config::ConfigError;
pub use error::{CineError, CineErrorKind, CineResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use io::IoError;
pub use json::JsonError;
