//! Movie market analysis from a search-grounded model answer.
//!
//! The upstream model answers in prose with JSON embedded after marker
//! tokens. Nothing about that shape is guaranteed, so every field is
//! extracted on its own: a missing or malformed block degrades that one
//! field to its default and the rest of the analysis still succeeds. Only a
//! failed upstream call fails an analysis.
//!
//! # Example
//!
//! ```
//! use cineregional_analysis::extract_analysis;
//! use cineregional_core::{AnalysisRequest, PromptVariant};
//!
//! let request = AnalysisRequest::new("Arrival", PromptVariant::Regional).unwrap();
//! let text = "1. A cerebral hit.\n2. Highlights\n- Oscar win\n3. Regions\n\
//!             DATA_BLOCK: [{\"region\":\"USA\",\"boxOffice\":100.5,\
//!             \"popularityScore\":88,\"availability\":[\"Paramount+\"]}]";
//!
//! let analysis = extract_analysis(&request, text, Vec::new());
//! assert_eq!(analysis.summary(), "A cerebral hit.");
//! assert_eq!(analysis.global_highlights(), &vec!["Oscar win".to_string()]);
//! assert_eq!(analysis.regional_breakdown().len(), 1);
//! assert!(analysis.continental_breakdown().is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod defaults;
mod extract;
mod prompt;
mod sections;

pub use analyzer::{MovieAnalyzer, extract_analysis};
pub use defaults::{DEFAULT_SUMMARY, FieldDefaults};
pub use extract::{BlockShape, FieldMiss, block_candidates, extract_block, parse_block};
pub use prompt::{Marker, build_prompt};
pub use sections::{extract_highlights, extract_summary};
