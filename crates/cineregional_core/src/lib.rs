//! Core data types for the CineRegional library.
//!
//! A [`MovieAnalysis`] is the single unit handed from the extraction
//! pipeline to whatever renders it. The remaining types are its parts and
//! the request/response pair exchanged with a search-grounded model.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod citation;
mod market;
mod request;
mod stats;

pub use analysis::{MovieAnalysis, MovieAnalysisBuilder};
pub use citation::{SourceCitation, dedup_citations};
pub use market::{ContinentalEntry, RegionalEntry};
pub use request::{
    AnalysisRequest, GroundedRequest, GroundedRequestBuilder, GroundedResponse, PromptVariant,
};
pub use stats::GlobalStats;
