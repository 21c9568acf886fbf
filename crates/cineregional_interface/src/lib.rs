//! Trait seam between the analysis pipeline and text generation backends.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::GroundedDriver;
