//! Web sources consulted by a grounded model.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A web page the model consulted while answering.
///
/// # Examples
///
/// ```
/// use cineregional_core::SourceCitation;
///
/// let source = SourceCitation::new("https://example.com/dune", "Dune box office");
/// assert_eq!(source.uri, "https://example.com/dune");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceCitation {
    /// Address of the page
    pub uri: String,
    /// Page title as reported by the search tool
    pub title: String,
}

impl SourceCitation {
    /// Create a citation from a uri and title.
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
        }
    }
}

/// Drop citations with an empty uri and keep only the first citation for
/// each uri, preserving order.
///
/// # Examples
///
/// ```
/// use cineregional_core::{SourceCitation, dedup_citations};
///
/// let sources = dedup_citations(vec![
///     SourceCitation::new("a", "X"),
///     SourceCitation::new("a", "Y"),
///     SourceCitation::new("", "Q"),
///     SourceCitation::new("b", "Z"),
/// ]);
/// assert_eq!(sources.len(), 2);
/// assert_eq!(sources[0].title, "X");
/// ```
pub fn dedup_citations(citations: impl IntoIterator<Item = SourceCitation>) -> Vec<SourceCitation> {
    let mut seen = HashSet::new();
    citations
        .into_iter()
        .filter(|c| !c.uri.is_empty())
        .filter(|c| seen.insert(c.uri.clone()))
        .collect()
}
