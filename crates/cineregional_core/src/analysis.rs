//! The aggregate produced by one search.

use crate::{ContinentalEntry, GlobalStats, RegionalEntry, SourceCitation, dedup_citations};
use serde::{Deserialize, Serialize};

/// Everything extracted for one movie.
///
/// Built once per search and replaced by the next one. Consumers read it;
/// they never mutate or re-derive its fields.
///
/// # Examples
///
/// ```
/// use cineregional_core::{MovieAnalysis, RegionalEntry};
///
/// let analysis = MovieAnalysis::builder()
///     .title("Arrival")
///     .summary("A quiet hit.")
///     .regional_breakdown(vec![RegionalEntry {
///         region: "USA".into(),
///         box_office: 100.5,
///         popularity_score: 80.0,
///         availability: vec![],
///     }])
///     .build()
///     .unwrap();
///
/// assert_eq!(analysis.title(), "Arrival");
/// assert_eq!(analysis.total_regional_box_office(), 100.5);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct MovieAnalysis {
    /// Title as entered by the user (trimmed)
    title: String,
    /// One-line status summary
    summary: String,
    /// Market highlights in reported order
    #[builder(default)]
    global_highlights: Vec<String>,
    /// Headline figures; `None` when the prompt did not ask for them
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    global_stats: Option<GlobalStats>,
    /// Per-market breakdown
    #[builder(default)]
    regional_breakdown: Vec<RegionalEntry>,
    /// Per-continent breakdown
    #[builder(default)]
    continental_breakdown: Vec<ContinentalEntry>,
    /// Consulted sources, unique by uri
    #[builder(default)]
    sources: Vec<SourceCitation>,
}

impl MovieAnalysis {
    /// Creates a new builder for `MovieAnalysis`.
    pub fn builder() -> MovieAnalysisBuilder {
        MovieAnalysisBuilder::default()
    }

    /// Assemble an analysis from already extracted parts.
    ///
    /// Sources are deduplicated by uri, keeping the first occurrence.
    pub fn from_parts(
        title: impl Into<String>,
        summary: impl Into<String>,
        global_highlights: Vec<String>,
        global_stats: Option<GlobalStats>,
        regional_breakdown: Vec<RegionalEntry>,
        continental_breakdown: Vec<ContinentalEntry>,
        sources: Vec<SourceCitation>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            global_highlights,
            global_stats,
            regional_breakdown,
            continental_breakdown,
            sources: dedup_citations(sources),
        }
    }

    /// Sum of box office across all regional entries, in millions of USD.
    pub fn total_regional_box_office(&self) -> f64 {
        self.regional_breakdown.iter().map(|r| r.box_office).sum()
    }

    /// Region with the highest box office.
    pub fn top_region(&self) -> Option<&RegionalEntry> {
        self.regional_breakdown
            .iter()
            .max_by(|a, b| a.box_office.total_cmp(&b.box_office))
    }

    /// Continent with the largest market share.
    pub fn leading_continent(&self) -> Option<&ContinentalEntry> {
        self.continental_breakdown
            .iter()
            .max_by(|a, b| a.market_share.total_cmp(&b.market_share))
    }
}
