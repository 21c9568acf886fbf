//! Values substituted for fields that could not be extracted.

use cineregional_core::{ContinentalEntry, GlobalStats, RegionalEntry};

/// Summary used when the answer has no `1.` line.
pub const DEFAULT_SUMMARY: &str = "No summary available.";

/// Per-field fallbacks, one place for every default the extractor uses.
///
/// ```
/// use cineregional_analysis::{DEFAULT_SUMMARY, FieldDefaults};
///
/// assert_eq!(FieldDefaults::summary(), DEFAULT_SUMMARY);
/// assert!(FieldDefaults::regional_breakdown().is_empty());
/// assert_eq!(FieldDefaults::global_stats().audience_score, 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FieldDefaults;

impl FieldDefaults {
    /// Placeholder summary.
    pub fn summary() -> String {
        DEFAULT_SUMMARY.to_string()
    }

    /// No highlights.
    pub fn global_highlights() -> Vec<String> {
        Vec::new()
    }

    /// No regional entries.
    pub fn regional_breakdown() -> Vec<RegionalEntry> {
        Vec::new()
    }

    /// No continental entries.
    pub fn continental_breakdown() -> Vec<ContinentalEntry> {
        Vec::new()
    }

    /// Zeroed stats record.
    pub fn global_stats() -> GlobalStats {
        GlobalStats::default()
    }
}
