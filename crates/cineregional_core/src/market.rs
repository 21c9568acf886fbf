//! Per-market performance records.
//!
//! Field names serialize in camelCase because that is the shape the model
//! is told to emit. Numbers are taken as reported; nothing is clamped.

use serde::{Deserialize, Serialize};

/// Performance of a movie in one country or market.
///
/// # Examples
///
/// ```
/// use cineregional_core::RegionalEntry;
///
/// let entry: RegionalEntry = serde_json::from_str(
///     r#"{"region":"USA","boxOffice":282.1,"popularityScore":94,"availability":["Max"]}"#,
/// ).unwrap();
/// assert_eq!(entry.region, "USA");
/// assert_eq!(entry.availability, vec!["Max".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalEntry {
    /// Market name, e.g. "USA"
    pub region: String,
    /// Box office in millions of USD
    pub box_office: f64,
    /// Popularity on a 0 to 100 scale
    pub popularity_score: f64,
    /// Platforms where the movie can be watched, in reported order
    pub availability: Vec<String>,
}

/// Aggregate performance across one continent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinentalEntry {
    /// Continent name, e.g. "Asia"
    pub continent: String,
    /// Share of the global market, in percent
    pub market_share: f64,
    /// Free-form trend label, e.g. "Trending" or "Stable"
    pub status: String,
    /// Strongest country on the continent
    pub top_country: String,
}
