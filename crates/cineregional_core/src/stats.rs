//! Headline numbers for a movie.

use serde::{Deserialize, Serialize};

/// Worldwide summary figures.
///
/// The `Default` value is the zeroed record substituted when the model's
/// `GLOBAL_STATS` block is missing or malformed.
///
/// # Examples
///
/// ```
/// use cineregional_core::GlobalStats;
///
/// let stats = GlobalStats::default();
/// assert_eq!(stats.critic_score, 0.0);
/// assert!(stats.total_box_office.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    /// Pre-formatted total, e.g. "$750M+"
    pub total_box_office: String,
    /// Critic score, 0 to 100
    pub critic_score: f64,
    /// Audience score, 0 to 100
    pub audience_score: f64,
    /// How widely the movie travelled, 1 to 10
    pub global_reach_index: f64,
    /// Release label, e.g. "In theaters" or "Streaming"
    pub release_status: String,
}
