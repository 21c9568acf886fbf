//! Instruction sent to the grounded model.

use crate::BlockShape;
use cineregional_core::{AnalysisRequest, PromptVariant};

/// Tokens that introduce the JSON blocks at the end of an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Array of regional entries
    DataBlock,
    /// Array of continental entries
    ContinentalBlock,
    /// Global stats object
    GlobalStats,
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl Marker {
    /// Every marker, in the order the prompt asks for them.
    pub const ALL: [Marker; 3] = [
        Marker::DataBlock,
        Marker::ContinentalBlock,
        Marker::GlobalStats,
    ];

    const WITHOUT_STATS: [Marker; 2] = [Marker::DataBlock, Marker::ContinentalBlock];

    /// The literal token searched for in the answer.
    pub fn token(self) -> &'static str {
        match self {
            Marker::DataBlock => "DATA_BLOCK",
            Marker::ContinentalBlock => "CONTINENTAL_BLOCK",
            Marker::GlobalStats => "GLOBAL_STATS",
        }
    }

    /// JSON shape expected after the token.
    pub fn shape(self) -> BlockShape {
        match self {
            Marker::DataBlock | Marker::ContinentalBlock => BlockShape::Array,
            Marker::GlobalStats => BlockShape::Object,
        }
    }

    /// Markers a prompt variant asks the model to emit.
    pub fn for_variant(variant: PromptVariant) -> &'static [Marker] {
        if variant.requests_global_stats() {
            &Marker::ALL
        } else {
            &Marker::WITHOUT_STATS
        }
    }
}

const REGIONAL_FORMAT: &str = r#"{"region": "USA", "boxOffice": 282.1, "popularityScore": 94, "availability": ["Theaters", "Max"]}"#;
const CONTINENTAL_FORMAT: &str = r#"{"continent": "Asia", "marketShare": 45, "status": "Hyper-growth", "topCountry": "China"}"#;
const GLOBAL_STATS_FORMAT: &str = r#"{"totalBoxOffice": "$750M+", "criticScore": 92, "audienceScore": 95, "globalReachIndex": 9, "releaseStatus": "Streaming"}"#;

/// Build the instruction for one analysis.
///
/// The answer is asked to open with numbered sections (`1.` summary, `2.`
/// bulleted highlights) and to end with one JSON block per marker of the
/// request's variant.
///
/// # Examples
///
/// ```
/// use cineregional_analysis::build_prompt;
/// use cineregional_core::{AnalysisRequest, PromptVariant};
///
/// let request = AnalysisRequest::new("Dune: Part Two", PromptVariant::Regional).unwrap();
/// let prompt = build_prompt(&request);
/// assert!(prompt.contains("\"Dune: Part Two\""));
/// assert!(prompt.contains("CONTINENTAL_BLOCK"));
/// assert!(!prompt.contains("GLOBAL_STATS"));
/// ```
pub fn build_prompt(request: &AnalysisRequest) -> String {
    let markers = Marker::for_variant(request.variant());
    let mut prompt = format!(
        "Using GOOGLE SEARCH as your primary data source, analyze the movie \"{}\" \
         with a focus on current regional and continental performance.\n\n\
         IMPORTANT: You MUST use real-time search results to find:\n\
         1. A concise, current summary of the movie's status.\n\
         2. Global market highlights based on recent news, one per line, each starting with \"- \".\n\
         3. A detailed regional breakdown for specific major markets (e.g., USA, China, UK, Japan).\n\
         4. A continental breakdown summarizing performance across Africa, Asia, Europe, \
         North America, South America, and Oceania.\n\n\
         Structure your response with exactly these numbered sections. ",
        request.title()
    );

    prompt.push_str(&format!(
        "End with {} JSON blocks, each on its own after its marker:\n",
        markers.len()
    ));
    for marker in markers {
        let (description, format) = match marker {
            Marker::DataBlock => ("Array of regional data objects", REGIONAL_FORMAT),
            Marker::ContinentalBlock => ("Array of continental data objects", CONTINENTAL_FORMAT),
            Marker::GlobalStats => ("A single global stats object", GLOBAL_STATS_FORMAT),
        };
        prompt.push_str(&format!("- {}: {}. Format: {}\n", marker, description, format));
    }
    prompt.push_str(
        "\nBox office figures are in millions of USD, popularityScore and the two \
         scores are 0-100, globalReachIndex is 1-10. Use plain numbers, not strings.\n",
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_prompt_requests_every_block() {
        let request = AnalysisRequest::new("Sinners", PromptVariant::Full).unwrap();
        let prompt = build_prompt(&request);

        assert!(prompt.contains("End with 3 JSON blocks"));
        for marker in Marker::ALL {
            assert!(prompt.contains(&format!("- {}:", marker)), "missing {marker}");
        }
        assert!(prompt.contains(GLOBAL_STATS_FORMAT));
    }

    #[test]
    fn regional_prompt_requests_two_blocks() {
        let request = AnalysisRequest::new("Sinners", PromptVariant::Regional).unwrap();
        let prompt = build_prompt(&request);

        assert!(prompt.contains("End with 2 JSON blocks"));
        assert!(prompt.contains(REGIONAL_FORMAT));
        assert!(prompt.contains(CONTINENTAL_FORMAT));
    }

    #[test]
    fn prompt_names_numbered_sections() {
        let request = AnalysisRequest::new("Sinners", PromptVariant::Full).unwrap();
        let prompt = build_prompt(&request);

        assert!(prompt.contains("analyze the movie \"Sinners\""));
        assert!(prompt.contains("\n1. "));
        assert!(prompt.contains("\n2. "));
        assert!(prompt.contains("GOOGLE SEARCH"));
    }
}
