//! The analysis pipeline: prompt, one grounded call, field-local extraction.

use crate::{
    FieldDefaults, FieldMiss, Marker, build_prompt, extract_highlights, extract_summary,
    parse_block,
};
use cineregional_core::{
    AnalysisRequest, GroundedRequest, MovieAnalysis, PromptVariant, SourceCitation,
};
use cineregional_error::AnalysisError;
use cineregional_interface::GroundedDriver;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};

/// Runs analyses against a grounded backend.
///
/// Each call to [`analyze`](Self::analyze) issues exactly one upstream
/// request. There is no retry and no caching; a failed call is reported to
/// the caller as an [`AnalysisError`] carrying a single user-facing message.
pub struct MovieAnalyzer<D> {
    driver: D,
    model: Option<String>,
    variant: PromptVariant,
}

impl<D: GroundedDriver> MovieAnalyzer<D> {
    /// Create an analyzer using the driver's default model and the full
    /// prompt variant.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            model: None,
            variant: PromptVariant::default(),
        }
    }

    /// Override the model named in each request.
    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    /// Choose which data blocks the prompt asks for.
    pub fn with_variant(mut self, variant: PromptVariant) -> Self {
        self.variant = variant;
        self
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The prompt variant used by [`analyze`](Self::analyze).
    pub fn variant(&self) -> PromptVariant {
        self.variant
    }

    /// Analyze a movie by title.
    ///
    /// # Errors
    ///
    /// Fails when the title is blank or the upstream call is rejected.
    /// Extraction problems never fail the call; the affected fields fall
    /// back to their defaults.
    pub async fn analyze(&self, title: &str) -> Result<MovieAnalysis, AnalysisError> {
        let request = AnalysisRequest::new(title, self.variant)?;
        self.analyze_request(&request).await
    }

    /// Analyze a validated request.
    #[instrument(
        skip_all,
        fields(
            title = %request.title(),
            variant = %request.variant(),
            provider = self.driver.provider_name(),
        )
    )]
    pub async fn analyze_request(
        &self,
        request: &AnalysisRequest,
    ) -> Result<MovieAnalysis, AnalysisError> {
        let grounded = GroundedRequest {
            prompt: build_prompt(request),
            model: self.model.clone(),
            search_grounding: true,
        };

        let response = self.driver.generate(&grounded).await.map_err(|e| {
            error!(error = %e, "Grounded generation failed");
            AnalysisError::upstream(e)
        })?;

        let (text, citations) = response.into_parts();
        debug!(
            text_len = text.len(),
            citations = citations.len(),
            "Received grounded answer"
        );

        let analysis = extract_analysis(request, &text, citations);
        info!(
            regions = analysis.regional_breakdown().len(),
            continents = analysis.continental_breakdown().len(),
            sources = analysis.sources().len(),
            "Analysis complete"
        );
        Ok(analysis)
    }
}

/// Build a [`MovieAnalysis`] from an answer text and its citations.
///
/// Every field is extracted independently. A field that is missing,
/// malformed, or of the wrong shape takes its value from
/// [`FieldDefaults`] and a warning is logged. `globalStats` is only
/// populated for variants that ask for it. Citations with empty uris and
/// repeated uris are dropped.
pub fn extract_analysis(
    request: &AnalysisRequest,
    text: &str,
    citations: Vec<SourceCitation>,
) -> MovieAnalysis {
    let summary = extract_summary(text).unwrap_or_else(|| {
        debug!("No summary line, using placeholder");
        FieldDefaults::summary()
    });
    let global_highlights = match extract_highlights(text) {
        highlights if highlights.is_empty() => {
            debug!("No highlight bullets, using default");
            FieldDefaults::global_highlights()
        }
        highlights => highlights,
    };

    let regional_breakdown =
        block_or_default(text, Marker::DataBlock, FieldDefaults::regional_breakdown);
    let continental_breakdown = block_or_default(
        text,
        Marker::ContinentalBlock,
        FieldDefaults::continental_breakdown,
    );
    let global_stats = request
        .variant()
        .requests_global_stats()
        .then(|| block_or_default(text, Marker::GlobalStats, FieldDefaults::global_stats));

    MovieAnalysis::from_parts(
        request.title(),
        summary,
        global_highlights,
        global_stats,
        regional_breakdown,
        continental_breakdown,
        citations,
    )
}

fn block_or_default<T: DeserializeOwned>(
    text: &str,
    marker: Marker,
    default: impl FnOnce() -> T,
) -> T {
    match parse_block(text, marker) {
        Ok(value) => value,
        Err(FieldMiss::NotFound) => {
            warn!(%marker, "Block not found, using default");
            default()
        }
        Err(miss) => {
            warn!(%marker, %miss, "Block unusable, using default");
            default()
        }
    }
}
