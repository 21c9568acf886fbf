//! Trait definitions for search-grounded backends.

use async_trait::async_trait;
use cineregional_core::{GroundedRequest, GroundedResponse};
use cineregional_error::CineResult;
use std::sync::Arc;

/// A backend that answers a prompt, optionally grounded in live web search,
/// and reports the sources it consulted.
///
/// Implementations perform exactly one upstream call per `generate` and do
/// not retry.
#[async_trait]
pub trait GroundedDriver: Send + Sync {
    /// Generate an answer for the request.
    async fn generate(&self, req: &GroundedRequest) -> CineResult<GroundedResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when the request names none.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: GroundedDriver + ?Sized> GroundedDriver for Arc<T> {
    async fn generate(&self, req: &GroundedRequest) -> CineResult<GroundedResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
