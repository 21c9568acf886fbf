//! Test utilities for facade tests.

use async_trait::async_trait;
use cineregional::{
    CineError, CineResult, GeminiError, GeminiErrorKind, GroundedDriver, GroundedRequest,
    GroundedResponse,
};
use std::sync::{Arc, Mutex};

/// Minimal grounded answer with one regional entry.
#[allow(dead_code)]
pub const SHORT_ANSWER: &str = "1. Playing well.\n2. Highlights\n- Strong legs\n3. Regions\n\
DATA_BLOCK: [{\"region\":\"USA\",\"boxOffice\":120,\"popularityScore\":80,\"availability\":[\"Theaters\"]}]\n\
CONTINENTAL_BLOCK: []\n\
GLOBAL_STATS: {\"totalBoxOffice\":\"$300M\",\"criticScore\":81,\"audienceScore\":85,\"globalReachIndex\":6,\"releaseStatus\":\"In theaters\"}";

/// Mock driver that answers with fixed text or fails, counting calls.
pub struct MockGroundedDriver {
    outcome: Result<GroundedResponse, GeminiErrorKind>,
    call_count: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockGroundedDriver {
    /// Always answer with `text` and no citations.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(GroundedResponse::new(text, Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Always fail with `error`.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self {
            outcome: Err(error),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl GroundedDriver for MockGroundedDriver {
    async fn generate(&self, _req: &GroundedRequest) -> CineResult<GroundedResponse> {
        *self.call_count.lock().unwrap() += 1;
        match &self.outcome {
            Ok(response) => Ok(response.clone()),
            Err(kind) => Err(CineError::from(GeminiError::new(kind.clone()))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-grounded"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
