//! Mock grounded driver for testing.

use async_trait::async_trait;
use cineregional_core::{GroundedRequest, GroundedResponse, SourceCitation};
use cineregional_error::{CineError, CineResult, GeminiError, GeminiErrorKind};
use cineregional_interface::GroundedDriver;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always answer with the given text and citations
    Success(GroundedResponse),
    /// Always fail with the specified error
    Error(GeminiErrorKind),
    /// Return a sequence of responses, then fail once exhausted
    Sequence(Vec<MockResponse>),
}

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(GroundedResponse),
    Error(GeminiErrorKind),
}

/// Mock driver that records what it was asked.
pub struct MockGroundedDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<GroundedRequest>>>,
}

#[allow(dead_code)]
impl MockGroundedDriver {
    /// Create a mock that always answers with `text` and `citations`.
    pub fn new_success(text: impl Into<String>, citations: Vec<SourceCitation>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(GroundedResponse::new(text, citations)))
    }

    /// Create a mock that always fails with the given error.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Create a mock with a sequence of responses.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// Create a mock with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<GroundedRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    fn fail(kind: &GeminiErrorKind) -> CineResult<GroundedResponse> {
        Err(CineError::from(GeminiError::new(kind.clone())))
    }

    fn next_response(&self) -> CineResult<GroundedResponse> {
        let mut count = self.call_count.lock().unwrap();
        let current = *count;
        *count += 1;

        match &self.behavior {
            MockBehavior::Success(response) => Ok(response.clone()),
            MockBehavior::Error(kind) => Self::fail(kind),
            MockBehavior::Sequence(responses) => match responses.get(current) {
                Some(MockResponse::Success(response)) => Ok(response.clone()),
                Some(MockResponse::Error(kind)) => Self::fail(kind),
                None => Self::fail(&GeminiErrorKind::ApiRequest(format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    current + 1,
                    responses.len()
                ))),
            },
        }
    }
}

#[async_trait]
impl GroundedDriver for MockGroundedDriver {
    async fn generate(&self, req: &GroundedRequest) -> CineResult<GroundedResponse> {
        self.requests.lock().unwrap().push(req.clone());
        tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
        self.next_response()
    }

    fn provider_name(&self) -> &'static str {
        "mock-grounded"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
