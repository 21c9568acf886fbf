//! Google Gemini REST client.
//!
//! # Example
//!
//! ```no_run
//! use cineregional_models::GeminiClient;
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Key from GEMINI_API_KEY (or API_KEY), default model
//! let client = GeminiClient::new()?;
//!
//! // Explicit key, model and timeout
//! let client = GeminiClient::with_api_key("my-key", "gemini-2.5-flash")?
//!     .with_timeout(Some(Duration::from_secs(60)))?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use cineregional_core::{GroundedRequest, GroundedResponse};
use cineregional_error::{CineResult, GeminiError, GeminiErrorKind};
use cineregional_interface::GroundedDriver;

use super::GeminiResult;
use super::dto::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

/// Default REST endpoint root.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when neither the client nor the request names one.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Environment variables consulted for the API key, in order.
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

/// Look up the first non-empty API key among `names`.
///
/// `lookup` abstracts the environment so callers and tests can supply
/// their own source.
///
/// # Examples
///
/// ```
/// use cineregional_models::resolve_api_key;
///
/// let key = resolve_api_key(&["A", "B"], |name| (name == "B").then(|| "k".to_string()));
/// assert_eq!(key.unwrap(), "k");
/// assert!(resolve_api_key(&["A"], |_| None).is_err());
/// ```
pub fn resolve_api_key(
    names: &[&str],
    lookup: impl Fn(&str) -> Option<String>,
) -> GeminiResult<String> {
    names
        .iter()
        .find_map(|name| lookup(name).filter(|v| !v.trim().is_empty()))
        .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey(names.join(" or "))))
}

/// Client for the Gemini `generateContent` endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    base_url: String,
    model_name: String,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model_name", &self.model_name)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client using the key from `GEMINI_API_KEY` or `API_KEY`
    /// and the default model.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> GeminiResult<Self> {
        let api_key = resolve_api_key(API_KEY_ENV_VARS, |name| std::env::var(name).ok())?;
        Self::with_api_key(api_key, DEFAULT_GEMINI_MODEL)
    }

    /// Create a client with an explicit key and default model.
    #[instrument(name = "gemini_client_with_api_key", skip_all)]
    pub fn with_api_key(
        api_key: impl Into<String>,
        model_name: impl Into<String>,
    ) -> GeminiResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey(
                "api key".to_string(),
            )));
        }
        Ok(Self {
            http: Self::build_http(None)?,
            api_key,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model_name: model_name.into(),
            timeout: None,
        })
    }

    /// Point the client at a different endpoint root (proxies, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Bound every request by `timeout`; `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> GeminiResult<Self> {
        self.http = Self::build_http(timeout)?;
        self.timeout = timeout;
        Ok(self)
    }

    /// Endpoint root in use.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request timeout in use.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn build_http(timeout: Option<Duration>) -> GeminiResult<Client> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))
    }

    /// Full URL of the generateContent endpoint for `model`.
    ///
    /// Accepts names with or without the `models/` prefix.
    pub fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Map a transport failure to a Gemini error.
    fn transport_error(&self, err: reqwest::Error) -> GeminiError {
        if err.is_timeout() {
            let secs = self.timeout.map(|t| t.as_secs()).unwrap_or_default();
            GeminiError::new(GeminiErrorKind::Timeout(secs))
        } else {
            GeminiError::new(GeminiErrorKind::ApiRequest(err.to_string()))
        }
    }

    /// Build a status error from a non-success response body.
    ///
    /// Uses the API's own message when the body is a Gemini error envelope,
    /// the raw body otherwise.
    pub fn status_error(status_code: u16, body: &str) -> GeminiError {
        let message = serde_json::from_str::<ApiErrorEnvelope>(body)
            .map(|env| match env.error.status {
                Some(status) => format!("{} ({})", env.error.message, status),
                None => env.error.message,
            })
            .unwrap_or_else(|_| body.trim().to_string());
        GeminiError::new(GeminiErrorKind::HttpError {
            status_code,
            message,
        })
    }

    /// Send one request and decode the answer.
    #[instrument(skip(self, req), fields(model, grounded = req.search_grounding))]
    async fn generate_internal(&self, req: &GroundedRequest) -> GeminiResult<GroundedResponse> {
        let model = req.model.as_deref().unwrap_or(&self.model_name);
        tracing::Span::current().record("model", model);

        let url = self.endpoint(model);
        let body = GenerateContentRequest::user_prompt(req.prompt.clone(), req.search_grounding);
        debug!(url = %url, prompt_chars = req.prompt.len(), "Sending Gemini generateContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let err = Self::status_error(status.as_u16(), &text);
            warn!(status = status.as_u16(), error = %err, "Gemini request rejected");
            return Err(err);
        }

        let decoded: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| GeminiError::new(GeminiErrorKind::InvalidResponse(e.to_string())))?;

        if decoded.candidates.is_empty() {
            warn!("Gemini response carried no candidates");
        }

        let citations = decoded.citations();
        let answer = decoded.text();
        debug!(
            answer_chars = answer.len(),
            citations = citations.len(),
            finish_reason = decoded.finish_reason(),
            search_queries = ?decoded.search_queries(),
            "Received Gemini response"
        );

        Ok(GroundedResponse::new(answer, citations))
    }
}

#[async_trait]
impl GroundedDriver for GeminiClient {
    async fn generate(&self, req: &GroundedRequest) -> CineResult<GroundedResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
