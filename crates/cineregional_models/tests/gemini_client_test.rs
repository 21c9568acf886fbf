#![cfg(feature = "gemini")]

//! Offline checks of GeminiClient construction and error mapping.

use cineregional_error::GeminiErrorKind;
use cineregional_interface::GroundedDriver;
use cineregional_models::{DEFAULT_GEMINI_BASE_URL, GeminiClient, resolve_api_key};
use std::time::Duration;

#[test]
fn test_with_api_key_uses_defaults() -> anyhow::Result<()> {
    let client = GeminiClient::with_api_key("test-key", "gemini-2.5-flash")?;
    assert_eq!(client.provider_name(), "gemini");
    assert_eq!(client.model_name(), "gemini-2.5-flash");
    assert_eq!(client.base_url(), DEFAULT_GEMINI_BASE_URL);
    assert!(client.timeout().is_none());
    Ok(())
}

#[test]
fn test_blank_api_key_is_rejected() {
    let err = GeminiClient::with_api_key("  ", "gemini-2.5-flash").unwrap_err();
    assert!(err.kind.is_auth());
}

#[test]
fn test_debug_output_hides_api_key() -> anyhow::Result<()> {
    let client = GeminiClient::with_api_key("super-secret", "m")?;
    assert!(!format!("{:?}", client).contains("super-secret"));
    Ok(())
}

#[test]
fn test_endpoint_accepts_prefixed_and_bare_models() -> anyhow::Result<()> {
    let client = GeminiClient::with_api_key("k", "m")?.with_base_url("http://localhost:9999/v1/");
    assert_eq!(
        client.endpoint("gemini-2.5-pro"),
        "http://localhost:9999/v1/models/gemini-2.5-pro:generateContent"
    );
    assert_eq!(
        client.endpoint("models/gemini-2.5-pro"),
        "http://localhost:9999/v1/models/gemini-2.5-pro:generateContent"
    );
    Ok(())
}

#[test]
fn test_timeout_is_recorded() -> anyhow::Result<()> {
    let client =
        GeminiClient::with_api_key("k", "m")?.with_timeout(Some(Duration::from_secs(30)))?;
    assert_eq!(client.timeout(), Some(Duration::from_secs(30)));
    Ok(())
}

#[test]
fn test_status_error_prefers_api_message() {
    let body = r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
    let err = GeminiClient::status_error(429, body);
    assert!(err.kind.is_quota());
    assert_eq!(
        err.kind,
        GeminiErrorKind::HttpError {
            status_code: 429,
            message: "Quota exceeded (RESOURCE_EXHAUSTED)".to_string(),
        }
    );
}

#[test]
fn test_status_error_falls_back_to_raw_body() {
    let err = GeminiClient::status_error(502, "  Bad Gateway \n");
    assert_eq!(
        err.kind,
        GeminiErrorKind::HttpError {
            status_code: 502,
            message: "Bad Gateway".to_string(),
        }
    );
}

#[test]
fn test_api_key_lookup_skips_blank_values() -> anyhow::Result<()> {
    let key = resolve_api_key(&["GEMINI_API_KEY", "API_KEY"], |name| match name {
        "GEMINI_API_KEY" => Some(String::new()),
        "API_KEY" => Some("fallback".to_string()),
        _ => None,
    })?;
    assert_eq!(key, "fallback");
    Ok(())
}

#[test]
fn test_missing_api_key_names_every_variable() {
    let err = resolve_api_key(&["GEMINI_API_KEY", "API_KEY"], |_| None).unwrap_err();
    assert!(err.to_string().contains("GEMINI_API_KEY or API_KEY"));
}
