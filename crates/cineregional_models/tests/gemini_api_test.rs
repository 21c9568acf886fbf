#![cfg(all(feature = "gemini", feature = "api"))]

//! Live API checks. Run with `--features api` and GEMINI_API_KEY set.

use cineregional_core::GroundedRequest;
use cineregional_interface::GroundedDriver;
use cineregional_models::GeminiClient;

#[tokio::test]
async fn test_grounded_answer_reports_sources() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let client = GeminiClient::new()?;

    let request = GroundedRequest::builder()
        .prompt("What is the worldwide box office of the movie Dune: Part Two? Cite sources.")
        .build()?;
    let response = client.generate(&request).await?;

    assert!(!response.text().is_empty());
    assert!(!response.citations().is_empty());
    Ok(())
}
