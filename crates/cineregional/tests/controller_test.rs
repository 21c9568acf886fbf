// Search controller state machine tests.

mod test_utils;

use cineregional::{
    GeminiErrorKind, MovieAnalysis, MovieAnalyzer, SearchController, SearchState,
    UPSTREAM_FAILURE_MESSAGE,
};
use test_utils::{MockGroundedDriver, SHORT_ANSWER};

fn analysis(title: &str) -> MovieAnalysis {
    MovieAnalysis::builder()
        .title(title)
        .summary("ok")
        .build()
        .unwrap()
}

#[test]
fn test_starts_idle() {
    let controller = SearchController::new();
    assert_eq!(controller.state(), &SearchState::Idle);
    assert!(!controller.is_searching());
}

#[test]
fn test_blank_query_ignored() {
    let mut controller = SearchController::new();
    assert!(controller.begin("").is_none());
    assert!(controller.begin(" \t\n").is_none());
    assert_eq!(controller.state(), &SearchState::Idle);
}

#[test]
fn test_blank_query_keeps_previous_result() {
    let mut controller = SearchController::new();
    let ticket = controller.begin("Arrival").unwrap();
    assert!(controller.complete(&ticket, Ok(analysis("Arrival"))));

    assert!(controller.begin("   ").is_none());
    assert_eq!(controller.state(), &SearchState::Result(analysis("Arrival")));
}

#[test]
fn test_transitions_through_searching() {
    let mut controller = SearchController::new();

    let ticket = controller.begin("  Arrival ").unwrap();
    assert_eq!(ticket.query(), "Arrival");
    assert!(controller.is_searching());
    assert_eq!(
        controller.state(),
        &SearchState::Searching {
            seq: ticket.seq(),
            query: "Arrival".to_string(),
        }
    );

    assert!(controller.complete(&ticket, Err("nope".to_string())));
    assert!(!controller.is_searching());
    assert_eq!(controller.state(), &SearchState::Error("nope".to_string()));

    // Error -> Searching -> Result
    let retry = controller.begin("Arrival").unwrap();
    assert!(retry.seq() > ticket.seq());
    assert!(controller.is_searching());
    assert!(controller.complete(&retry, Ok(analysis("Arrival"))));
    assert_eq!(controller.state(), &SearchState::Result(analysis("Arrival")));
}

#[test]
fn test_last_request_issued_wins() {
    let mut controller = SearchController::new();
    let first = controller.begin("Arrival").unwrap();
    let second = controller.begin("Dune").unwrap();

    // The older search finishes first and is discarded.
    assert!(!controller.complete(&first, Ok(analysis("Arrival"))));
    assert!(controller.is_searching());

    assert!(controller.complete(&second, Ok(analysis("Dune"))));
    assert_eq!(controller.state(), &SearchState::Result(analysis("Dune")));
}

#[test]
fn test_stale_completion_after_newer_result_is_discarded() {
    let mut controller = SearchController::new();
    let first = controller.begin("Arrival").unwrap();
    let second = controller.begin("Dune").unwrap();

    assert!(controller.complete(&second, Ok(analysis("Dune"))));
    assert!(!controller.complete(&first, Err("late failure".to_string())));
    assert_eq!(controller.state(), &SearchState::Result(analysis("Dune")));
}

#[tokio::test]
async fn test_submit_success() -> anyhow::Result<()> {
    let analyzer = MovieAnalyzer::new(MockGroundedDriver::new_success(SHORT_ANSWER));
    let mut controller = SearchController::new();

    let state = controller
        .submit(&analyzer, "Sinners")
        .await
        .ok_or_else(|| anyhow::anyhow!("query was ignored"))?;

    match state {
        SearchState::Result(analysis) => {
            assert_eq!(analysis.title(), "Sinners");
            assert_eq!(analysis.summary(), "Playing well.");
            assert_eq!(analysis.regional_breakdown().len(), 1);
        }
        other => anyhow::bail!("unexpected state: {:?}", other),
    }
    assert_eq!(analyzer.driver().call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_submit_failure_stores_user_message() {
    let analyzer = MovieAnalyzer::new(MockGroundedDriver::new_error(
        GeminiErrorKind::HttpError {
            status_code: 403,
            message: "PERMISSION_DENIED".to_string(),
        },
    ));
    let mut controller = SearchController::new();

    let state = controller.submit(&analyzer, "Sinners").await.cloned();

    assert_eq!(
        state,
        Some(SearchState::Error(UPSTREAM_FAILURE_MESSAGE.to_string()))
    );
    assert!(!controller.is_searching());
}

#[tokio::test]
async fn test_submit_blank_makes_no_call() {
    let analyzer = MovieAnalyzer::new(MockGroundedDriver::new_success(SHORT_ANSWER));
    let mut controller = SearchController::new();

    assert!(controller.submit(&analyzer, "  ").await.is_none());
    assert_eq!(analyzer.driver().call_count(), 0);
    assert_eq!(controller.state(), &SearchState::Idle);
}
