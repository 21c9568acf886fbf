//! Search state for a front end.
//!
//! A search moves `Idle -> Searching -> Result | Error`, and any finished
//! state moves back to `Searching` on the next submission. Every submission
//! gets a sequence number; a completion carrying anything but the latest
//! number is dropped, so the last search issued is the one displayed.

use cineregional_analysis::MovieAnalyzer;
use cineregional_core::MovieAnalysis;
use cineregional_error::AnalysisError;
use cineregional_interface::GroundedDriver;
use tracing::{debug, instrument};

/// What a front end should show.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    /// Nothing searched yet
    #[default]
    Idle,
    /// A search is in flight
    Searching {
        /// Sequence number of the search
        seq: u64,
        /// Trimmed query
        query: String,
    },
    /// The latest search succeeded
    Result(MovieAnalysis),
    /// The latest search failed, with a message for the user
    Error(String),
}

/// Proof of a submission, handed back on completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: String,
}

impl SearchTicket {
    /// Sequence number of this submission.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Trimmed query submitted.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Tracks the latest search and guards against stale completions.
///
/// # Examples
///
/// ```
/// use cineregional::{SearchController, SearchState};
///
/// let mut controller = SearchController::new();
/// assert!(controller.begin("   ").is_none());
///
/// let first = controller.begin("Arrival").unwrap();
/// let second = controller.begin("Dune").unwrap();
/// assert!(controller.is_searching());
///
/// assert!(controller.complete(&second, Err("boom".to_string())));
/// assert!(!controller.complete(&first, Err("late".to_string())));
/// assert_eq!(controller.state(), &SearchState::Error("boom".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct SearchController {
    state: SearchState,
    issued: u64,
}

impl SearchController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Whether a search is in flight. Front ends disable their trigger
    /// while this is true.
    pub fn is_searching(&self) -> bool {
        matches!(self.state, SearchState::Searching { .. })
    }

    /// Start a search. Blank queries are ignored and leave the state as is.
    pub fn begin(&mut self, query: &str) -> Option<SearchTicket> {
        let query = query.trim();
        if query.is_empty() {
            debug!("Ignoring blank query");
            return None;
        }
        self.issued += 1;
        let ticket = SearchTicket {
            seq: self.issued,
            query: query.to_string(),
        };
        self.state = SearchState::Searching {
            seq: ticket.seq,
            query: ticket.query.clone(),
        };
        debug!(seq = ticket.seq, query = %ticket.query, "Search started");
        Some(ticket)
    }

    /// Record the outcome of a search.
    ///
    /// Returns `false` and leaves the state untouched when a newer search
    /// has been started since `ticket` was issued.
    pub fn complete(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<MovieAnalysis, String>,
    ) -> bool {
        if ticket.seq != self.issued {
            debug!(
                seq = ticket.seq,
                latest = self.issued,
                "Discarding stale completion"
            );
            return false;
        }
        self.state = match outcome {
            Ok(analysis) => SearchState::Result(analysis),
            Err(message) => SearchState::Error(message),
        };
        true
    }

    /// Run one search to completion through `analyzer`.
    ///
    /// Blank queries return `None` without calling upstream. Otherwise the
    /// state afterwards holds the result or the user-facing error message.
    #[instrument(skip(self, analyzer))]
    pub async fn submit<D: GroundedDriver>(
        &mut self,
        analyzer: &MovieAnalyzer<D>,
        query: &str,
    ) -> Option<&SearchState> {
        let ticket = self.begin(query)?;
        let outcome = analyzer
            .analyze(ticket.query())
            .await
            .map_err(|e: AnalysisError| e.user_message());
        self.complete(&ticket, outcome);
        Some(&self.state)
    }
}
