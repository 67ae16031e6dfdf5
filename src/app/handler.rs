//! Event handling and state transition logic.
//!
//! [`handle_event`] is the application's control flow coordinator. It receives
//! user intents from the command line and fetch completions from the worker,
//! mutates [`AppState`], and returns the side effects to run.
//!
//! # Architecture
//!
//! 1. Events arrive from the input parser or the fetch worker channel
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Example
//!
//! ```rust
//! use hnsearch::app::{handle_event, Action, AppState, Event, QueryController};
//!
//! let mut state = AppState::new(QueryController::new("https://example.test/?q=", "react", false));
//! let (should_render, actions) = handle_event(&mut state, &Event::Mounted);
//!
//! assert!(should_render);
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! ```

use super::results::ResultAction;
use super::sort::SortKey;
use crate::app::{Action, AppState};
use crate::worker::{FetchOutcome, FetchResponse};

/// Events triggered by user input or fetch completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The application started. Issues the initial fetch for the stored term.
    Mounted,

    /// The input text changed. Never fetches.
    InputChanged(String),

    /// The user submitted the pending text.
    Submitted,

    /// The user dismissed the story with this `objectID`.
    ItemDismissed(String),

    /// The user clicked a sort column.
    SortRequested(SortKey),

    /// Shows or hides the command help.
    HelpToggled,

    /// A fetch task settled.
    FetchCompleted(FetchResponse),

    /// The user asked to exit.
    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The returned flag is `true` when the state changed in a way that should be
/// rendered.
///
/// Completions for anything other than the latest request are dropped without
/// touching state, so an older, slower response can never overwrite the
/// results of a newer submission.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::Mounted => {
            let request = state.begin_fetch();
            tracing::debug!(request_id = request.request_id, url = %request.url, "initial fetch");
            (true, vec![Action::Fetch(request)])
        }
        Event::InputChanged(text) => {
            state.query.on_input_change(text.clone());
            (true, vec![Action::PersistSearchTerm(text.clone())])
        }
        Event::Submitted => {
            state.query.on_submit();
            let request = state.begin_fetch();
            tracing::debug!(request_id = request.request_id, url = %request.url, "search submitted");
            (true, vec![Action::Fetch(request)])
        }
        Event::ItemDismissed(object_id) => {
            state.dispatch(ResultAction::RemoveItem(object_id.clone()));
            (true, vec![])
        }
        Event::SortRequested(key) => {
            state.sort.select(*key);
            (true, vec![])
        }
        Event::HelpToggled => {
            state.show_help = !state.show_help;
            (true, vec![])
        }
        Event::FetchCompleted(response) => handle_fetch_completed(state, response),
        Event::Quit => (false, vec![Action::Quit]),
    }
}

fn handle_fetch_completed(state: &mut AppState, response: &FetchResponse) -> (bool, Vec<Action>) {
    if !state.complete_fetch(response.request_id) {
        tracing::debug!(
            request_id = response.request_id,
            url = %response.url,
            "discarding stale fetch response"
        );
        return (false, vec![]);
    }

    match &response.outcome {
        FetchOutcome::Success(stories) => {
            tracing::debug!(request_id = response.request_id, hit_count = stories.len(), "fetch applied");
            state.dispatch(ResultAction::FetchSuccess(stories.clone()));
        }
        FetchOutcome::Failure(e) => {
            tracing::error!(request_id = response.request_id, url = %response.url, error = %e, "search request failed");
            state.dispatch(ResultAction::FetchFailure);
        }
    }
    (true, vec![])
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Mounted => "Mounted",
        Event::InputChanged(_) => "InputChanged",
        Event::Submitted => "Submitted",
        Event::ItemDismissed(_) => "ItemDismissed",
        Event::SortRequested(_) => "SortRequested",
        Event::HelpToggled => "HelpToggled",
        Event::FetchCompleted(_) => "FetchCompleted",
        Event::Quit => "Quit",
    }
}
