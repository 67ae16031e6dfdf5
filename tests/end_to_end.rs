//! Drives the application handler through full search sessions, with fetch
//! completions fed in the way the worker channel would deliver them.

use hnsearch::app::{handle_event, Action, AppState, Event};
use hnsearch::storage::{JsonPreferenceStore, SemiPersistentValue};
use hnsearch::worker::{parse_search_response, FetchError, FetchOutcome, FetchRequest, FetchResponse};
use hnsearch::{initialize, Config, StoryItem};

fn submit(state: &mut AppState, text: &str) -> FetchRequest {
    handle_event(state, &Event::InputChanged(text.to_string()));
    let (_, actions) = handle_event(state, &Event::Submitted);
    match actions.as_slice() {
        [Action::Fetch(request)] => request.clone(),
        other => panic!("expected one fetch, got {other:?}"),
    }
}

fn complete(state: &mut AppState, request: FetchRequest, outcome: FetchOutcome) -> bool {
    let (render, _) = handle_event(state, &Event::FetchCompleted(FetchResponse::new(request, outcome)));
    render
}

fn redux_story() -> StoryItem {
    StoryItem {
        author: "Dan".to_string(),
        num_comments: 5,
        points: 10,
        ..StoryItem::new("1", "Redux")
    }
}

#[test]
fn submit_success_then_dismiss() {
    let mut state = initialize(&Config::default(), "");

    let request = submit(&mut state, "redux");
    assert_eq!(request.url, "https://hn.algolia.com/api/v1/search?query=redux");
    assert!(state.results.is_loading);

    assert!(complete(&mut state, request, FetchOutcome::Success(vec![redux_story()])));
    assert!(!state.results.is_loading);
    assert!(!state.results.is_error);
    assert_eq!(state.results.items, vec![redux_story()]);

    handle_event(&mut state, &Event::ItemDismissed("1".to_string()));
    assert!(state.results.items.is_empty());
}

#[test]
fn failure_keeps_previous_items() {
    let mut state = initialize(&Config::default(), "");
    let first = submit(&mut state, "redux");
    complete(&mut state, first, FetchOutcome::Success(vec![redux_story()]));
    let before = state.results.items.clone();

    let second = submit(&mut state, "x");
    complete(
        &mut state,
        second,
        FetchOutcome::Failure(FetchError::Network("network down".to_string())),
    );

    assert!(!state.results.is_loading);
    assert!(state.results.is_error);
    assert_eq!(state.results.items, before);
}

#[test]
fn slow_older_response_cannot_overwrite_newer_results() {
    let mut state = initialize(&Config::default(), "");
    let slow = submit(&mut state, "react");
    let fast = submit(&mut state, "redux");

    complete(&mut state, fast, FetchOutcome::Success(vec![redux_story()]));
    let settled = state.results.clone();

    let rendered = complete(
        &mut state,
        slow,
        FetchOutcome::Success(vec![StoryItem::new("2", "React")]),
    );

    assert!(!rendered);
    assert_eq!(state.results, settled);
}

#[test]
fn parsed_api_body_flows_into_store() {
    let body = r#"{"hits":[{"objectID":"1","title":"Redux","url":null,"author":"Dan","num_comments":5,"points":10}]}"#;
    let outcome = match parse_search_response(200, body) {
        Ok(stories) => FetchOutcome::Success(stories),
        Err(e) => FetchOutcome::Failure(e),
    };

    let mut state = initialize(&Config::default(), "");
    let request = submit(&mut state, "redux");
    complete(&mut state, request, outcome);

    assert_eq!(state.results.items, vec![redux_story()]);
}

#[test]
fn search_term_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        data_dir: Some(dir.path().to_string_lossy().into_owned()),
        ..Default::default()
    };

    {
        let store = JsonPreferenceStore::new(config.preferences_path()).unwrap();
        let mut term = SemiPersistentValue::new(Box::new(store), config.preference_key.clone());
        let mut state = initialize(&config, term.get());

        let (_, actions) = handle_event(&mut state, &Event::InputChanged("redux".to_string()));
        for action in actions {
            if let Action::PersistSearchTerm(text) = action {
                term.set(&text);
            }
        }
    }

    let store = JsonPreferenceStore::new(config.preferences_path()).unwrap();
    let term = SemiPersistentValue::new(Box::new(store), config.preference_key.clone());
    let mut state = initialize(&config, term.get());

    let (_, actions) = handle_event(&mut state, &Event::Mounted);
    assert!(matches!(
        actions.as_slice(),
        [Action::Fetch(request)] if request.url.ends_with("query=redux")
    ));
}
