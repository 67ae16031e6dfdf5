//! Result store: the fetched stories plus loading and error flags.
//!
//! [`reduce`] is the only way to change a [`ResultState`]. It is a pure, total
//! function over the closed [`ResultAction`] enum, so an unrecognised action is
//! rejected at compile time rather than at runtime.
//!
//! # Transitions
//!
//! | Action          | `is_loading` | `is_error` | `items`                 |
//! |-----------------|--------------|------------|-------------------------|
//! | `FetchInit`     | `true`       | `false`    | unchanged               |
//! | `FetchSuccess`  | `false`      | `false`    | replaced with payload   |
//! | `FetchFailure`  | `false`      | `true`     | unchanged               |
//! | `RemoveItem`    | unchanged    | unchanged  | matching ids filtered   |
//!
//! Keeping `items` on `FetchInit` and `FetchFailure` leaves stale results on
//! screen during a reload and next to an error indicator.

use crate::domain::StoryItem;

/// Snapshot of the fetched results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultState {
    pub items: Vec<StoryItem>,
    pub is_loading: bool,
    pub is_error: bool,
}

/// Transitions accepted by [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultAction {
    /// A fetch was issued.
    FetchInit,
    /// A fetch settled with these stories.
    FetchSuccess(Vec<StoryItem>),
    /// A fetch settled with an error.
    FetchFailure,
    /// Remove every story with this identifier.
    RemoveItem(String),
}

impl ResultAction {
    /// Short name used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FetchInit => "STORIES_FETCH_INIT",
            Self::FetchSuccess(_) => "STORIES_FETCH_SUCCESS",
            Self::FetchFailure => "STORIES_FETCH_FAILURE",
            Self::RemoveItem(_) => "REMOVE_STORY",
        }
    }
}

/// Applies `action` to `state`, returning the next state.
///
/// # Examples
///
/// ```
/// use hnsearch::app::results::{reduce, ResultAction, ResultState};
/// use hnsearch::domain::StoryItem;
///
/// let state = reduce(ResultState::default(), ResultAction::FetchInit);
/// assert!(state.is_loading);
///
/// let state = reduce(state, ResultAction::FetchSuccess(vec![StoryItem::new("1", "Redux")]));
/// assert!(!state.is_loading);
/// assert_eq!(state.items.len(), 1);
///
/// let state = reduce(state, ResultAction::RemoveItem("1".into()));
/// assert!(state.items.is_empty());
/// ```
#[must_use]
pub fn reduce(state: ResultState, action: ResultAction) -> ResultState {
    tracing::trace!(action = action.kind(), "reducing result state");

    match action {
        ResultAction::FetchInit => ResultState {
            is_loading: true,
            is_error: false,
            ..state
        },
        ResultAction::FetchSuccess(items) => ResultState {
            items,
            is_loading: false,
            is_error: false,
        },
        ResultAction::FetchFailure => ResultState {
            is_loading: false,
            is_error: true,
            ..state
        },
        ResultAction::RemoveItem(object_id) => {
            let mut items = state.items;
            items.retain(|story| story.object_id != object_id);
            ResultState { items, ..state }
        }
    }
}
