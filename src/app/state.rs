//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the running client. It owns
//! the three independent pieces of state the handler coordinates:
//!
//! - **Results**: fetched stories plus loading and error flags, changed only
//!   through [`reduce`](super::results::reduce)
//! - **Query**: pending input text and the committed search URL
//! - **Sort**: active column and direction, applied as a projection at render
//!   time
//!
//! It also tracks which fetch is authoritative. Every request gets a fresh,
//! monotonically increasing id; only the completion matching the latest id is
//! allowed to reach the result store.
//!
//! # Example
//!
//! ```rust
//! use hnsearch::app::{AppState, QueryController};
//!
//! let query = QueryController::new("https://hn.algolia.com/api/v1/search?query=", "react", false);
//! let mut state = AppState::new(query);
//!
//! let request = state.begin_fetch();
//! assert!(state.results.is_loading);
//! assert!(state.is_current(request.request_id));
//! ```

use super::query::QueryController;
use super::results::{reduce, ResultAction, ResultState};
use super::sort::{project, total_comments, SortState};
use crate::domain::StoryItem;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, SortInfo, StatusLine, UIViewModel,
};
use crate::worker::FetchRequest;

/// Command summary shown in the footer.
const FOOTER_HINT: &str = "search <text> | sort <key> | dismiss <row> | help | quit";

/// Lines shown when help is toggled on.
const HELP_LINES: [&str; 7] = [
    "search <text>    set the query and run it",
    "input <text>     set the query without running it",
    "submit           run the current query",
    "dismiss <row>    hide a story by row number or objectID",
    "sort <key>       none, title, author, comments, points (repeat to reverse)",
    "help             toggle this help",
    "quit             exit",
];

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Fetched stories and request flags.
    pub results: ResultState,

    /// Pending input and committed search URL.
    pub query: QueryController,

    /// Active sort column and direction.
    pub sort: SortState,

    /// Whether the help panel is expanded.
    pub show_help: bool,

    /// Id of the only request whose completion is still accepted.
    in_flight: Option<u64>,

    next_request_id: u64,
}

impl AppState {
    #[must_use]
    pub fn new(query: QueryController) -> Self {
        Self {
            results: ResultState::default(),
            query,
            sort: SortState::default(),
            show_help: false,
            in_flight: None,
            next_request_id: 1,
        }
    }

    /// Applies a result transition.
    pub fn dispatch(&mut self, action: ResultAction) {
        let kind = action.kind();
        self.results = reduce(std::mem::take(&mut self.results), action);
        tracing::debug!(
            action = kind,
            item_count = self.results.items.len(),
            is_loading = self.results.is_loading,
            is_error = self.results.is_error,
            "result state updated"
        );
    }

    /// Starts a fetch of the committed URL.
    ///
    /// Marks the store as loading and makes the returned request the only one
    /// whose completion will be accepted. Any earlier request still running
    /// becomes stale.
    pub fn begin_fetch(&mut self) -> FetchRequest {
        let request_id = self.next_request_id;
        self.next_request_id += 1;

        if let Some(superseded) = self.in_flight.replace(request_id) {
            tracing::debug!(superseded, request_id, "superseding in-flight fetch");
        }

        self.dispatch(ResultAction::FetchInit);

        FetchRequest {
            request_id,
            url: self.query.committed_url().to_string(),
        }
    }

    /// Returns `true` if `request_id` is the latest request issued.
    #[must_use]
    pub fn is_current(&self, request_id: u64) -> bool {
        self.in_flight == Some(request_id)
    }

    /// Id of the request still awaiting its completion, if any.
    #[must_use]
    pub const fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    /// Claims the completion for `request_id`.
    ///
    /// Returns `false` for a stale or unknown id, leaving state untouched. On
    /// `true` the caller is expected to dispatch the outcome.
    pub fn complete_fetch(&mut self, request_id: u64) -> bool {
        if self.is_current(request_id) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Stories in display order.
    #[must_use]
    pub fn visible_items(&self) -> Vec<StoryItem> {
        project(&self.results.items, self.sort)
    }

    /// Builds the renderable view of the current state.
    ///
    /// `now` is the current Unix time, used for the relative age column.
    #[must_use]
    pub fn compute_viewmodel(&self, now: i64) -> UIViewModel {
        let display_items: Vec<DisplayItem> = self
            .visible_items()
            .iter()
            .enumerate()
            .map(|(idx, story)| DisplayItem {
                row: idx + 1,
                object_id: story.object_id.clone(),
                title: story.title.clone(),
                url: story.url.clone(),
                author: story.author.clone(),
                num_comments: story.num_comments,
                points: story.points,
                age: story.age(now),
            })
            .collect();

        let status = if self.results.is_loading {
            Some(StatusLine::Loading)
        } else if self.results.is_error {
            Some(StatusLine::Error)
        } else {
            None
        };

        let empty_state = (display_items.is_empty() && !self.results.is_loading).then(|| self.compute_empty_state());

        UIViewModel {
            header: HeaderInfo {
                title: "Hacker News Stories".to_string(),
                story_count: self.results.items.len(),
                total_comments: total_comments(&self.results.items),
            },
            search_bar: SearchBarInfo {
                query: self.query.pending_text().to_string(),
            },
            status,
            sort: SortInfo {
                key: self.sort.key.label(),
                reversed: self.sort.reversed,
            },
            display_items,
            empty_state,
            help: if self.show_help {
                HELP_LINES.iter().map(ToString::to_string).collect()
            } else {
                Vec::new()
            },
            footer: FooterInfo {
                commands: FOOTER_HINT.to_string(),
            },
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.results.is_error {
            EmptyState {
                message: "No stories".to_string(),
                subtitle: "The last search failed. Try `submit` again.".to_string(),
            }
        } else {
            EmptyState {
                message: "No stories".to_string(),
                subtitle: "Try another query with `search <text>`.".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://hn.algolia.com/api/v1/search?query=";

    fn state(term: &str) -> AppState {
        AppState::new(QueryController::new(BASE, term, false))
    }

    fn story(id: &str, comments: u32, points: i64) -> StoryItem {
        StoryItem {
            num_comments: comments,
            points,
            ..StoryItem::new(id, format!("story {id}"))
        }
    }

    #[test]
    fn begin_fetch_targets_committed_url_and_sets_loading() {
        let mut state = state("react");
        state.query.on_input_change("redux");

        let request = state.begin_fetch();

        assert_eq!(request.url, format!("{BASE}react"));
        assert!(state.results.is_loading);
        assert!(!state.results.is_error);
    }

    #[test]
    fn request_ids_increase_and_only_latest_is_current() {
        let mut state = state("");
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(second.request_id > first.request_id);
        assert!(!state.is_current(first.request_id));
        assert!(state.is_current(second.request_id));

        assert!(!state.complete_fetch(first.request_id));
        assert!(state.complete_fetch(second.request_id));
        assert!(!state.complete_fetch(second.request_id));
    }

    #[test]
    fn viewmodel_reflects_sort_and_totals() {
        let mut state = state("react");
        state.dispatch(ResultAction::FetchSuccess(vec![story("a", 2, 3), story("b", 7, 9)]));
        state.sort.select(crate::app::SortKey::Point);

        let vm = state.compute_viewmodel(0);

        assert_eq!(vm.header.story_count, 2);
        assert_eq!(vm.header.total_comments, 9);
        assert_eq!(vm.search_bar.query, "react");
        assert_eq!(vm.sort.key, "points");
        assert_eq!(vm.display_items[0].object_id, "b");
        assert_eq!(vm.display_items[0].row, 1);
        assert!(vm.status.is_none());
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn stale_items_stay_visible_while_loading() {
        let mut state = state("react");
        state.dispatch(ResultAction::FetchSuccess(vec![story("a", 0, 0)]));
        let _ = state.begin_fetch();

        let vm = state.compute_viewmodel(0);

        assert_eq!(vm.status, Some(StatusLine::Loading));
        assert_eq!(vm.display_items.len(), 1);
    }

    #[test]
    fn empty_state_only_when_idle() {
        let mut state = state("");
        let _ = state.begin_fetch();
        assert!(state.compute_viewmodel(0).empty_state.is_none());

        state.dispatch(ResultAction::FetchFailure);
        let vm = state.compute_viewmodel(0);
        assert_eq!(vm.status, Some(StatusLine::Error));
        assert!(vm.empty_state.is_some());
    }

    #[test]
    fn help_lines_follow_toggle() {
        let mut state = state("");
        assert!(state.compute_viewmodel(0).help.is_empty());

        state.show_help = true;
        assert_eq!(state.compute_viewmodel(0).help.len(), HELP_LINES.len());
    }
}
