//! View model types representing renderable UI state.
//!
//! View models are computed from application state via
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold no
//! business logic, only display-ready data: the sort projection is already
//! applied and ages are already formatted.

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    pub search_bar: SearchBarInfo,

    /// Loading or error indicator, if any.
    pub status: Option<StatusLine>,

    pub sort: SortInfo,

    /// Stories in display order.
    pub display_items: Vec<DisplayItem>,

    /// Shown in place of the table when there is nothing to list.
    pub empty_state: Option<EmptyState>,

    /// Help text lines; empty when help is hidden.
    pub help: Vec<String>,

    pub footer: FooterInfo,
}

/// One row of the story table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// One-based row number, used by `dismiss <row>`.
    pub row: usize,
    pub object_id: String,
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u32,
    pub points: i64,
    /// Relative age such as `"3h ago"`, or empty when unknown.
    pub age: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub story_count: usize,
    pub total_comments: u64,
}

/// The text currently in the search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    Loading,
    Error,
}

impl StatusLine {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Loading => "Loading ...",
            Self::Error => "Something went wrong ...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortInfo {
    /// Label of the active column.
    pub key: &'static str,
    pub reversed: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command summary (e.g., "search <text> | quit").
    pub commands: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No stories").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
