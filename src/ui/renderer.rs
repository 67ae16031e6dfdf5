//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component layout
//!
//! # Example
//!
//! ```rust
//! use hnsearch::app::{AppState, QueryController};
//! use hnsearch::ui::render;
//!
//! let state = AppState::new(QueryController::new("https://example.test/?q=", "react", false));
//! let mut out = Vec::new();
//! render(&state, &mut out, 0, 80).unwrap();
//!
//! assert!(String::from_utf8(out).unwrap().contains("Searching for react"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use std::io::{self, Write};

/// Renders the current state as plain text.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `out` - Output sink (stdout in the binary, a buffer in tests)
/// * `now` - Current Unix time, for story ages
/// * `cols` - Display width in columns
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render<W: Write>(state: &AppState, out: &mut W, now: i64, cols: usize) -> io::Result<()> {
    let viewmodel = state.compute_viewmodel(now);
    components::render_layout(out, &viewmodel, cols)?;
    out.flush()
}
