//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the terminal loop (`main.rs`) and the
//! domain/storage/worker layers. Nothing in here performs I/O; side effects
//! leave as [`Action`]s.
//!
//! # Architecture
//!
//! ```text
//! Command line → Events → Event Handler → State Mutations → Actions → Side Effects
//!                             ↑                                  ↓
//!                             └───────── Fetch Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and fetch-staleness checks
//! - [`state`]: Central application state container and view model computation
//! - [`results`]: Result store reducer
//! - [`sort`]: Sort projection and column-click transitions
//! - [`query`]: Pending text versus committed URL

pub mod actions;
pub mod handler;
pub mod query;
pub mod results;
pub mod sort;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use query::QueryController;
pub use results::{reduce, ResultAction, ResultState};
pub use sort::{SortKey, SortState};
pub use state::AppState;
