//! Actions representing side effects to be executed by the application loop.
//!
//! The event handler never performs I/O itself. It returns a `Vec<Action>`
//! after processing each event and the loop in `main.rs` executes them in
//! order: spawning fetches on the worker, writing the search preference, or
//! shutting down.
//!
//! # Example
//!
//! ```rust
//! use hnsearch::app::Action;
//! use hnsearch::worker::FetchRequest;
//!
//! let actions = vec![
//!     Action::PersistSearchTerm("redux".to_string()),
//!     Action::Fetch(FetchRequest { request_id: 1, url: "https://example.test/?q=redux".into() }),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::worker::FetchRequest;

/// Commands representing side effects to be executed by the application loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hands a request to the fetch worker.
    ///
    /// The response comes back later as [`Event::FetchCompleted`](super::Event::FetchCompleted).
    Fetch(FetchRequest),

    /// Writes the current input text to the preference store.
    PersistSearchTerm(String),

    /// Stops the application loop.
    Quit,
}
