//! Message types exchanged between the application loop and fetch tasks.
//!
//! Every request carries a `request_id` issued by the application state. The
//! matching response echoes it back so that completions for superseded
//! submissions can be recognised and discarded.

use crate::domain::StoryItem;
use thiserror::Error;

/// A single fetch to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Monotonic tag assigned when the fetch was issued.
    pub request_id: u64,

    /// Committed URL the fetch was issued for.
    pub url: String,
}

/// The terminal result of one fetch, tagged with its originating request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub request_id: u64,
    pub url: String,
    pub outcome: FetchOutcome,
}

impl FetchResponse {
    #[must_use]
    pub fn new(request: FetchRequest, outcome: FetchOutcome) -> Self {
        Self {
            request_id: request.request_id,
            url: request.url,
            outcome,
        }
    }
}

/// Exactly one of success or failure for a fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response parsed as a search envelope.
    Success(Vec<StoryItem>),

    /// The request failed at the network, HTTP, or parse level.
    Failure(FetchError),
}

/// Reasons a fetch can fail.
///
/// All variants collapse into the same user-visible error flag; the
/// distinction only shows up in logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request could not be sent, or it timed out.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status code.
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// The body was not a well-formed search envelope.
    #[error("malformed response: {0}")]
    Parse(String),
}
