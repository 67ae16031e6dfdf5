//! Background fetching of search results.
//!
//! This module implements the fetch controller: an HTTP client for the search
//! API and a worker that runs each request on its own task so the application
//! loop never blocks on the network.
//!
//! # Architecture
//!
//! - `client`: [`HnClient`] and the pure [`parse_search_response`]
//! - `handler`: [`FetchWorker`], which spawns requests and posts responses
//! - `messages`: Request/response types and the [`FetchOutcome`] sum type

pub mod client;
pub mod handler;
pub mod messages;

pub use client::{parse_search_response, HnClient, SearchResponse};
pub use handler::FetchWorker;
pub use messages::{FetchError, FetchOutcome, FetchRequest, FetchResponse};
