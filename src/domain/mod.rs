//! Domain layer for hnsearch.
//!
//! This module contains the core domain types, independent of HTTP, storage, or
//! terminal concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`story`]: The story record returned by the search API
//!
//! # Examples
//!
//! ```
//! use hnsearch::domain::{Result, StoryItem};
//!
//! fn first_story() -> Result<StoryItem> {
//!     Ok(StoryItem::new("1", "Redux"))
//! }
//! ```

pub mod error;
pub mod story;

pub use error::{HnSearchError, Result};
pub use story::StoryItem;
