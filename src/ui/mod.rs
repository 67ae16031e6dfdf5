//! Terminal presentation layer with component-based rendering.
//!
//! Transforms application state into plain-text screens and turns typed
//! command lines into application events.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → text
//! stdin line → parse_command → Vec<Event>
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Character-aware truncation and padding
//! - [`input`]: Command line parsing

pub mod components;
pub mod helpers;
pub mod input;
pub mod renderer;
pub mod viewmodel;

pub use input::parse_command;
pub use renderer::render;
pub use viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, SortInfo, StatusLine, UIViewModel,
};
