//! Faceted browsing core
//!
//! - [`SelectionState`] - the active method, category and subcategory
//! - [`Coordinator`] - owns the selection, derives queries, issues searches
//!   and applies their outcomes
//! - [`dispatch`] - runs provider calls inline or on worker threads
//! - [`BrowseView`] - pure description of what the display surface shows
//! - [`Player`] - the video-embed overlay
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use khana::browse::{BrowseView, Coordinator, InlineDispatcher, SelectionState};
//! use khana::search::{SearchProvider, SearchResult, VideoItem};
//!
//! struct Canned;
//! impl SearchProvider for Canned {
//!     fn search(&self, query: &str) -> SearchResult {
//!         Ok(vec![VideoItem::new("id", query, "Chef")])
//!     }
//! }
//!
//! let mut coordinator = Coordinator::new(
//!     SelectionState::default(),
//!     InlineDispatcher::new(Arc::new(Canned)),
//! );
//! coordinator.select_category("dessert");
//! coordinator.poll();
//!
//! let view = BrowseView::render(&coordinator);
//! assert_eq!(view.query, "Instant Pot Gulab Jamun Halwa");
//! assert_eq!(view.results.cards().len(), 1);
//! ```

mod coordinator;
pub mod dispatch;
mod player;
mod state;
mod view;

pub use coordinator::{Coordinator, SearchStatus};
pub use dispatch::{InlineDispatcher, SearchDispatcher, SearchOutcome, SearchRequest, ThreadDispatcher};
pub use player::Player;
pub use state::SelectionState;
pub use view::{BrowseView, EMPTY_MESSAGE, FacetOption, ResultsPanel, UNCONFIGURED_MESSAGE};
