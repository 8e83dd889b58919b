//! Terminal user interface
//!
//! The browser's display surface. Rendering is driven entirely by
//! [`BrowseView`](crate::browse::BrowseView); this module owns only
//! presentation state (focus, cursors, overlays) and the terminal itself.

mod error;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use ratatui_adapter::{BrowseApp, Theme};
