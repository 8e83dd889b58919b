//! Ratatui front end for the recipe browser
//!
//! ```text
//! ┌ Search (/) ──────────────────────┐┌ Method ───────────────────────┐
//! │ › Instant Pot Paneer             ││ 1 ● Instant Pot  2 ○ Air Fryer│
//! └──────────────────────────────────┘└───────────────────────────────┘
//! ┌ Categories ─┐┌ Dishes ─────────────────────────────────────────────┐
//! │ ● Vegetarian││ ( Paneer ) ( Dal (Lentils) ) ( Sabzi (Dry Veg) ) … │
//! │   Snacks    │└─────────────────────────────────────────────────────┘
//! │   …         │┌ Results (12) ───────────────────────────────────────┐
//! │             ││ ┌ card ┐ ┌ card ┐ ┌ card ┐                           │
//! └─────────────┘└─────────────────────────────────────────────────────┘
//! ```
//!
//! [`BrowseApp`] drives the loop, [`handle_key`] maps keys to coordinator
//! operations; the widgets only paint a [`BrowseView`](crate::browse::BrowseView).

mod app;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::BrowseApp;
pub use events::{EventResult, handle_key};
pub use state::{AppState, Focus, Mode};
pub use theme::Theme;
