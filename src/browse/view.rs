//! Pure view model for the display surface
//!
//! [`BrowseView::render`] turns the coordinator's state into a description of
//! what should be on screen. The TUI paints that description; tests assert on
//! it directly.

use super::coordinator::{Coordinator, SearchStatus};
use crate::facets;
use crate::search::VideoItem;

/// Shown for a successful search with no items
pub const EMPTY_MESSAGE: &str = "No recipes found.";

/// Shown when no API key is configured
pub const UNCONFIGURED_MESSAGE: &str = "Configuration Error: API key missing.";

/// One selectable facet control (toggle, sidebar entry or pill)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetOption {
    /// Value passed back to the coordinator when selected (id or term)
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Contents of the results area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsPanel<'a> {
    /// Before the first search
    Idle,
    /// Loading indicator for `query`
    Loading { query: &'a str },
    /// Result cards
    Cards(&'a [VideoItem]),
    /// A one-line message instead of cards
    Message { text: String, is_error: bool },
}

impl ResultsPanel<'_> {
    /// Cards shown, empty for every non-card state
    #[must_use]
    pub fn cards(&self) -> &[VideoItem] {
        match self {
            Self::Cards(items) => items,
            _ => &[],
        }
    }
}

/// Everything the display surface needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseView<'a> {
    /// Text for the search input; reflects the last issued query
    pub query: &'a str,
    pub methods: Vec<FacetOption>,
    pub categories: Vec<FacetOption>,
    /// Pills for the active category; empty for the "no filter" category
    pub subcategories: Vec<FacetOption>,
    pub results: ResultsPanel<'a>,
}

impl<'a> BrowseView<'a> {
    /// Describe the current coordinator state
    #[must_use]
    pub fn render(coordinator: &'a Coordinator) -> Self {
        let state = coordinator.state();

        let methods = facets::methods()
            .iter()
            .map(|method| FacetOption {
                key: method.id,
                label: method.label,
                active: method.id == state.method_id(),
            })
            .collect();

        let categories = facets::categories()
            .iter()
            .map(|category| FacetOption {
                key: category.id,
                label: category.label,
                active: category.id == state.category_id(),
            })
            .collect();

        let subcategories = state
            .category()
            .map(|category| {
                category
                    .subcategories
                    .iter()
                    .map(|sub| FacetOption {
                        key: sub.term,
                        label: sub.name,
                        active: sub.term == state.subcategory_term(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            query: coordinator.current_query(),
            methods,
            categories,
            subcategories,
            results: results_panel(coordinator.status()),
        }
    }
}

fn results_panel(status: &SearchStatus) -> ResultsPanel<'_> {
    match status {
        SearchStatus::Idle => ResultsPanel::Idle,
        SearchStatus::Loading { query } => ResultsPanel::Loading {
            query: query.as_str(),
        },
        SearchStatus::Loaded { items, .. } if items.is_empty() => ResultsPanel::Message {
            text: EMPTY_MESSAGE.to_string(),
            is_error: false,
        },
        SearchStatus::Loaded { items, .. } => ResultsPanel::Cards(items.as_slice()),
        SearchStatus::Failed { message, .. } => ResultsPanel::Message {
            text: format!("Error: {message}"),
            is_error: true,
        },
        SearchStatus::Unconfigured => ResultsPanel::Message {
            text: UNCONFIGURED_MESSAGE.to_string(),
            is_error: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::dispatch::InlineDispatcher;
    use crate::browse::state::SelectionState;
    use crate::search::SearchError;
    use crate::search::mock::MockProvider;
    use std::sync::Arc;

    fn coordinator() -> (Coordinator, Arc<MockProvider>) {
        let provider = Arc::new(MockProvider::new());
        let coordinator = Coordinator::new(
            SelectionState::default(),
            InlineDispatcher::new(provider.clone()),
        );
        (coordinator, provider)
    }

    fn active_keys(options: &[FacetOption]) -> Vec<&'static str> {
        options.iter().filter(|o| o.active).map(|o| o.key).collect()
    }

    #[test]
    fn test_default_highlights() {
        let (coordinator, _) = coordinator();
        let view = BrowseView::render(&coordinator);

        assert_eq!(view.methods.len(), 3);
        assert_eq!(view.categories.len(), 5);
        assert_eq!(view.subcategories.len(), 6);
        assert_eq!(active_keys(&view.methods), vec!["instantpot"]);
        assert_eq!(active_keys(&view.categories), vec!["veg"]);
        assert_eq!(active_keys(&view.subcategories), vec!["Paneer"]);
        assert_eq!(view.results, ResultsPanel::Idle);
    }

    #[test]
    fn test_all_category_has_no_pills() {
        let (mut coordinator, _) = coordinator();
        coordinator.select_category("all");
        let view = BrowseView::render(&coordinator);
        assert!(view.subcategories.is_empty());
        assert_eq!(view.query, "Instant Pot");
    }

    #[test]
    fn test_loading_panel() {
        let (mut coordinator, _) = coordinator();
        coordinator.select_method("airfryer");
        let view = BrowseView::render(&coordinator);
        assert_eq!(
            view.results,
            ResultsPanel::Loading {
                query: "Air Fryer Paneer"
            }
        );
    }

    #[test]
    fn test_empty_results_show_message() {
        let (mut coordinator, provider) = coordinator();
        provider.push_items(Vec::new());
        coordinator.refresh();
        coordinator.poll();

        let view = BrowseView::render(&coordinator);
        assert_eq!(
            view.results,
            ResultsPanel::Message {
                text: EMPTY_MESSAGE.to_string(),
                is_error: false
            }
        );
        assert!(view.results.cards().is_empty());
    }

    #[test]
    fn test_error_then_loading_then_cards() {
        let (mut coordinator, provider) = coordinator();
        provider.push_error(SearchError::Http("connection refused".into()));
        coordinator.refresh();
        coordinator.poll();

        let view = BrowseView::render(&coordinator);
        assert_eq!(
            view.results,
            ResultsPanel::Message {
                text: "Error: request failed: connection refused".to_string(),
                is_error: true
            }
        );

        coordinator.select_category("nonveg");
        assert!(matches!(
            BrowseView::render(&coordinator).results,
            ResultsPanel::Loading { .. }
        ));

        coordinator.poll();
        let view = BrowseView::render(&coordinator);
        assert_eq!(view.results.cards().len(), 1);
        assert_eq!(view.results.cards()[0].title, "Instant Pot Chicken Curry");
    }

    #[test]
    fn test_unconfigured_message() {
        let (mut coordinator, provider) = coordinator();
        provider.push_error(SearchError::MissingApiKey);
        coordinator.refresh();
        coordinator.poll();
        assert_eq!(
            BrowseView::render(&coordinator).results,
            ResultsPanel::Message {
                text: UNCONFIGURED_MESSAGE.to_string(),
                is_error: true
            }
        );
    }

    #[test]
    fn test_query_reflects_free_text() {
        let (mut coordinator, _) = coordinator();
        coordinator.submit_free_text("chole bhature");
        let view = BrowseView::render(&coordinator);
        assert_eq!(view.query, "chole bhature");
        assert_eq!(active_keys(&view.subcategories), vec!["Paneer"]);
    }
}
