//! Facet selection state

use crate::facets::{self, Category, Method};

/// The active facet selections plus the most recent free-text query
///
/// Invariant: `subcategory_term` belongs to the active category's list, or is
/// empty when that category has none. Only the coordinator mutates this, and
/// every mutation it performs keeps the invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub(crate) method_id: &'static str,
    pub(crate) category_id: &'static str,
    pub(crate) subcategory_term: String,
    pub(crate) free_text: Option<String>,
}

impl SelectionState {
    /// Selection for `method` and `category`, with the category's first subcategory
    #[must_use]
    pub fn new(method: &'static Method, category: &'static Category) -> Self {
        Self {
            method_id: method.id,
            category_id: category.id,
            subcategory_term: category.first_term().to_string(),
            free_text: None,
        }
    }

    /// Selection from ids, falling back to the defaults for ids that do not resolve
    #[must_use]
    pub fn from_ids(method_id: &str, category_id: &str) -> Self {
        let method = facets::find_method(method_id)
            .or_else(|| facets::find_method(facets::DEFAULT_METHOD_ID));
        let category = facets::find_category(category_id)
            .or_else(|| facets::find_category(facets::DEFAULT_CATEGORY_ID));

        match (method, category) {
            (Some(method), Some(category)) => Self::new(method, category),
            _ => Self::default(),
        }
    }

    /// Replace the subcategory term
    ///
    /// The caller is responsible for passing a term from the active category;
    /// use [`facets::Category::find_subcategory`] to resolve user input first.
    #[must_use]
    pub fn with_subcategory(mut self, term: impl Into<String>) -> Self {
        self.subcategory_term = term.into();
        self
    }

    #[must_use]
    pub const fn method_id(&self) -> &'static str {
        self.method_id
    }

    #[must_use]
    pub const fn category_id(&self) -> &'static str {
        self.category_id
    }

    #[must_use]
    pub fn subcategory_term(&self) -> &str {
        &self.subcategory_term
    }

    /// Most recent free-text query, if it was the last search issued
    #[must_use]
    pub fn free_text(&self) -> Option<&str> {
        self.free_text.as_deref()
    }

    #[must_use]
    pub fn method(&self) -> Option<&'static Method> {
        facets::find_method(self.method_id)
    }

    #[must_use]
    pub fn category(&self) -> Option<&'static Category> {
        facets::find_category(self.category_id)
    }

    /// Whether the subcategory term is consistent with the active category
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.category()
            .is_some_and(|category| category.accepts_term(&self.subcategory_term))
    }
}

impl Default for SelectionState {
    /// Instant Pot / Vegetarian / Paneer
    fn default() -> Self {
        Self {
            method_id: facets::DEFAULT_METHOD_ID,
            category_id: facets::DEFAULT_CATEGORY_ID,
            subcategory_term: "Paneer".to_string(),
            free_text: None,
        }
    }
}
