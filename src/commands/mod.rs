//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args plus the loaded configuration.

pub mod browse;
pub mod completions;
pub mod config;
pub mod facets;
pub mod open;
pub mod search;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use completions::execute as completions;
pub use self::config::execute as config;
pub use facets::execute as facets;
pub use self::open::execute as open;
pub use search::execute as search;

use crate::browse::SelectionState;
use crate::config::KhanaConfig;
use crate::facets as catalog;
use crate::search::{SearchError, YouTubeProvider};
use crate::{KhanaError, Result};

/// Build the production search provider from the configuration
///
/// # Errors
///
/// Returns `SearchError::Http` if the HTTP client cannot be built.
pub fn build_provider(config: &KhanaConfig) -> std::result::Result<YouTubeProvider, SearchError> {
    Ok(YouTubeProvider::with_timeout(config.api_key.clone(), config.endpoint.as_str(), config.timeout())?
        .max_results(config.max_results))
}

/// Resolve command-line facet ids into a starting selection
///
/// Missing ids fall back to the configured defaults. Unlike the browser,
/// the command line rejects ids that do not resolve.
///
/// # Errors
///
/// Returns `KhanaError::InvalidInput` for an unknown method, category or subcategory.
pub fn resolve_selection(
    config: &KhanaConfig,
    method: Option<&str>,
    category: Option<&str>,
    sub: Option<&str>,
) -> Result<SelectionState> {
    let method_id = method.unwrap_or(&config.default_method);
    let method = catalog::find_method(method_id).ok_or_else(|| {
        KhanaError::InvalidInput(format!(
            "unknown method '{method_id}' (expected one of: {})",
            catalog::method_ids()
        ))
    })?;

    let category_id = category.unwrap_or(&config.default_category);
    let category = catalog::find_category(category_id).ok_or_else(|| {
        KhanaError::InvalidInput(format!(
            "unknown category '{category_id}' (expected one of: {})",
            catalog::category_ids()
        ))
    })?;

    let state = SelectionState::from_ids(method.id, category.id);
    let Some(sub) = sub else {
        return Ok(state);
    };

    let subcategory = category.find_subcategory(sub).ok_or_else(|| {
        let names: Vec<&str> = category.subcategories.iter().map(|s| s.name).collect();
        let expected = if names.is_empty() {
            "none".to_string()
        } else {
            names.join(", ")
        };
        KhanaError::InvalidInput(format!(
            "unknown subcategory '{sub}' for {} (expected one of: {expected})",
            category.label
        ))
    })?;

    Ok(state.with_subcategory(subcategory.term))
}
