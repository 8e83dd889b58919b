//! Browse command - interactive recipe browser

use crate::{
    KhanaError,
    browse::{Coordinator, SelectionState, ThreadDispatcher},
    config::KhanaConfig,
    output::{OutputWriter, StdoutWriter},
    search::SearchProvider,
    ui::{BrowseApp, UiError},
};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::info;

type Result<T> = std::result::Result<T, KhanaError>;

/// Execute the browse command
///
/// # Errors
/// Returns an error if stdout is not a terminal or the terminal UI fails
pub fn execute(config: &KhanaConfig, selection: SelectionState, quiet: bool) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        return Err(UiError::NotATerminal.into());
    }

    if !config.has_api_key() {
        StdoutWriter::new(quiet).warning("No API key configured; searches will fail until one is set");
    }

    let provider: Arc<dyn SearchProvider> = Arc::new(super::build_provider(config)?);
    info!(
        method = selection.method_id(),
        category = selection.category_id(),
        "starting browser"
    );

    let mut coordinator = Coordinator::new(selection, ThreadDispatcher::new(provider));
    BrowseApp::new().run(&mut coordinator)?;
    Ok(())
}
