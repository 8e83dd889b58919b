//! Search command - run one search and print the results

use crate::{
    KhanaError,
    browse::{Coordinator, EMPTY_MESSAGE, InlineDispatcher, SearchStatus, SelectionState},
    cli::OutputFormat,
    config::KhanaConfig,
    output::{self, OutputWriter, StdoutWriter},
    search::{SearchError, SearchProvider, VideoItem},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

type Result<T> = std::result::Result<T, KhanaError>;

/// The query that was sent and what came back
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub query: String,
    pub items: Vec<VideoItem>,
}

/// Execute the search command
///
/// Non-blank `query` words replace the facet-derived query, exactly as
/// submitting the search bar does in the browser.
///
/// # Errors
/// Returns an error if no API key is configured, the search fails, or the
/// JSON output cannot be produced
pub fn execute(
    config: &KhanaConfig,
    selection: SelectionState,
    query: &[String],
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let provider: Arc<dyn SearchProvider> = Arc::new(super::build_provider(config)?);
    let free_text = query.join(" ");
    let free_text = Some(free_text.as_str()).filter(|text| !text.trim().is_empty());

    let report = run(provider, selection, free_text)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| KhanaError::InvalidInput(format!("could not encode results: {e}")))?;
            println!("{json}");
        }
        OutputFormat::Text => print_text(&report, quiet),
    }
    Ok(())
}

/// Run exactly one search for `selection`, or for `free_text` when given
///
/// # Errors
/// Returns `SearchError::MissingApiKey` when the provider has no credential,
/// and `KhanaError::SearchFailed` for any other provider failure
pub fn run(
    provider: Arc<dyn SearchProvider>,
    selection: SelectionState,
    free_text: Option<&str>,
) -> Result<SearchReport> {
    let mut coordinator = Coordinator::new(selection, InlineDispatcher::new(provider));

    match free_text {
        Some(text) => coordinator.submit_free_text(text),
        None => coordinator.refresh(),
    };
    coordinator.poll();

    match coordinator.status() {
        SearchStatus::Loaded { query, items } => {
            debug!(query = query.as_str(), count = items.len(), "search finished");
            Ok(SearchReport {
                query: query.clone(),
                items: items.clone(),
            })
        }
        SearchStatus::Unconfigured => Err(SearchError::MissingApiKey.into()),
        SearchStatus::Failed { query, message } => Err(KhanaError::SearchFailed {
            query: query.clone(),
            message: message.clone(),
        }),
        SearchStatus::Idle | SearchStatus::Loading { .. } => Err(KhanaError::SearchFailed {
            query: coordinator.current_query().to_string(),
            message: "no response from the search provider".to_string(),
        }),
    }
}

fn print_text(report: &SearchReport, quiet: bool) {
    let writer = StdoutWriter::new(quiet);
    writer.info(&format!("Results for \"{}\":", report.query));

    if report.items.is_empty() {
        writer.info(EMPTY_MESSAGE);
        return;
    }
    for (index, video) in report.items.iter().enumerate() {
        println!("{}", output::video_line(index, video, quiet));
    }
}
