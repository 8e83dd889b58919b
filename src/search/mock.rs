//! Scripted search provider for unit tests

use super::{SearchError, SearchProvider, SearchResult, VideoItem};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Provider that replays queued results and records every query it sees
///
/// When the queue is empty it answers with a single item titled after the
/// query, so tests that only care about dispatch do not need to script it.
#[derive(Debug, Default)]
pub struct MockProvider {
    responses: Mutex<VecDeque<SearchResult>>,
    queries: Mutex<Vec<String>>,
}

impl MockProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    pub fn push_items(&self, items: Vec<VideoItem>) {
        self.responses.lock().unwrap().push_back(Ok(items));
    }

    /// Queue a failing response
    pub fn push_error(&self, error: SearchError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Queries received so far, in call order
    #[must_use]
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl SearchProvider for MockProvider {
    fn search(&self, query: &str) -> SearchResult {
        self.queries.lock().unwrap().push(query.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(vec![VideoItem::new("mock", query, "Mock Channel")]))
    }
}
