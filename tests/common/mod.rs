//! Shared helpers for integration tests

#![allow(dead_code)]

use khana::search::{SearchError, SearchProvider, SearchResult, VideoItem};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

/// Provider that replays queued responses, records queries and can delay
/// specific queries to simulate slow requests
#[derive(Default)]
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<SearchResult>>,
    delays: Mutex<HashMap<String, Duration>>,
    queries: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_items(&self, items: Vec<VideoItem>) {
        self.responses.lock().unwrap().push_back(Ok(items));
    }

    pub fn push_error(&self, error: SearchError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Answer `query` only after `delay`
    pub fn delay(&self, query: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(query.to_string(), delay);
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl SearchProvider for ScriptedProvider {
    fn search(&self, query: &str) -> SearchResult {
        self.queries.lock().unwrap().push(query.to_string());

        let delay = self.delays.lock().unwrap().get(query).copied();
        if let Some(delay) = delay {
            thread::sleep(delay);
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(vec![video_for(query)]))
    }
}

/// The item an unscripted search returns: one video titled after the query
pub fn video_for(query: &str) -> VideoItem {
    VideoItem::new(query.replace(' ', "-").to_lowercase(), query, "Test Kitchen")
}
