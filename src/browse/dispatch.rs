//! Search dispatch
//!
//! A dispatcher runs one provider call per [`SearchRequest`] and sends the
//! [`SearchOutcome`] back over a channel. Requests are never cancelled; a
//! superseded request still completes, and the coordinator drops its outcome
//! by sequence number.

use crate::search::{SearchError, SearchProvider, SearchResult};
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;
use tracing::{debug, error};

/// A search to run, tagged with its sequence number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

/// The provider's answer to a [`SearchRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub seq: u64,
    pub query: String,
    pub result: SearchResult,
}

/// Runs search requests and reports their outcomes
pub trait SearchDispatcher {
    /// Start `request`; its outcome must eventually be sent on `reply`
    fn dispatch(&self, request: SearchRequest, reply: Sender<SearchOutcome>);
}

/// Runs every request on its own short-lived worker thread
///
/// Used by the TUI so the event loop stays responsive while a request is in
/// flight.
pub struct ThreadDispatcher {
    provider: Arc<dyn SearchProvider>,
}

impl ThreadDispatcher {
    #[must_use]
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }
}

impl SearchDispatcher for ThreadDispatcher {
    fn dispatch(&self, request: SearchRequest, reply: Sender<SearchOutcome>) {
        let provider = Arc::clone(&self.provider);
        let fallback_reply = reply.clone();
        let SearchRequest { seq, query } = request;
        let worker_query = query.clone();

        let spawned = thread::Builder::new()
            .name(format!("khana-search-{seq}"))
            .spawn(move || {
                let result = provider.search(&worker_query);
                // The receiver only goes away when the browser is shutting down
                let _ = reply.send(SearchOutcome {
                    seq,
                    query: worker_query,
                    result,
                });
            });

        if let Err(e) = spawned {
            error!(seq, "could not start search worker: {e}");
            let _ = fallback_reply.send(SearchOutcome {
                seq,
                query,
                result: Err(SearchError::Http(format!("could not start search worker: {e}"))),
            });
        } else {
            debug!(seq, "search worker started");
        }
    }
}

/// Runs every request synchronously on the calling thread
///
/// Used by the one-shot `search` command and by tests.
pub struct InlineDispatcher {
    provider: Arc<dyn SearchProvider>,
}

impl InlineDispatcher {
    #[must_use]
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }
}

impl SearchDispatcher for InlineDispatcher {
    fn dispatch(&self, request: SearchRequest, reply: Sender<SearchOutcome>) {
        let result = self.provider.search(&request.query);
        let _ = reply.send(SearchOutcome {
            seq: request.seq,
            query: request.query,
            result,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::mock::MockProvider;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn test_inline_dispatch_replies_immediately() {
        let provider = Arc::new(MockProvider::new());
        let dispatcher = InlineDispatcher::new(provider.clone());
        let (tx, rx) = mpsc::channel();

        dispatcher.dispatch(
            SearchRequest {
                seq: 7,
                query: "Air Fryer Tandoori Tikka".into(),
            },
            tx,
        );

        let outcome = rx.try_recv().unwrap();
        assert_eq!(outcome.seq, 7);
        assert_eq!(outcome.query, "Air Fryer Tandoori Tikka");
        assert!(outcome.result.is_ok());
        assert_eq!(provider.queries(), vec!["Air Fryer Tandoori Tikka".to_string()]);
    }

    #[test]
    fn test_thread_dispatch_replies_eventually() {
        let provider = Arc::new(MockProvider::new());
        provider.push_error(SearchError::Api("quotaExceeded".into()));
        let dispatcher = ThreadDispatcher::new(provider);
        let (tx, rx) = mpsc::channel();

        dispatcher.dispatch(
            SearchRequest {
                seq: 1,
                query: "Indian Recipe Dal".into(),
            },
            tx,
        );

        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(outcome.seq, 1);
        assert_eq!(outcome.result, Err(SearchError::Api("quotaExceeded".into())));
    }
}
