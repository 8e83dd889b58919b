//! Query/state coordinator
//!
//! Owns the [`SelectionState`], derives the search query from it, and issues
//! exactly one search per triggering action. Outcomes come back over a
//! channel tagged with the sequence number of the request that produced
//! them; only the outcome of the most recently issued request is applied, so
//! a slow response can never overwrite fresher results.

use super::dispatch::{SearchDispatcher, SearchOutcome, SearchRequest};
use super::state::SelectionState;
use crate::facets::{self, FALLBACK_PREFIX};
use crate::search::VideoItem;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};
use tracing::debug;

/// What the results area currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// Nothing searched yet
    #[default]
    Idle,
    /// A search is in flight
    Loading { query: String },
    /// The latest search succeeded; `items` may be empty
    Loaded { query: String, items: Vec<VideoItem> },
    /// The latest search failed
    Failed { query: String, message: String },
    /// No API key is configured
    Unconfigured,
}

impl SearchStatus {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Result items, empty unless the latest search succeeded
    #[must_use]
    pub fn items(&self) -> &[VideoItem] {
        match self {
            Self::Loaded { items, .. } => items,
            _ => &[],
        }
    }
}

/// Coordinates facet selections, derived queries and search outcomes
pub struct Coordinator {
    state: SelectionState,
    dispatcher: Box<dyn SearchDispatcher>,
    reply_tx: Sender<SearchOutcome>,
    reply_rx: Receiver<SearchOutcome>,
    last_seq: u64,
    current_query: String,
    status: SearchStatus,
}

impl Coordinator {
    /// Create a coordinator; no search is issued until an operation or [`refresh`](Self::refresh)
    #[must_use]
    pub fn new(state: SelectionState, dispatcher: impl SearchDispatcher + 'static) -> Self {
        let (reply_tx, reply_rx) = mpsc::channel();
        Self {
            state,
            dispatcher: Box::new(dispatcher),
            reply_tx,
            reply_rx,
            last_seq: 0,
            current_query: String::new(),
            status: SearchStatus::Idle,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    #[must_use]
    pub const fn status(&self) -> &SearchStatus {
        &self.status
    }

    /// The query most recently issued, facet-derived or free text
    #[must_use]
    pub fn current_query(&self) -> &str {
        &self.current_query
    }

    /// Sequence number of the most recently issued search (0 before the first)
    #[must_use]
    pub const fn last_seq(&self) -> u64 {
        self.last_seq
    }

    /// Query for the current facet selection
    ///
    /// `"{prefix} {term}"`, or exactly `"{prefix}"` when the term is empty.
    #[must_use]
    pub fn derive_query(&self) -> String {
        let prefix = self
            .state
            .method()
            .map_or(FALLBACK_PREFIX, |method| method.query_prefix);
        let term = self.state.subcategory_term.as_str();

        if term.is_empty() {
            prefix.to_string()
        } else {
            format!("{prefix} {term}")
        }
    }

    /// Switch the cooking method
    ///
    /// Returns whether a search was issued; an unknown id changes nothing.
    pub fn select_method(&mut self, id: &str) -> bool {
        let Some(method) = facets::find_method(id) else {
            debug!(id, "ignoring unknown method");
            return false;
        };
        self.state.method_id = method.id;
        self.search_facets();
        true
    }

    /// Switch the category and reset the subcategory to its first entry
    ///
    /// Returns whether a search was issued; an unknown id changes nothing.
    pub fn select_category(&mut self, id: &str) -> bool {
        let Some(category) = facets::find_category(id) else {
            debug!(id, "ignoring unknown category");
            return false;
        };
        self.state.category_id = category.id;
        self.state.subcategory_term = category.first_term().to_string();
        self.search_facets();
        true
    }

    /// Switch the subcategory term
    ///
    /// The term is taken as-is: it is only reachable through the subcategory
    /// list of the active category.
    pub fn select_subcategory(&mut self, term: &str) -> bool {
        if self.state.subcategory_term != term {
            self.state.subcategory_term = term.to_string();
        }
        self.search_facets();
        true
    }

    /// Search literally for `text`, leaving the facets untouched
    ///
    /// Blank input is a no-op and issues no search.
    pub fn submit_free_text(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.state.free_text = Some(text.to_string());
        self.issue(text.to_string());
        true
    }

    /// Re-run the search for the current facet selection
    pub fn refresh(&mut self) -> bool {
        self.search_facets();
        true
    }

    /// Apply every outcome that has arrived, without blocking
    ///
    /// Returns whether the status changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.reply_rx.try_recv() {
            changed |= self.apply(outcome);
        }
        changed
    }

    /// Block until the latest search resolves or `timeout` elapses
    ///
    /// Returns whether the latest search resolved.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.status.is_loading() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.reply_rx.recv_timeout(remaining) {
                Ok(outcome) => {
                    self.apply(outcome);
                }
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => return false,
            }
        }
        true
    }

    fn search_facets(&mut self) {
        self.state.free_text = None;
        let query = self.derive_query();
        self.issue(query);
    }

    fn issue(&mut self, query: String) {
        self.last_seq += 1;
        let seq = self.last_seq;
        debug!(seq, query = query.as_str(), "issuing search");

        self.current_query.clone_from(&query);
        self.status = SearchStatus::Loading {
            query: query.clone(),
        };
        self.dispatcher
            .dispatch(SearchRequest { seq, query }, self.reply_tx.clone());
    }

    fn apply(&mut self, outcome: SearchOutcome) -> bool {
        if outcome.seq != self.last_seq {
            debug!(
                seq = outcome.seq,
                latest = self.last_seq,
                "discarding stale search outcome"
            );
            return false;
        }

        self.status = match outcome.result {
            Ok(items) => {
                debug!(seq = outcome.seq, count = items.len(), "search completed");
                SearchStatus::Loaded {
                    query: outcome.query,
                    items,
                }
            }
            Err(e) if e.is_configuration() => SearchStatus::Unconfigured,
            Err(e) => SearchStatus::Failed {
                query: outcome.query,
                message: e.to_string(),
            },
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::dispatch::InlineDispatcher;
    use crate::search::SearchError;
    use crate::search::mock::MockProvider;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    /// Dispatcher that holds requests until the test releases them
    #[derive(Clone, Default)]
    struct DeferredDispatcher {
        pending: Rc<RefCell<Vec<(SearchRequest, Sender<SearchOutcome>)>>>,
    }

    impl DeferredDispatcher {
        fn release(&self, seq: u64, items: Vec<VideoItem>) {
            let mut pending = self.pending.borrow_mut();
            let idx = pending.iter().position(|(req, _)| req.seq == seq).unwrap();
            let (request, reply) = pending.remove(idx);
            reply
                .send(SearchOutcome {
                    seq: request.seq,
                    query: request.query,
                    result: Ok(items),
                })
                .unwrap();
        }

        fn issued(&self) -> usize {
            self.pending.borrow().len()
        }
    }

    impl SearchDispatcher for DeferredDispatcher {
        fn dispatch(&self, request: SearchRequest, reply: Sender<SearchOutcome>) {
            self.pending.borrow_mut().push((request, reply));
        }
    }

    fn inline() -> (Coordinator, Arc<MockProvider>) {
        let provider = Arc::new(MockProvider::new());
        let coordinator = Coordinator::new(
            SelectionState::default(),
            InlineDispatcher::new(provider.clone()),
        );
        (coordinator, provider)
    }

    #[test]
    fn test_default_query() {
        let (coordinator, provider) = inline();
        assert_eq!(coordinator.derive_query(), "Instant Pot Paneer");
        assert_eq!(coordinator.status(), &SearchStatus::Idle);
        assert!(provider.queries().is_empty());
    }

    #[test]
    fn test_select_category_resets_subcategory() {
        let (mut coordinator, provider) = inline();
        assert!(coordinator.select_category("dessert"));
        assert_eq!(coordinator.state().subcategory_term(), "Gulab Jamun Halwa");
        assert_eq!(coordinator.derive_query(), "Instant Pot Gulab Jamun Halwa");
        assert_eq!(provider.queries(), vec!["Instant Pot Gulab Jamun Halwa".to_string()]);
    }

    #[test]
    fn test_every_category_derives_first_term() {
        let (mut coordinator, _) = inline();
        for category in facets::categories() {
            coordinator.select_category(category.id);
            let expected = if category.subcategories.is_empty() {
                "Instant Pot".to_string()
            } else {
                format!("Instant Pot {}", category.subcategories[0].term)
            };
            assert_eq!(coordinator.derive_query(), expected, "category {}", category.id);
        }
    }

    #[test]
    fn test_all_category_has_no_trailing_space() {
        let (mut coordinator, _) = inline();
        coordinator.select_method("airfryer");
        coordinator.select_category("all");
        assert_eq!(coordinator.derive_query(), "Air Fryer");
        assert_eq!(coordinator.state().subcategory_term(), "");
    }

    #[test]
    fn test_select_method_changes_prefix() {
        let (mut coordinator, provider) = inline();
        assert!(coordinator.select_method("traditional"));
        assert_eq!(coordinator.derive_query(), "Indian Recipe Paneer");
        assert_eq!(provider.queries().len(), 1);
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let (mut coordinator, provider) = inline();
        let before = coordinator.state().clone();

        assert!(!coordinator.select_method("microwave"));
        assert!(!coordinator.select_category("vegan"));

        assert_eq!(coordinator.state(), &before);
        assert!(provider.queries().is_empty());
        assert_eq!(coordinator.last_seq(), 0);
    }

    #[test]
    fn test_unresolved_method_uses_fallback_prefix() {
        let provider = Arc::new(MockProvider::new());
        let mut state = SelectionState::default();
        state.method_id = "retired";
        let coordinator = Coordinator::new(state, InlineDispatcher::new(provider));
        assert_eq!(coordinator.derive_query(), "Indian Recipe Paneer");
    }

    #[test]
    fn test_select_subcategory_is_idempotent() {
        let (mut coordinator, provider) = inline();
        coordinator.select_subcategory("Dal");
        let after_first = coordinator.state().clone();
        coordinator.select_subcategory("Dal");

        assert_eq!(coordinator.state(), &after_first);
        assert_eq!(coordinator.derive_query(), "Instant Pot Dal");
        assert_eq!(provider.queries().len(), 2);
    }

    #[test]
    fn test_blank_free_text_is_noop() {
        let (mut coordinator, provider) = inline();
        let before = coordinator.state().clone();

        assert!(!coordinator.submit_free_text(""));
        assert!(!coordinator.submit_free_text("   "));

        assert_eq!(coordinator.state(), &before);
        assert!(provider.queries().is_empty());
    }

    #[test]
    fn test_free_text_bypasses_facets() {
        let (mut coordinator, provider) = inline();
        coordinator.select_category("snacks");
        assert!(coordinator.submit_free_text("masala chai"));

        assert_eq!(coordinator.current_query(), "masala chai");
        assert_eq!(coordinator.state().free_text(), Some("masala chai"));
        assert_eq!(coordinator.state().category_id(), "snacks");
        assert_eq!(coordinator.state().subcategory_term(), "Samosa Pakora");
        assert_eq!(provider.queries().last().map(String::as_str), Some("masala chai"));
    }

    #[test]
    fn test_free_text_sent_verbatim() {
        let (mut coordinator, provider) = inline();
        assert!(coordinator.submit_free_text("  dal  tadka "));

        assert_eq!(coordinator.current_query(), "  dal  tadka ");
        assert_eq!(coordinator.state().free_text(), Some("  dal  tadka "));
        assert_eq!(provider.queries(), vec!["  dal  tadka ".to_string()]);
    }

    #[test]
    fn test_subcategory_term_used_as_is() {
        let (mut coordinator, provider) = inline();
        coordinator.select_subcategory("Dal ");
        assert_eq!(coordinator.derive_query(), "Instant Pot Dal ");
        assert_eq!(provider.queries(), vec!["Instant Pot Dal ".to_string()]);
    }

    #[test]
    fn test_facet_change_after_free_text_wins() {
        let (mut coordinator, provider) = inline();
        coordinator.submit_free_text("masala chai");
        coordinator.select_subcategory("Sabzi");

        assert!(coordinator.state().free_text().is_none());
        assert_eq!(coordinator.current_query(), "Instant Pot Sabzi");
        assert_eq!(provider.queries().last().map(String::as_str), Some("Instant Pot Sabzi"));
    }

    #[test]
    fn test_switches_preserve_invariant() {
        let (mut coordinator, _) = inline();
        let steps: [(&str, &str); 9] = [
            ("category", "nonveg"),
            ("sub", "Keema Recipe"),
            ("method", "airfryer"),
            ("category", "all"),
            ("method", "traditional"),
            ("category", "dessert"),
            ("sub", "Kulfi Rasmalai"),
            ("category", "veg"),
            ("method", "instantpot"),
        ];
        for (kind, value) in steps {
            match kind {
                "category" => coordinator.select_category(value),
                "method" => coordinator.select_method(value),
                _ => coordinator.select_subcategory(value),
            };
            assert!(coordinator.state().is_consistent(), "after {kind} {value}");
        }
    }

    #[test]
    fn test_outcome_applied() {
        let (mut coordinator, provider) = inline();
        provider.push_items(vec![VideoItem::new("v1", "Paneer Tikka", "Chef")]);

        coordinator.refresh();
        assert!(coordinator.status().is_loading());
        assert!(coordinator.poll());

        assert_eq!(coordinator.status().items().len(), 1);
        assert_eq!(coordinator.status().items()[0].title, "Paneer Tikka");
    }

    #[test]
    fn test_empty_result_is_loaded_not_idle() {
        let (mut coordinator, provider) = inline();
        provider.push_items(Vec::new());
        coordinator.refresh();
        coordinator.poll();
        assert_eq!(
            coordinator.status(),
            &SearchStatus::Loaded {
                query: "Instant Pot Paneer".into(),
                items: Vec::new()
            }
        );
    }

    #[test]
    fn test_error_then_success_goes_through_loading() {
        let (mut coordinator, provider) = inline();
        provider.push_error(SearchError::Api("quotaExceeded".into()));
        coordinator.refresh();
        coordinator.poll();
        assert_eq!(
            coordinator.status(),
            &SearchStatus::Failed {
                query: "Instant Pot Paneer".into(),
                message: "quotaExceeded".into()
            }
        );

        coordinator.select_subcategory("Dal");
        assert_eq!(
            coordinator.status(),
            &SearchStatus::Loading {
                query: "Instant Pot Dal".into()
            }
        );
        coordinator.poll();
        assert_eq!(coordinator.status().items().len(), 1);
    }

    #[test]
    fn test_missing_key_is_unconfigured() {
        let (mut coordinator, provider) = inline();
        provider.push_error(SearchError::MissingApiKey);
        coordinator.refresh();
        coordinator.poll();
        assert_eq!(coordinator.status(), &SearchStatus::Unconfigured);
    }

    #[test]
    fn test_stale_outcome_discarded() {
        let dispatcher = DeferredDispatcher::default();
        let mut coordinator = Coordinator::new(SelectionState::default(), dispatcher.clone());

        coordinator.select_subcategory("Dal");
        coordinator.select_subcategory("Sabzi");
        assert_eq!(dispatcher.issued(), 2);

        // Newer response arrives first
        dispatcher.release(2, vec![VideoItem::new("s", "Aloo Sabzi", "Chef")]);
        assert!(coordinator.poll());
        assert_eq!(coordinator.status().items()[0].title, "Aloo Sabzi");

        // Older response arrives late and must not overwrite
        dispatcher.release(1, vec![VideoItem::new("d", "Dal Tadka", "Chef")]);
        assert!(!coordinator.poll());
        assert_eq!(coordinator.status().items()[0].title, "Aloo Sabzi");
    }

    #[test]
    fn test_wait_times_out_while_pending() {
        let dispatcher = DeferredDispatcher::default();
        let mut coordinator = Coordinator::new(SelectionState::default(), dispatcher);
        coordinator.refresh();
        assert!(!coordinator.wait(Duration::from_millis(20)));
        assert!(coordinator.status().is_loading());
    }

    #[test]
    fn test_wait_resolves_inline() {
        let (mut coordinator, _) = inline();
        coordinator.refresh();
        assert!(coordinator.wait(Duration::from_secs(1)));
        assert!(!coordinator.status().is_loading());
    }
}
