use std::sync::Arc;
use std::thread::JoinHandle;

use flume::{Receiver, Sender};
use parking_lot::Mutex;
use quill_search::{MatchSet, Query, SearchMatch};

use crate::worker::{self, SearchEvent, SearchRequest};

/// A search session backed by a worker thread.
///
/// The session owns at most one active [`MatchSet`] at a time. The
/// worker swaps in each completed result under the session lock;
/// navigation takes the same lock, so the shell always sees either the
/// old set or the new one, never a half-replaced mix. Dropping the
/// session closes the request channel and joins the worker.
pub struct SearchSession {
    active: Arc<Mutex<MatchSet>>,
    requests: Option<Sender<SearchRequest>>,
    events: Receiver<SearchEvent>,
    worker: Option<JoinHandle<()>>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        let active = Arc::new(Mutex::new(MatchSet::new()));
        let (request_tx, request_rx) = flume::unbounded();
        let (event_tx, event_rx) = flume::unbounded();
        let worker = worker::spawn(request_rx, Arc::clone(&active), event_tx);

        Self {
            active,
            requests: Some(request_tx),
            events: event_rx,
            worker: Some(worker),
        }
    }

    /// Submits a search over a document snapshot.
    ///
    /// Returns immediately; a [`SearchEvent`] arrives on
    /// [`SearchSession::events`] once the scan finishes.
    pub fn search(&self, document: Arc<str>, query: Query) {
        if let Some(requests) = &self.requests {
            let _ = requests.send(SearchRequest { document, query });
        }
    }

    /// Completion and failure events, in the order searches were
    /// submitted.
    pub fn events(&self) -> &Receiver<SearchEvent> {
        &self.events
    }

    /// Advances to the next match, wrapping past the last.
    pub fn next(&self) -> Option<SearchMatch> {
        self.active.lock().next()
    }

    /// Steps back to the previous match, wrapping before the first.
    pub fn previous(&self) -> Option<SearchMatch> {
        self.active.lock().previous()
    }

    pub fn current(&self) -> Option<SearchMatch> {
        self.active.lock().current()
    }

    /// 1-based `(current, total)` for the find bar counter.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.active.lock().position()
    }

    pub fn match_count(&self) -> usize {
        self.active.lock().count()
    }

    /// Runs `f` against the active match set without cloning it, e.g.
    /// to collect the visible spans for highlighting.
    pub fn with_matches<R>(&self, f: impl FnOnce(&MatchSet) -> R) -> R {
        f(&self.active.lock())
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        // Closing the request channel lets the worker drain and exit.
        self.requests.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_without_matches_is_a_noop() {
        let session = SearchSession::new();
        assert!(session.next().is_none());
        assert!(session.previous().is_none());
        assert!(session.current().is_none());
        assert_eq!(session.match_count(), 0);
    }

    #[test]
    fn test_drop_joins_worker_with_pending_queue() {
        let session = SearchSession::new();
        for _ in 0..16 {
            session.search(Arc::from("ababab"), Query::literal("ab"));
        }
        // Must not hang: pending requests drain, then the worker exits.
        drop(session);
    }
}
