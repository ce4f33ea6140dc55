use std::sync::Arc;
use std::thread::JoinHandle;

use flume::{Receiver, Sender};
use parking_lot::Mutex;
use quill_search::{MatchSet, Query, SearchError, search};

/// One search submitted to the worker: an immutable document snapshot
/// plus the query to run over it.
pub struct SearchRequest {
    pub document: Arc<str>,
    pub query: Query,
}

/// Events sent from the worker back to the embedding shell.
#[derive(Debug)]
pub enum SearchEvent {
    /// A search finished and the active match set was replaced.
    Completed { matches: usize },
    /// The pattern failed to compile; the active match set is
    /// unchanged.
    Failed(SearchError),
}

/// Spawns the worker thread.
///
/// Requests are processed strictly in submission order, so when
/// several searches are in flight the last one submitted is the last
/// one applied to the active slot. The thread exits once every request
/// sender is dropped.
pub(crate) fn spawn(
    requests: Receiver<SearchRequest>,
    active: Arc<Mutex<MatchSet>>,
    events: Sender<SearchEvent>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        while let Ok(request) = requests.recv() {
            match search(&request.document, &request.query) {
                Ok(results) => {
                    let matches = results.count();
                    log::debug!(
                        "search {:?} over {} bytes: {} matches",
                        request.query.pattern,
                        request.document.len(),
                        matches
                    );
                    // The swap is the only work done under the lock.
                    *active.lock() = results;
                    let _ = events.send(SearchEvent::Completed { matches });
                }
                Err(err) => {
                    log::warn!("search {:?} failed: {}", request.query.pattern, err);
                    let _ = events.send(SearchEvent::Failed(err));
                }
            }
        }
        log::debug!("search worker shutting down");
    })
}
