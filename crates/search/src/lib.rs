//! Document search for the Quill editor.
//!
//! Scans an immutable document snapshot with a literal or regex query
//! and yields a [`MatchSet`]: every non-overlapping match in document
//! order plus a cursor for wrap-around navigation.

mod engine;
mod error;
mod matcher;
mod state;

pub use engine::{Query, SearchConfig, SearchEngine, SearchMode, search};
pub use error::SearchError;
pub use matcher::{MatchSet, SearchMatch};
pub use state::SearchState;
