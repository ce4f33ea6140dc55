//! Background search session for the Quill editor.
//!
//! Runs searches off the interactive thread so the shell stays
//! responsive while large documents are scanned. The shell submits a
//! document snapshot plus a query, polls an event channel for the
//! outcome, and navigates the active matches from its own thread.

mod session;
mod worker;

pub use session::SearchSession;
pub use worker::{SearchEvent, SearchRequest};
