use crate::engine::{SearchConfig, SearchEngine, SearchMode};
use crate::error::SearchError;
use crate::matcher::{MatchSet, SearchMatch};

/// Search state owned by one editor session.
///
/// Drives the find bar: the query is recompiled as the user types,
/// [`SearchState::search`] runs it against a document snapshot, and
/// the navigation calls walk the resulting matches. A query that fails
/// to compile records the error and leaves the previous matches
/// visible until a valid search replaces them.
pub struct SearchState {
    engine: SearchEngine,
    results: MatchSet,
    query: String,
    active: bool,
    error: Option<SearchError>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            engine: SearchEngine::new(SearchConfig::default()),
            results: MatchSet::new(),
            query: String::new(),
            active: false,
            error: None,
        }
    }

    /// Activate search mode.
    pub fn open(&mut self) {
        self.active = true;
    }

    /// Deactivate search mode and drop all search state.
    pub fn close(&mut self) {
        self.active = false;
        self.clear();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Updates the query text, recompiling the pattern.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        match self.engine.set_pattern(query) {
            Ok(()) => self.error = None,
            Err(err) => self.error = Some(err),
        }
    }

    /// Runs the compiled query against `document`, replacing the match
    /// set, and returns the number of matches.
    ///
    /// A query that failed to compile runs nothing and keeps the
    /// previous results; an empty query replaces them with an empty
    /// set.
    pub fn search(&mut self, document: &str) -> usize {
        if self.error.is_some() {
            return self.results.count();
        }
        self.results = self.engine.find_matches(document);
        self.results.count()
    }

    /// Clears query, results, and any recorded error.
    pub fn clear(&mut self) {
        self.query.clear();
        let _ = self.engine.set_pattern("");
        self.results = MatchSet::new();
        self.error = None;
    }

    pub fn results(&self) -> &MatchSet {
        &self.results
    }

    pub fn results_mut(&mut self) -> &mut MatchSet {
        &mut self.results
    }

    pub fn error(&self) -> Option<&SearchError> {
        self.error.as_ref()
    }

    pub fn has_valid_pattern(&self) -> bool {
        self.engine.has_pattern()
    }

    pub fn config(&self) -> SearchConfig {
        self.engine.config()
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.engine.config().case_sensitive
    }

    pub fn mode(&self) -> SearchMode {
        self.engine.config().mode
    }

    pub fn toggle_case_sensitive(&mut self) {
        let mut config = self.engine.config();
        config.case_sensitive = !config.case_sensitive;
        self.apply_config(config);
    }

    pub fn toggle_regex_mode(&mut self) {
        let mut config = self.engine.config();
        config.mode = match config.mode {
            SearchMode::Literal => SearchMode::Regex,
            SearchMode::Regex => SearchMode::Literal,
        };
        self.apply_config(config);
    }

    fn apply_config(&mut self, config: SearchConfig) {
        match self.engine.set_config(config) {
            Ok(()) => self.error = None,
            Err(err) => self.error = Some(err),
        }
    }

    /// Advances to the next match and returns it so the shell can move
    /// the caret to its end and select it.
    pub fn next_match(&mut self) -> Option<SearchMatch> {
        self.results.next()
    }

    /// Steps back to the previous match, wrapping before the first.
    pub fn previous_match(&mut self) -> Option<SearchMatch> {
        self.results.previous()
    }

    /// Jumps to the match nearest to a byte offset, e.g. the caret.
    pub fn jump_to_nearest(&mut self, offset: usize) -> Option<SearchMatch> {
        self.results.jump_to_nearest(offset)
    }
}
