use regex::{Regex, RegexBuilder};

use crate::error::SearchError;
use crate::matcher::{MatchSet, SearchMatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// The pattern is exact text; metacharacters carry no meaning.
    #[default]
    Literal,
    /// The pattern is a regular expression in the `regex` crate dialect.
    Regex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub case_sensitive: bool,
    pub mode: SearchMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            mode: SearchMode::Literal,
        }
    }
}

/// One search request as entered in the find bar. Transient: consumed
/// by a single search call and not kept in sync with the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub pattern: String,
    pub config: SearchConfig,
}

impl Query {
    pub fn literal(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            config: SearchConfig::default(),
        }
    }

    pub fn regex(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            config: SearchConfig {
                mode: SearchMode::Regex,
                ..SearchConfig::default()
            },
        }
    }
}

/// Compiles queries and scans documents for them.
///
/// The compiled matcher is cached; it is rebuilt only when the pattern
/// or the config actually changes.
pub struct SearchEngine {
    config: SearchConfig,
    compiled: Option<Regex>,
    pattern: String,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            compiled: None,
            pattern: String::new(),
        }
    }

    /// Compiles `pattern` under the current config.
    ///
    /// An empty pattern clears the matcher: searching for nothing
    /// matches nothing. A pattern that fails to compile leaves the
    /// engine without a matcher and is reported to the caller.
    pub fn set_pattern(&mut self, pattern: &str) -> Result<(), SearchError> {
        if pattern == self.pattern && (pattern.is_empty() || self.compiled.is_some()) {
            return Ok(());
        }

        self.pattern = pattern.to_string();

        if pattern.is_empty() {
            self.compiled = None;
            return Ok(());
        }

        let source = match self.config.mode {
            SearchMode::Literal => regex::escape(pattern),
            SearchMode::Regex => pattern.to_string(),
        };

        match RegexBuilder::new(&source)
            .case_insensitive(!self.config.case_sensitive)
            .build()
        {
            Ok(regex) => {
                self.compiled = Some(regex);
                Ok(())
            }
            Err(err) => {
                self.compiled = None;
                Err(SearchError::InvalidPattern(err))
            }
        }
    }

    /// Recompiles the current pattern when the config changes.
    pub fn set_config(&mut self, config: SearchConfig) -> Result<(), SearchError> {
        if self.config == config {
            return Ok(());
        }
        self.config = config;
        let pattern = std::mem::take(&mut self.pattern);
        self.set_pattern(&pattern)
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn has_pattern(&self) -> bool {
        self.compiled.is_some()
    }

    /// Scans `document` and collects every match in one left-to-right
    /// pass.
    ///
    /// Matching is leftmost-first and never overlapping: the scan
    /// resumes after each match, and a zero-width match advances by one
    /// character so the pass always terminates.
    pub fn find_matches(&self, document: &str) -> MatchSet {
        let Some(regex) = &self.compiled else {
            return MatchSet::new();
        };

        let matches: Vec<SearchMatch> = regex
            .find_iter(document)
            .map(|m| SearchMatch::new(m.start(), m.end()))
            .collect();
        MatchSet::from_matches(matches)
    }
}

/// One-shot search: compiles `query` and scans `document`.
///
/// On a compile error no match set is produced, so whatever the caller
/// currently holds stays untouched.
pub fn search(document: &str, query: &Query) -> Result<MatchSet, SearchError> {
    let mut engine = SearchEngine::new(query.config);
    engine.set_pattern(&query.pattern)?;
    Ok(engine.find_matches(document))
}
