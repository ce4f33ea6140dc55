/// A single occurrence of the query in the document.
///
/// `start` and `end` are byte offsets into the document snapshot the
/// search ran against; `end` is exclusive, so `&doc[m.start..m.end]`
/// is the matched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    pub start: usize,
    pub end: usize,
}

impl SearchMatch {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for zero-width matches, e.g. `a*` against non-`a` text.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

/// Wrapping step for match navigation.
///
/// `%` truncates toward zero, so `-1 % n` would stay negative;
/// stepping back from the first match must land on the last.
fn floor_mod(value: i64, modulus: i64) -> usize {
    value.rem_euclid(modulus) as usize
}

/// The outcome of one search pass: all matches in document order plus
/// the cursor identifying the currently highlighted one.
///
/// A match set is replaced wholesale by every new search; navigation
/// only moves the cursor. It reflects the snapshot it was computed
/// from and goes stale once the document is edited.
#[derive(Debug, Clone)]
pub struct MatchSet {
    matches: Vec<SearchMatch>,
    current: Option<usize>,
}

impl Default for MatchSet {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchSet {
    pub fn new() -> Self {
        Self {
            matches: Vec::new(),
            current: None,
        }
    }

    /// Builds a set from matches in ascending document order, with the
    /// cursor on the first match when there is one.
    pub fn from_matches(matches: Vec<SearchMatch>) -> Self {
        let current = if matches.is_empty() { None } else { Some(0) };
        Self { matches, current }
    }

    pub fn count(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn matches(&self) -> &[SearchMatch] {
        &self.matches
    }

    pub fn current(&self) -> Option<SearchMatch> {
        self.current.map(|i| self.matches[i])
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// 1-based `(current, total)` for a "3 of 7" style counter.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current.map(|i| (i + 1, self.matches.len()))
    }

    /// Moves the cursor to the next match, wrapping past the last.
    pub fn next(&mut self) -> Option<SearchMatch> {
        let count = self.matches.len();
        if count == 0 {
            return None;
        }
        let index = match self.current {
            Some(i) => floor_mod(i as i64 + 1, count as i64),
            None => 0,
        };
        self.current = Some(index);
        Some(self.matches[index])
    }

    /// Moves the cursor to the previous match, wrapping before the
    /// first.
    pub fn previous(&mut self) -> Option<SearchMatch> {
        let count = self.matches.len();
        if count == 0 {
            return None;
        }
        let index = match self.current {
            Some(i) => floor_mod(i as i64 - 1, count as i64),
            None => count - 1,
        };
        self.current = Some(index);
        Some(self.matches[index])
    }

    pub fn jump_to(&mut self, index: usize) -> Option<SearchMatch> {
        if index < self.matches.len() {
            self.current = Some(index);
            Some(self.matches[index])
        } else {
            None
        }
    }

    pub fn jump_to_first(&mut self) -> Option<SearchMatch> {
        self.jump_to(0)
    }

    pub fn jump_to_last(&mut self) -> Option<SearchMatch> {
        let index = self.matches.len().checked_sub(1)?;
        self.jump_to(index)
    }

    /// Moves the cursor to the first match starting at or after
    /// `offset`, wrapping to the first match when none follows.
    pub fn jump_to_nearest(&mut self, offset: usize) -> Option<SearchMatch> {
        if self.matches.is_empty() {
            return None;
        }

        let index = self
            .matches
            .iter()
            .position(|m| m.start >= offset)
            .unwrap_or(0);

        self.current = Some(index);
        Some(self.matches[index])
    }

    /// Matches overlapping the byte range `[start, end)`, for
    /// highlighting only the visible part of the document.
    pub fn matches_in_range(&self, start: usize, end: usize) -> Vec<SearchMatch> {
        self.matches
            .iter()
            .filter(|m| m.end > start && m.start < end)
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_contains() {
        let m = SearchMatch::new(10, 15);
        assert!(m.contains(10));
        assert!(m.contains(14));
        assert!(!m.contains(15));
        assert!(!m.contains(9));
        assert_eq!(m.len(), 5);
        assert!(!m.is_empty());
        assert!(SearchMatch::new(3, 3).is_empty());
    }

    #[test]
    fn test_floor_mod_wraps_negatives() {
        assert_eq!(floor_mod(-1, 3), 2);
        assert_eq!(floor_mod(0, 3), 0);
        assert_eq!(floor_mod(3, 3), 0);
        assert_eq!(floor_mod(4, 3), 1);
    }

    #[test]
    fn test_empty_set() {
        let mut set = MatchSet::new();
        assert!(set.is_empty());
        assert_eq!(set.count(), 0);
        assert!(set.current().is_none());
        assert!(set.position().is_none());
        assert!(set.next().is_none());
        assert!(set.previous().is_none());
        assert!(set.current_index().is_none());
    }

    #[test]
    fn test_fresh_set_starts_at_first_match() {
        let set = MatchSet::from_matches(vec![
            SearchMatch::new(0, 2),
            SearchMatch::new(2, 4),
        ]);
        assert_eq!(set.current_index(), Some(0));
        assert_eq!(set.current(), Some(SearchMatch::new(0, 2)));
    }

    #[test]
    fn test_navigation_wraps_both_ways() {
        let mut set = MatchSet::from_matches(vec![
            SearchMatch::new(0, 2),
            SearchMatch::new(2, 4),
            SearchMatch::new(4, 6),
        ]);

        assert_eq!(set.position(), Some((1, 3)));

        assert_eq!(set.next(), Some(SearchMatch::new(2, 4)));
        assert_eq!(set.position(), Some((2, 3)));

        set.next();
        assert_eq!(set.position(), Some((3, 3)));

        // Past the last match: wrap to the first.
        assert_eq!(set.next(), Some(SearchMatch::new(0, 2)));
        assert_eq!(set.current_index(), Some(0));

        // Before the first match: wrap to the last.
        assert_eq!(set.previous(), Some(SearchMatch::new(4, 6)));
        assert_eq!(set.current_index(), Some(2));
    }

    #[test]
    fn test_next_then_previous_round_trips() {
        let mut set = MatchSet::from_matches(vec![
            SearchMatch::new(0, 1),
            SearchMatch::new(4, 5),
            SearchMatch::new(8, 9),
        ]);
        set.jump_to(1);

        set.next();
        set.previous();
        assert_eq!(set.current_index(), Some(1));

        set.previous();
        set.next();
        assert_eq!(set.current_index(), Some(1));
    }

    #[test]
    fn test_single_match_wraps_onto_itself() {
        let mut set = MatchSet::from_matches(vec![SearchMatch::new(5, 8)]);
        assert_eq!(set.next(), Some(SearchMatch::new(5, 8)));
        assert_eq!(set.previous(), Some(SearchMatch::new(5, 8)));
        assert_eq!(set.current_index(), Some(0));
    }

    #[test]
    fn test_jump_to_bounds() {
        let mut set = MatchSet::from_matches(vec![
            SearchMatch::new(0, 2),
            SearchMatch::new(4, 6),
        ]);
        assert_eq!(set.jump_to(1), Some(SearchMatch::new(4, 6)));
        assert_eq!(set.jump_to(2), None);
        assert_eq!(set.current_index(), Some(1));

        assert_eq!(set.jump_to_first(), Some(SearchMatch::new(0, 2)));
        assert_eq!(set.jump_to_last(), Some(SearchMatch::new(4, 6)));
    }

    #[test]
    fn test_jump_to_nearest() {
        let mut set = MatchSet::from_matches(vec![
            SearchMatch::new(0, 3),
            SearchMatch::new(10, 13),
            SearchMatch::new(20, 23),
        ]);

        assert_eq!(set.jump_to_nearest(5), Some(SearchMatch::new(10, 13)));
        assert_eq!(set.jump_to_nearest(10), Some(SearchMatch::new(10, 13)));

        // Nothing at or after the offset: wrap to the first match.
        assert_eq!(set.jump_to_nearest(50), Some(SearchMatch::new(0, 3)));
    }

    #[test]
    fn test_matches_in_range() {
        let set = MatchSet::from_matches(vec![
            SearchMatch::new(0, 3),
            SearchMatch::new(10, 13),
            SearchMatch::new(20, 23),
        ]);

        assert_eq!(set.matches_in_range(0, 5), vec![SearchMatch::new(0, 3)]);
        assert_eq!(
            set.matches_in_range(12, 21),
            vec![SearchMatch::new(10, 13), SearchMatch::new(20, 23)]
        );
        assert!(set.matches_in_range(4, 10).is_empty());
    }
}
