//! Word position lookup
//!
//! Maps each word of an ordered list to its 0-based rank so the gap
//! analyzer can measure distances in the canonical ordering.

use rustc_hash::FxHashMap;

/// Rank lookup for one ordered word list
///
/// When a word appears more than once, the first occurrence wins and later
/// ones are silently shadowed. Built fresh per analysis.
#[derive(Debug, Clone, Default)]
pub struct PositionIndex {
    ranks: FxHashMap<String, usize>,
}

impl PositionIndex {
    /// Build an index over an ordered word list
    ///
    /// An empty input yields an empty index; lookups then simply miss.
    #[must_use]
    pub fn new(words: &[String]) -> Self {
        let mut ranks = FxHashMap::default();

        for (rank, word) in words.iter().enumerate() {
            ranks.entry(word.clone()).or_insert(rank);
        }

        Self { ranks }
    }

    /// Rank of a word, or `None` when it is not in the indexed list
    #[inline]
    #[must_use]
    pub fn rank(&self, word: &str) -> Option<usize> {
        self.ranks.get(word).copied()
    }

    /// Number of distinct indexed words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Check whether the index holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn ranks_follow_list_order() {
        let index = PositionIndex::new(&words(&["ant", "bee", "cat"]));

        assert_eq!(index.rank("ant"), Some(0));
        assert_eq!(index.rank("bee"), Some(1));
        assert_eq!(index.rank("cat"), Some(2));
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn missing_word_has_no_rank() {
        let index = PositionIndex::new(&words(&["ant", "bee"]));
        assert_eq!(index.rank("zzz"), None);
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let index = PositionIndex::new(&words(&["ant", "bee", "ant", "cat"]));

        // The later "ant" is shadowed by the earlier one
        assert_eq!(index.rank("ant"), Some(0));
        assert_eq!(index.rank("cat"), Some(3));
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn empty_list_builds_empty_index() {
        let index = PositionIndex::new(&[]);
        assert!(index.is_empty());
        assert_eq!(index.rank("ant"), None);
    }
}
