//! Normalized word lists
//!
//! A `WordList` is the canonical form both the player's found words and the
//! day's answer list are reduced to before any hint computation runs.

use std::slice;

/// An ordered list of lowercase, whitespace-free, non-empty words
///
/// Normalization is the only way to build one, so every `WordList` is sorted
/// case-insensitively. Duplicate words are kept: collapsing them is the
/// positional index's concern, not the normalizer's.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Normalize raw lines into an ordered word list
    ///
    /// Lowercases each entry, strips surrounding whitespace, drops blank
    /// entries, and sorts case-insensitively. Idempotent: normalizing the
    /// words of a `WordList` reproduces it exactly.
    ///
    /// # Examples
    /// ```
    /// use bee_hints::core::WordList;
    ///
    /// let list = WordList::normalize(["  Bee ", "", "ant", "CAT"]);
    /// assert_eq!(list.words(), &["ant", "bee", "cat"]);
    /// ```
    pub fn normalize<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = raw
            .into_iter()
            .filter_map(|line| {
                let trimmed = line.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_lowercase())
                }
            })
            .collect();

        // Everything is lowercase by now, so a plain stable sort is the
        // case-insensitive lexicographic order the analysis expects.
        words.sort();

        Self { words }
    }

    /// Get the words in canonical order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the list (duplicates included)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the list has no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the words in canonical order
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.words.iter()
    }

    /// Check membership by binary search over the sorted words
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
