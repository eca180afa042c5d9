//! Bucketing criteria
//!
//! The closed set of pure word-to-key functions the classifier can group by.
//! Each hint that counts missing words picks one of these.

use std::fmt;

/// A derived key that groups words for counting
///
/// The derived `Ord` is the reporter's iteration order: numeric keys compare
/// numerically (length 10 sorts after 9, not between 1 and 2) and prefix
/// keys compare alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BucketKey {
    /// Word length in characters
    Length(usize),
    /// Leading one- or two-character prefix
    Prefix(String),
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(n) => write!(f, "{n}"),
            Self::Prefix(p) => write!(f, "{p}"),
        }
    }
}

/// A criterion for assigning a word to a bucket
///
/// Prefix criteria truncate: a word shorter than the requested prefix
/// buckets under whatever characters it has, so a one-letter word under
/// `FirstTwoLetters` lands under its single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// Group by word length
    Length,
    /// Group by first character
    FirstLetter,
    /// Group by leading two characters
    FirstTwoLetters,
}

impl Criterion {
    /// Compute the bucket key for a word
    ///
    /// # Examples
    /// ```
    /// use bee_hints::core::{BucketKey, Criterion};
    ///
    /// assert_eq!(Criterion::Length.key("ant"), BucketKey::Length(3));
    /// assert_eq!(
    ///     Criterion::FirstTwoLetters.key("a"),
    ///     BucketKey::Prefix("a".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn key(self, word: &str) -> BucketKey {
        match self {
            Self::Length => BucketKey::Length(word.chars().count()),
            Self::FirstLetter => BucketKey::Prefix(prefix(word, 1)),
            Self::FirstTwoLetters => BucketKey::Prefix(prefix(word, 2)),
        }
    }
}

/// First `n` characters of a word, or all of it when shorter
fn prefix(word: &str, n: usize) -> String {
    word.chars().take(n).collect()
}
