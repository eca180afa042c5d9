//! Word classification
//!
//! Partitions a word list into buckets under a criterion and counts
//! membership per bucket. Found and answer lists are classified separately
//! and compared downstream.

use super::criterion::{BucketKey, Criterion};
use std::collections::BTreeMap;

/// Count of words per bucket key
///
/// A `BTreeMap` so iteration follows `BucketKey`'s natural order, which is
/// the order missing-count reports are emitted in.
pub type BucketCounts = BTreeMap<BucketKey, usize>;

/// Partition words into buckets and count membership per bucket
///
/// Empty-string entries are excluded entirely; every other word lands in
/// exactly one bucket, so the counts always sum to the number of non-empty
/// input words.
///
/// # Examples
/// ```
/// use bee_hints::core::{BucketKey, Criterion, classify};
///
/// let words = vec!["ant".to_string(), "bee".to_string(), "beetle".to_string()];
/// let counts = classify(&words, Criterion::Length);
///
/// assert_eq!(counts.get(&BucketKey::Length(3)), Some(&2));
/// assert_eq!(counts.get(&BucketKey::Length(6)), Some(&1));
/// ```
#[must_use]
pub fn classify(words: &[String], criterion: Criterion) -> BucketCounts {
    let mut counts = BucketCounts::new();

    for word in words {
        if word.is_empty() {
            continue;
        }
        *counts.entry(criterion.key(word)).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn classify_by_length() {
        let list = words(&["ant", "bee", "beetle", "wasp"]);
        let counts = classify(&list, Criterion::Length);

        assert_eq!(counts.get(&BucketKey::Length(3)), Some(&2));
        assert_eq!(counts.get(&BucketKey::Length(4)), Some(&1));
        assert_eq!(counts.get(&BucketKey::Length(6)), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn classify_by_first_letter() {
        let list = words(&["ant", "bee", "beetle", "cat"]);
        let counts = classify(&list, Criterion::FirstLetter);

        assert_eq!(counts.get(&BucketKey::Prefix("a".to_string())), Some(&1));
        assert_eq!(counts.get(&BucketKey::Prefix("b".to_string())), Some(&2));
        assert_eq!(counts.get(&BucketKey::Prefix("c".to_string())), Some(&1));
    }

    #[test]
    fn classify_by_first_two_letters() {
        let list = words(&["bee", "beetle", "bat"]);
        let counts = classify(&list, Criterion::FirstTwoLetters);

        assert_eq!(counts.get(&BucketKey::Prefix("be".to_string())), Some(&2));
        assert_eq!(counts.get(&BucketKey::Prefix("ba".to_string())), Some(&1));
    }

    #[test]
    fn single_letter_word_counts_under_truncated_prefix() {
        let list = words(&["a", "ant"]);
        let counts = classify(&list, Criterion::FirstTwoLetters);

        assert_eq!(counts.get(&BucketKey::Prefix("a".to_string())), Some(&1));
        assert_eq!(counts.get(&BucketKey::Prefix("an".to_string())), Some(&1));
    }

    #[test]
    fn counts_sum_to_non_empty_word_count() {
        let list = words(&["ant", "", "bee", "beetle", "", "wasp"]);

        for criterion in [
            Criterion::Length,
            Criterion::FirstLetter,
            Criterion::FirstTwoLetters,
        ] {
            let counts = classify(&list, criterion);
            let total: usize = counts.values().sum();
            assert_eq!(total, 4, "criterion {criterion:?}");
        }
    }

    #[test]
    fn empty_entries_are_excluded() {
        let list = words(&["", ""]);
        let counts = classify(&list, Criterion::FirstLetter);
        assert!(counts.is_empty());
    }

    #[test]
    fn empty_list_yields_empty_counts() {
        let counts = classify(&[], Criterion::Length);
        assert!(counts.is_empty());
    }

    #[test]
    fn iteration_follows_natural_key_order() {
        let list = words(&[
            "a", "ab", "abcdefghij", "abcdefghi", "ab", "abcdefghij",
        ]);
        let counts = classify(&list, Criterion::Length);

        let lengths: Vec<BucketKey> = counts.keys().cloned().collect();
        assert_eq!(
            lengths,
            vec![
                BucketKey::Length(1),
                BucketKey::Length(2),
                BucketKey::Length(9),
                BucketKey::Length(10),
            ]
        );
    }
}
