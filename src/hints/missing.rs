//! Missing-count reporting
//!
//! Compares the found and answer bucket counts and renders every non-zero
//! shortfall as one phrase.

use crate::core::BucketCounts;

/// Render the per-bucket shortfall between found and answer counts
///
/// Iterates the answer buckets in natural key order (numeric buckets
/// numerically, prefix buckets alphabetically). Buckets the player has
/// fully covered are skipped. A negative shortfall means the found list
/// holds more words of a bucket than exist at all; that is a symptom of a
/// corrupted found list and is printed verbatim, not clamped. Buckets that
/// only appear on the found side are ignored.
///
/// # Examples
/// ```
/// use bee_hints::core::{Criterion, classify};
/// use bee_hints::hints::report_missing;
///
/// let answers = vec!["ant".to_string(), "bee".to_string(), "cat".to_string()];
/// let found = vec!["bee".to_string()];
///
/// let lines = report_missing(
///     &classify(&found, Criterion::Length),
///     &classify(&answers, Criterion::Length),
///     "Number of letters",
/// );
/// assert_eq!(lines, vec!["Number of letters: 3 -- 2 missing"]);
/// ```
#[must_use]
pub fn report_missing(
    found: &BucketCounts,
    answers: &BucketCounts,
    phrase_prefix: &str,
) -> Vec<String> {
    answers
        .iter()
        .filter_map(|(key, &answer_count)| {
            let found_count = found.get(key).copied().unwrap_or(0);
            let missing = answer_count as isize - found_count as isize;
            (missing != 0).then(|| format!("{phrase_prefix}: {key} -- {missing} missing"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BucketKey, Criterion, classify};

    fn words(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn reports_shortfall_per_bucket() {
        let answers = classify(&words(&["ant", "bee", "cat"]), Criterion::Length);
        let found = classify(&words(&["bee"]), Criterion::Length);

        let lines = report_missing(&found, &answers, "Number of letters");
        assert_eq!(lines, vec!["Number of letters: 3 -- 2 missing"]);
    }

    #[test]
    fn identical_distributions_emit_nothing() {
        let answers = classify(&words(&["ant", "bee", "beetle"]), Criterion::FirstLetter);
        let found = classify(&words(&["ant", "bat", "bee"]), Criterion::FirstLetter);

        // Same shape (one a-word, two b-words), so nothing is missing
        let lines = report_missing(&found, &answers, "First letter");
        assert!(lines.is_empty());
    }

    #[test]
    fn fully_missing_buckets_are_reported() {
        let answers = classify(&words(&["ant", "bee", "cat"]), Criterion::FirstLetter);
        let found = classify(&words(&["bee"]), Criterion::FirstLetter);

        let lines = report_missing(&found, &answers, "First letter");
        assert_eq!(
            lines,
            vec![
                "First letter: a -- 1 missing",
                "First letter: c -- 1 missing",
            ]
        );
    }

    #[test]
    fn negative_shortfall_prints_verbatim() {
        let answers = classify(&words(&["bee"]), Criterion::Length);
        let found = classify(&words(&["cat", "dog", "eel"]), Criterion::Length);

        let lines = report_missing(&found, &answers, "Number of letters");
        assert_eq!(lines, vec!["Number of letters: 3 -- -2 missing"]);
    }

    #[test]
    fn numeric_buckets_report_in_numeric_order() {
        let answers = classify(
            &words(&["ab", "abcdefghij", "abcdefghi"]),
            Criterion::Length,
        );
        let found = BucketCounts::new();

        let lines = report_missing(&found, &answers, "Number of letters");
        assert_eq!(
            lines,
            vec![
                "Number of letters: 2 -- 1 missing",
                "Number of letters: 9 -- 1 missing",
                "Number of letters: 10 -- 1 missing",
            ]
        );
    }

    #[test]
    fn buckets_only_on_found_side_are_ignored() {
        let mut found = BucketCounts::new();
        found.insert(BucketKey::Prefix("zz".to_string()), 3);

        let answers = classify(&words(&["bee"]), Criterion::FirstTwoLetters);

        let lines = report_missing(&found, &answers, "First two letters");
        assert_eq!(lines, vec!["First two letters: be -- 1 missing"]);
    }

    #[test]
    fn empty_answer_buckets_emit_nothing() {
        let found = classify(&words(&["bee"]), Criterion::Length);
        let lines = report_missing(&found, &BucketCounts::new(), "Number of letters");
        assert!(lines.is_empty());
    }
}
