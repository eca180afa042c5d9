//! Puzzle progress summary
//!
//! Measures how far along the player is without giving anything away
//! beyond counts.

use crate::core::{BucketKey, Criterion, WordList, classify};

/// How far along today's puzzle is
#[derive(Debug, Clone)]
pub struct ProgressSummary {
    pub found_count: usize,
    pub answer_count: usize,
    /// Found/total pairs per word length, ascending
    pub by_length: Vec<LengthProgress>,
    /// Found words that are not answers at all
    pub invalid: Vec<String>,
}

/// Found/total counts for one word length
#[derive(Debug, Clone)]
pub struct LengthProgress {
    pub length: usize,
    pub found: usize,
    pub total: usize,
}

impl ProgressSummary {
    /// Share of answers found, 0.0 to 100.0
    #[must_use]
    pub fn percent_found(&self) -> f64 {
        if self.answer_count == 0 {
            0.0
        } else {
            self.found_count as f64 * 100.0 / self.answer_count as f64
        }
    }
}

/// Summarize the found list against the answers
///
/// # Errors
///
/// Returns an error when the answer list is empty — there is no puzzle to
/// measure against.
pub fn compute_progress(
    found: &WordList,
    answers: &WordList,
) -> Result<ProgressSummary, String> {
    if answers.is_empty() {
        return Err("answer list is empty".to_string());
    }

    let found_counts = classify(found.words(), Criterion::Length);
    let answer_counts = classify(answers.words(), Criterion::Length);

    let by_length: Vec<LengthProgress> = answer_counts
        .iter()
        .filter_map(|(key, &total)| match key {
            BucketKey::Length(length) => Some(LengthProgress {
                length: *length,
                found: found_counts.get(key).copied().unwrap_or(0),
                total,
            }),
            BucketKey::Prefix(_) => None,
        })
        .collect();

    let invalid: Vec<String> = found
        .iter()
        .filter(|word| !answers.contains(word.as_str()))
        .cloned()
        .collect();

    Ok(ProgressSummary {
        found_count: found.len(),
        answer_count: answers.len(),
        by_length,
        invalid,
    })
}
