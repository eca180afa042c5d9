//! Positional gap analysis
//!
//! The hardest hint: walks the found words in canonical order and measures
//! how many unfound answers sit before the first one, between each adjacent
//! pair, and after the last one.

use crate::core::{PositionIndex, WordList};
use std::fmt;

/// One finding from gap analysis, produced in found-list order
///
/// Counts are signed on purpose: a duplicated found word makes the gap to
/// its twin come out as -1, and corrupt input is surfaced verbatim rather
/// than clamped or hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GapReport {
    /// A found word is absent from the answer list; analysis stops here
    Invalid { word: String },
    /// The first found word is also the first answer
    FirstConfirmed { word: String },
    /// The last found word is also the last answer
    LastConfirmed { word: String },
    /// Unfound answers before the first found word
    Before { count: isize, word: String },
    /// Unfound answers after the last found word
    After { count: isize, word: String },
    /// Unfound answers between two adjacent found words
    Between {
        count: isize,
        earlier: String,
        later: String,
    },
}

impl fmt::Display for GapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { word } => {
                write!(f, "*** {word} is not in the answer list ***")
            }
            Self::FirstConfirmed { word } => {
                write!(f, "*** {word} is the first word ***")
            }
            Self::LastConfirmed { word } => {
                write!(f, "*** {word} is the last word ***")
            }
            Self::Before { count, word } => {
                write!(f, "{count} {} before {word}", word_or_words(*count))
            }
            Self::After { count, word } => {
                write!(f, "{count} {} after {word}", word_or_words(*count))
            }
            Self::Between {
                count,
                earlier,
                later,
            } => {
                write!(
                    f,
                    "{count} {} between {earlier} and {later}",
                    word_or_words(*count)
                )
            }
        }
    }
}

fn word_or_words(count: isize) -> &'static str {
    if count == 1 { "word" } else { "words" }
}

/// Analyze the found words against the full answer list
///
/// Both lists must already be normalized. For each found word this reports
/// the gap to the start of the answers (first word only), to the next found
/// word (suppressed when zero), and to the end of the answers (last word
/// only); exact first/last matches become confirmation reports instead.
///
/// Validation is fail-fast: the first found word (or successor) missing
/// from the answers emits a single [`GapReport::Invalid`] and aborts the
/// remaining analysis. An empty found list yields no reports.
#[must_use]
pub fn analyze(found: &WordList, answers: &WordList) -> Vec<GapReport> {
    let index = PositionIndex::new(answers.words());
    let words = found.words();
    let mut reports = Vec::new();

    for (i, word) in words.iter().enumerate() {
        let next = words.get(i + 1);

        // Both the word and its successor must be real answers before any
        // gap for this pair is reported.
        let Some(rank) = index.rank(word) else {
            reports.push(GapReport::Invalid { word: word.clone() });
            return reports;
        };
        let next_ranked = match next {
            Some(next_word) => {
                let Some(next_rank) = index.rank(next_word) else {
                    reports.push(GapReport::Invalid {
                        word: next_word.clone(),
                    });
                    return reports;
                };
                Some((next_word, next_rank))
            }
            None => None,
        };

        let rank = rank as isize;

        if i == 0 {
            if rank == 0 {
                reports.push(GapReport::FirstConfirmed { word: word.clone() });
            } else {
                reports.push(GapReport::Before {
                    count: rank,
                    word: word.clone(),
                });
            }
        }

        match next_ranked {
            None => {
                // Last found word: measure the tail of the answer list
                let gap = (answers.len() as isize - 1) - rank;
                if gap == 0 {
                    reports.push(GapReport::LastConfirmed { word: word.clone() });
                } else {
                    reports.push(GapReport::After {
                        count: gap,
                        word: word.clone(),
                    });
                }
            }
            Some((next_word, next_rank)) => {
                // Adjacent found words need no hint
                let gap = next_rank as isize - rank - 1;
                if gap != 0 {
                    reports.push(GapReport::Between {
                        count: gap,
                        earlier: word.clone(),
                        later: next_word.clone(),
                    });
                }
            }
        }
    }

    reports
}
