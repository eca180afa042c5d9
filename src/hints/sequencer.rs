//! Hint sequencing
//!
//! Drives the fixed hint pipeline one phase at a time. The sequencer owns
//! nothing but a cursor; every phase is recomputed fresh from the two
//! stable word lists, and the caller decides between phases whether to
//! continue.

use super::definition::{HintDefinition, HintKind, STANDARD_HINTS};
use super::{gaps, missing};
use crate::core::{WordList, classify};

/// The rendered outcome of one hint phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintReport {
    /// Phase label from the definition
    pub label: &'static str,
    /// 0-based position of this hint in the pipeline
    pub index: usize,
    /// Total number of hints in the pipeline
    pub total: usize,
    /// Human-readable lines; empty when the phase has nothing to say
    pub lines: Vec<String>,
}

/// Steps through the hint pipeline
///
/// `next_hint` yields one [`HintReport`] per call and `None` once the
/// pipeline is exhausted, so the sequence always terminates after the last
/// hint regardless of what the caller wants.
pub struct HintSequencer<'a> {
    found: &'a WordList,
    answers: &'a WordList,
    definitions: &'static [HintDefinition],
    cursor: usize,
}

impl<'a> HintSequencer<'a> {
    /// Create a sequencer over the standard four-hint pipeline
    #[must_use]
    pub fn new(found: &'a WordList, answers: &'a WordList) -> Self {
        Self::with_definitions(found, answers, &STANDARD_HINTS)
    }

    /// Create a sequencer over a custom pipeline
    #[must_use]
    pub fn with_definitions(
        found: &'a WordList,
        answers: &'a WordList,
        definitions: &'static [HintDefinition],
    ) -> Self {
        Self {
            found,
            answers,
            definitions,
            cursor: 0,
        }
    }

    /// Whether any hint phases remain
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.cursor < self.definitions.len()
    }

    /// Compute the next hint phase and advance the cursor
    pub fn next_hint(&mut self) -> Option<HintReport> {
        let definition = self.definitions.get(self.cursor)?;

        let report = HintReport {
            label: definition.label,
            index: self.cursor,
            total: self.definitions.len(),
            lines: run_hint(definition, self.found, self.answers),
        };

        self.cursor += 1;
        Some(report)
    }
}

/// Compute the report lines for a single hint definition
#[must_use]
pub fn run_hint(
    definition: &HintDefinition,
    found: &WordList,
    answers: &WordList,
) -> Vec<String> {
    match definition.kind {
        HintKind::MissingCounts(criterion) => {
            let found_counts = classify(found.words(), criterion);
            let answer_counts = classify(answers.words(), criterion);
            missing::report_missing(&found_counts, &answer_counts, definition.label)
        }
        HintKind::PositionalGaps => gaps::analyze(found, answers)
            .iter()
            .map(ToString::to_string)
            .collect(),
    }
}
