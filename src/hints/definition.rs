//! Hint strategy table
//!
//! Each hint is a record pairing a display phrase with the comparison
//! algorithm to run. The pipeline itself is a fixed, ordered table; there
//! is deliberately no way to register hints at runtime.

use crate::core::Criterion;

/// Which comparison algorithm a hint runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    /// Classify both lists under a criterion and report bucket shortfalls
    MissingCounts(Criterion),
    /// Walk the found words and report positional gaps
    PositionalGaps,
}

/// One entry of the hint pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintDefinition {
    /// Display phrase: the phase header, and the line prefix for
    /// missing-count hints
    pub label: &'static str,
    /// The algorithm this hint runs
    pub kind: HintKind,
}

/// The standard pipeline, in presentation order
pub const STANDARD_HINTS: [HintDefinition; 4] = [
    HintDefinition {
        label: "Number of letters",
        kind: HintKind::MissingCounts(Criterion::Length),
    },
    HintDefinition {
        label: "First letter",
        kind: HintKind::MissingCounts(Criterion::FirstLetter),
    },
    HintDefinition {
        label: "Gaps between found words",
        kind: HintKind::PositionalGaps,
    },
    HintDefinition {
        label: "First two letters",
        kind: HintKind::MissingCounts(Criterion::FirstTwoLetters),
    },
];
