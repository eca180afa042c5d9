//! Reveal command
//!
//! Every hint phase at once, no gating. For players who have given up on
//! suspense but not on the puzzle.

use crate::core::WordList;
use crate::hints::HintSequencer;
use crate::output::print_hint_report;

/// Print every hint phase without pausing between them
pub fn run_reveal(found: &WordList, answers: &WordList) {
    let mut sequencer = HintSequencer::new(found, answers);

    while let Some(report) = sequencer.next_hint() {
        print_hint_report(&report);
    }
    println!();
}
