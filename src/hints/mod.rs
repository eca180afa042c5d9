//! Hint computation engine
//!
//! This module turns the two normalized word lists into progressive hints:
//! bucket shortfalls, positional gaps, and the fixed pipeline that orders
//! them.

pub mod definition;
pub mod gaps;
pub mod missing;
mod sequencer;

pub use definition::{HintDefinition, HintKind, STANDARD_HINTS};
pub use gaps::{GapReport, analyze};
pub use missing::report_missing;
pub use sequencer::{HintReport, HintSequencer, run_hint};
