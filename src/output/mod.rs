//! Terminal output formatting
//!
//! Display utilities for hint phases and progress summaries. All printing
//! lives here; the hint engine only ever returns data.

pub mod display;
pub mod formatters;

pub use display::{
    print_hint_report, print_progress, print_session_banner, print_session_outro,
};
