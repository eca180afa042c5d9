//! Command implementations

pub mod progress;
pub mod reveal;
pub mod session;

pub use progress::{LengthProgress, ProgressSummary, compute_progress};
pub use reveal::run_reveal;
pub use session::run_session;
