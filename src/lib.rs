//! Spelling Bee Hints
//!
//! Progressive hints for the daily spelling bee. Compares the words you have
//! found with the day's full answer list and meters out what you're missing:
//! counts by word length, by leading letters, and the gaps around your words
//! in puzzle order.
//!
//! # Quick Start
//!
//! ```rust
//! use bee_hints::core::WordList;
//! use bee_hints::hints::HintSequencer;
//!
//! let answers = WordList::normalize(["ant", "bee", "cat", "dog", "eel"]);
//! let found = WordList::normalize(["bee", "dog"]);
//!
//! let mut hints = HintSequencer::new(&found, &answers);
//! while let Some(report) = hints.next_hint() {
//!     println!("{}", report.label);
//!     for line in &report.lines {
//!         println!("  {line}");
//!     }
//! }
//! ```

// Core domain types
pub mod core;

// Hint computation engine
pub mod hints;

// Word list sources
pub mod sources;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
