//! Core domain types for hint computation
//!
//! This module contains the fundamental domain types, free of any I/O.
//! All types here are pure, testable, and have clear list-algebra properties.

mod buckets;
mod criterion;
mod position;
mod word_list;

pub use buckets::{BucketCounts, classify};
pub use criterion::{BucketKey, Criterion};
pub use position::PositionIndex;
pub use word_list::WordList;
