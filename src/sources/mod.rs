//! Word list sources
//!
//! The external collaborators: reading the player's found-words file and
//! picking the day's cached answer list. The hint engine never touches the
//! filesystem itself.

pub mod cache;
pub mod loader;

pub use cache::{dated_path, latest_cached, resolve_answer_file};
pub use loader::load_word_list;
