//! Word list loading
//!
//! Reads line-oriented word files and hands back normalized lists. Both the
//! player's found words and the day's answer list come through here.

use crate::core::WordList;
use std::fs;
use std::io;
use std::path::Path;

/// Load and normalize a word list from a file
///
/// One word per line, any case, surrounding whitespace and blank lines
/// tolerated. Normalization runs exactly once, here, before any hint code
/// sees the words.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use bee_hints::sources::load_word_list;
///
/// let found = load_word_list("found.txt").unwrap();
/// println!("You have {} words", found.len());
/// ```
pub fn load_word_list<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let content = fs::read_to_string(path)?;
    Ok(WordList::normalize(content.lines()))
}
