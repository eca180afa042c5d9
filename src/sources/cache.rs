//! Daily answer cache
//!
//! The scrape that produces the day's answer list runs elsewhere; what
//! lands here is one text file per day, named `<YYYY-MM-DD>.txt`, inside a
//! cache directory. This module only decides which cached file a run
//! should read.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Path of the cached answer file for one date
#[must_use]
pub fn dated_path(cache_dir: &Path, date: &str) -> PathBuf {
    cache_dir.join(format!("{date}.txt"))
}

/// Most recent cached answer file, judged by file name
///
/// ISO dates sort lexicographically in chronological order, so the greatest
/// `*.txt` stem in the cache directory is the newest cached day. Returns
/// `Ok(None)` when the directory holds no answer files.
///
/// # Errors
///
/// Returns an I/O error when the cache directory cannot be read.
pub fn latest_cached(cache_dir: &Path) -> io::Result<Option<PathBuf>> {
    let mut newest: Option<PathBuf> = None;

    for entry in fs::read_dir(cache_dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "txt") {
            continue;
        }

        let is_newer = match &newest {
            None => true,
            Some(best) => path.file_stem() > best.file_stem(),
        };
        if is_newer {
            newest = Some(path);
        }
    }

    Ok(newest)
}

/// Decide which answer file a run should load
///
/// An explicitly given path wins; otherwise a requested date selects its
/// cache file; otherwise the newest cached day is used.
///
/// # Errors
///
/// Returns an I/O error when the cache directory cannot be read, or a
/// `NotFound` error when no answer file can be chosen at all.
pub fn resolve_answer_file(
    explicit: Option<&Path>,
    cache_dir: &Path,
    date: Option<&str>,
) -> io::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(date) = date {
        return Ok(dated_path(cache_dir, date));
    }

    latest_cached(cache_dir)?.ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("no cached answer lists under {}", cache_dir.display()),
        )
    })
}
