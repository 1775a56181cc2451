//! Word list sources.
//!
//! Turns a text resource into raw lines for [`WordStore`](crate::WordStore):
//! - **Embedded**: the bundled list compiled in from `data/words.txt`.
//! - **File-based**: any path, opened with [`open`] or read whole with [`read_file`].
//! - **Reader**: any [`BufRead`], drained with [`read_lines`].
//!
//! Whitespace around each line is trimmed and blank lines are dropped here, so the store
//! only ever sees one candidate word per line.

use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Bundled default word list, one word per line.
pub static EMBEDDED_WORDS: &str = include_str!("../data/words.txt");

/// Lines of the bundled word list.
pub fn embedded_lines() -> impl Iterator<Item = &'static str> {
    EMBEDDED_WORDS.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// Opens a word list file for buffered reading.
///
/// # Errors
///
/// [`Error::NotFound`] if nothing exists at `path`, [`Error::Unreadable`] if `path` is a
/// directory or cannot be opened for any other reason.
pub fn open(path: impl AsRef<Path>) -> Result<BufReader<File>> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Opening word list");

    let metadata = fs::metadata(path).map_err(|e| Error::open_failed(path, e))?;
    if metadata.is_dir() {
        return Err(Error::open_failed(path, io::Error::other("is a directory")));
    }

    File::open(path)
        .map(BufReader::new)
        .map_err(|e| Error::open_failed(path, e))
}

/// Opens `path` and reads every non-blank line from it, trimmed.
///
/// # Errors
///
/// As [`open`]; a failure part way through the read is also [`Error::Unreadable`],
/// carrying `path`.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    read_lines(open(path)?).map_err(|e| match e {
        Error::Io(source) => Error::Unreadable {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Reads every non-blank line from `reader`, trimmed.
///
/// Nothing is returned unless the whole source was read; the first I/O or UTF-8 error
/// aborts the read.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_owned());
        }
    }
    Ok(lines)
}
