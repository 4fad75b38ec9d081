//! Capability-based file access for Palate inputs, built on `cap-std` and
//! `camino`.
//!
//! Every helper resolves the parent directory of a path with ambient
//! authority and then works relative to that directory handle.
#![forbid(unsafe_code)]

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open the directory containing `path` and return it with the file name.
///
/// A bare file name resolves against the current directory.
///
/// # Errors
/// Fails when `path` has no file name or its parent cannot be opened.
pub fn open_parent_dir(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("path '{path}' has no file name")))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Report whether `path` exists and is a regular file.
///
/// # Errors
/// Propagates failures to open the parent directory or read metadata,
/// including [`io::ErrorKind::NotFound`] for a missing file.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_parent_dir(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Open `path` for reading.
///
/// # Errors
/// Fails when the parent directory or the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let (dir, name) = open_parent_dir(path)?;
    dir.open(name.as_str())
}
