//! Filesystem access used by the scene builder.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// One item of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub is_directory: bool,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, is_directory: bool) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            name,
            is_directory,
        }
    }
}

/// List the entries of `directory`, sorted by name.
///
/// `is_directory` follows symlinks; entries whose metadata cannot be read are
/// listed as files so they still show up (as error cards).
pub fn list_entries(directory: &Path) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(directory)? {
        let dir_entry = dir_entry?;
        let path = dir_entry.path();
        let is_directory = fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false);
        entries.push(Entry {
            name: dir_entry.file_name().to_string_lossy().into_owned(),
            path,
            is_directory,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Read at most `max_bytes` from the start of the file at `path`.
///
/// The buffer grows with what is actually read, so a large cap on a small
/// file costs nothing.
pub fn read_prefix(path: &Path, max_bytes: usize) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    File::open(path)?
        .take(max_bytes as u64)
        .read_to_end(&mut buffer)?;
    Ok(buffer)
}
