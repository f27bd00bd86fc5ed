// Cache store for reading and writing puzzle inputs.
// Entries are raw text and never expire once written.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::Result;

/// Read a cached puzzle input.
///
/// Returns `Ok(None)` when nothing is cached yet. A path that exists but is not a
/// regular file is an error: the entry is considered corrupt and is neither read
/// nor overwritten.
pub fn read_input(path: &Path) -> Result<Option<String>> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    if !metadata.is_file() {
        let kind = if metadata.is_dir() {
            io::ErrorKind::IsADirectory
        } else {
            io::ErrorKind::InvalidInput
        };
        return Err(io::Error::new(
            kind,
            format!("cache entry {} is not a regular file", path.display()),
        )
        .into());
    }

    let contents = fs::read_to_string(path)?;
    Ok(Some(contents))
}

/// Write raw text to the cache, creating parent directories.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    // Write atomically via temp file; dropping it on any error removes it
    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(text.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    Ok(())
}
