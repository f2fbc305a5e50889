//! File Storage
//!
//! Whole-file reads and atomic whole-file writes of plain text.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Read the entire file at `path` as UTF-8 text
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Write `content` verbatim to the file at `path`, replacing its contents.
///
/// The text goes to a temporary file next to the real target first and is
/// renamed over it only once fully written, so a failed write leaves the
/// previous contents untouched. Symlinks are followed and the target keeps its
/// permissions; a new file gets the same mode a plain create would give it.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    let (target, created) = match fs::symlink_metadata(path) {
        Ok(_) => {
            let target = fs::canonicalize(path)
                .with_context(|| format!("Failed to resolve file: {}", path.display()))?;
            (target, false)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path)
                .with_context(|| format!("Failed to create file: {}", path.display()))?;
            (path.to_path_buf(), true)
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to inspect file: {}", path.display()));
        }
    };

    let result = replace_contents(&target, content);
    if result.is_err() && created {
        let _ = fs::remove_file(&target);
    }
    result
}

fn replace_contents(target: &Path, content: &str) -> Result<()> {
    let permissions = fs::metadata(target)
        .with_context(|| format!("Failed to inspect file: {}", target.display()))?
        .permissions();
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in: {}", dir.display()))?;
    tmp.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write file: {}", target.display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("Failed to flush file: {}", target.display()))?;
    tmp.as_file()
        .set_permissions(permissions)
        .with_context(|| format!("Failed to set permissions on: {}", target.display()))?;
    tmp.persist(target)
        .with_context(|| format!("Failed to replace file: {}", target.display()))?;

    Ok(())
}
