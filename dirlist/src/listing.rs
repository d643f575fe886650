//! Non-recursive directory enumeration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// List the names of the entries directly inside `dir`.
///
/// Includes files, subdirectories, and special entries; excludes the implicit
/// `.`/`..` references. Order is whatever the filesystem returns. Non-UTF-8
/// names are rendered lossily.
pub fn list_entries(dir: &Path) -> Result<Vec<String>> {
    let read_dir =
        fs::read_dir(dir).with_context(|| format!("read directory {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry =
            entry.with_context(|| format!("read directory entry in {}", dir.display()))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}
