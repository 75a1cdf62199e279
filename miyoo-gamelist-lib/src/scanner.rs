//! Directory scanner for ROM folders.
//!
//! Lists the immediate entries of a folder, keeps the ones whose names end
//! with a recognized extension, and turns each into a [`GameEntry`].
//! Entries keep the order the filesystem returned them in.

use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::CatalogError;

/// One `<game>` record in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntry {
    /// Path relative to the ROM folder (e.g., "./Mario.z64").
    pub path: String,
    /// Display name: the filename without its final extension.
    pub name: String,
}

impl GameEntry {
    /// Build the entry for a filename found in the ROM folder.
    pub fn from_filename(filename: &str) -> Self {
        Self {
            path: format!("./{}", filename),
            name: strip_extension(filename).to_string(),
        }
    }
}

/// List the immediate entries of `folder` by name, in listing order.
///
/// Subdirectories are listed like files. Names are returned raw; UTF-8
/// checking happens in [`filter_by_extension`].
pub fn scan(folder: &Path) -> Result<Vec<OsString>, CatalogError> {
    let entries = std::fs::read_dir(folder).map_err(|source| CatalogError::ReadDir {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CatalogError::ReadEntry {
            path: folder.to_path_buf(),
            source,
        })?;
        names.push(entry.file_name());
    }

    log::debug!("{} entries in {}", names.len(), folder.display());
    Ok(names)
}

/// Keep names ending with one of `extensions` (case-sensitive).
///
/// The suffix is matched on the raw name. A non UTF-8 name that does not
/// match is skipped; one that matches fails with
/// [`CatalogError::InvalidFilename`], since it cannot be written to the
/// catalog.
pub fn filter_by_extension<S: AsRef<str>>(
    folder: &Path,
    filenames: Vec<OsString>,
    extensions: &[S],
) -> Result<Vec<String>, CatalogError> {
    let mut kept = Vec::new();
    for raw in filenames {
        let matches = has_matching_extension(&raw, extensions);
        match raw.into_string() {
            Ok(name) if matches => kept.push(name),
            Ok(name) => log::debug!("Ignoring {}", name),
            Err(raw) if matches => {
                return Err(CatalogError::InvalidFilename {
                    folder: folder.to_path_buf(),
                    name: raw.to_string_lossy().into_owned(),
                });
            }
            Err(raw) => log::warn!("Skipping non UTF-8 filename: {}", raw.to_string_lossy()),
        }
    }
    Ok(kept)
}

/// Turn filtered filenames into catalog entries, preserving order.
pub fn build_entries(filenames: &[String]) -> Vec<GameEntry> {
    filenames
        .iter()
        .map(|name| GameEntry::from_filename(name))
        .collect()
}

/// Normalize user-supplied extensions so each starts with a dot.
pub fn normalize_extensions<S: AsRef<str>>(extensions: &[S]) -> Vec<String> {
    extensions
        .iter()
        .map(|e| e.as_ref().trim())
        .filter(|e| !e.is_empty())
        .map(|e| {
            if e.starts_with('.') {
                e.to_string()
            } else {
                format!(".{}", e)
            }
        })
        .collect()
}

fn has_matching_extension<S: AsRef<str>>(name: &OsStr, extensions: &[S]) -> bool {
    let raw = name.as_encoded_bytes();
    extensions
        .iter()
        .any(|ext| raw.ends_with(ext.as_ref().as_bytes()))
}

/// Strip the final `.ext` segment from a filename.
///
/// Leading dots belong to the name, so `.z64` is returned unchanged.
fn strip_extension(filename: &str) -> &str {
    let leading = filename.len() - filename.trim_start_matches('.').len();
    match filename[leading..].rfind('.') {
        Some(idx) => &filename[..leading + idx],
        None => filename,
    }
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
