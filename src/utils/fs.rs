//! Filesystem collaborators: catalog scanning, size measurement, removal.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::catalog::{self, DatedEntry};
use crate::error::{PruneError, Result};
use crate::prune::Store;

/// Enumerate the dated sub-directories of `base`, most recent first.
///
/// Non-directories and entries whose name is not a strict `YYYY-MM-DD`
/// date are skipped. Failing to read `base` itself is an error.
pub fn scan_dirs(base: &Path) -> Result<Vec<DatedEntry>> {
    let listing = fs::read_dir(base).map_err(|source| PruneError::Scan {
        path: base.to_path_buf(),
        source,
    })?;

    let mut found = Vec::new();
    for dir_entry in listing {
        let dir_entry = dir_entry.map_err(|source| PruneError::Scan {
            path: base.to_path_buf(),
            source,
        })?;
        let path = dir_entry.path();
        if !path.is_dir() {
            continue;
        }
        let file_name = dir_entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        match DatedEntry::from_name(name, path) {
            Some(entry) => found.push(entry),
            None => tracing::debug!(name, "skipping non-date entry"),
        }
    }
    Ok(catalog::catalog(found))
}

/// The real filesystem behind the [`Store`] seam.
pub struct FsStore;

impl Store for FsStore {
    fn size_of(&self, entry: &DatedEntry) -> Result<u64> {
        let mut total = 0u64;
        for item in WalkDir::new(&entry.path) {
            let item = item.map_err(|source| PruneError::Measure {
                name: entry.name.clone(),
                source: source.into(),
            })?;
            if item.file_type().is_file() {
                let meta = item.metadata().map_err(|source| PruneError::Measure {
                    name: entry.name.clone(),
                    source: source.into(),
                })?;
                total += meta.len();
            }
        }
        Ok(total)
    }

    fn remove(&self, entry: &DatedEntry) -> Result<()> {
        fs::remove_dir_all(&entry.path).map_err(|source| PruneError::Remove {
            name: entry.name.clone(),
            source,
        })
    }
}
