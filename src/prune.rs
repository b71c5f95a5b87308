//! Reporting and deletion over a decision set.
//!
//! The engine itself never touches the filesystem; measurement and removal
//! go through the [`Store`] trait so the run loop can be exercised without
//! real directories.

use std::io::{self, Write};

use crate::catalog::DatedEntry;
use crate::cli::Cli;
use crate::error::Result;
use crate::retention::{Decision, RetentionConfig, decide};
use crate::utils::format::format_size;
use crate::utils::fs::{FsStore, scan_dirs};

/// Injected storage capabilities: size measurement and removal.
pub trait Store {
    /// Recursive byte-sum of the entry's storage object.
    fn size_of(&self, entry: &DatedEntry) -> Result<u64>;

    /// Remove the storage object. Irreversible.
    fn remove(&self, entry: &DatedEntry) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub scanned: usize,
    pub kept: usize,
    pub removed: usize,
    pub reclaimed_bytes: u64,
}

/// Entry point for the CLI: scan, decide, report, delete.
pub fn run(cli: &Cli) -> Result<Summary> {
    let config = cli.retention()?;
    let entries = scan_dirs(&cli.base)?;
    tracing::debug!(candidates = entries.len(), "scanned catalog");

    let mut out = io::stdout().lock();
    execute(&entries, &config, &FsStore, &mut out, cli.dry_run)
}

/// Walk the catalog in order, print one line per entry, and remove pruned
/// directories through `store` unless `dry_run` is set.
///
/// Each PRUNE line is written before the removal it announces, so partial
/// completion after a removal failure is visible from the output already
/// printed. Sizes are measured in dry-run mode too.
pub fn execute<S: Store, W: Write>(
    entries: &[DatedEntry],
    config: &RetentionConfig,
    store: &S,
    out: &mut W,
    dry_run: bool,
) -> Result<Summary> {
    let decisions = decide(entries, config);
    let prefix = if dry_run { "(DRYRUN) " } else { "" };
    let mut summary = Summary {
        scanned: entries.len(),
        ..Summary::default()
    };

    for entry in entries {
        match decisions.get(&entry.name) {
            Some(Decision::Kept { rule, ordinal }) => {
                writeln!(out, "{prefix}KEEP {} (rule: {rule} #{ordinal})", entry.name)?;
                summary.kept += 1;
            }
            _ => {
                let size = store.size_of(entry)?;
                summary.removed += 1;
                summary.reclaimed_bytes += size;
                writeln!(out, "{prefix}PRUNE {} ({})", entry.name, format_size(size))?;
                if !dry_run {
                    store.remove(entry)?;
                    tracing::debug!(name = %entry.name, size, "removed directory");
                }
            }
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "{prefix}Removed {} directories totalling {}.",
        summary.removed,
        format_size(summary.reclaimed_bytes),
    )?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;

    use super::*;
    use crate::catalog::catalog;

    /// In-memory store: fixed per-entry sizes, records removals.
    struct MemStore {
        size: u64,
        removed: RefCell<Vec<String>>,
    }

    impl MemStore {
        fn new(size: u64) -> Self {
            Self {
                size,
                removed: RefCell::new(Vec::new()),
            }
        }
    }

    impl Store for MemStore {
        fn size_of(&self, _entry: &DatedEntry) -> Result<u64> {
            Ok(self.size)
        }

        fn remove(&self, entry: &DatedEntry) -> Result<()> {
            self.removed.borrow_mut().push(entry.name.clone());
            Ok(())
        }
    }

    fn entries(names: &[&str]) -> Vec<DatedEntry> {
        catalog(
            names
                .iter()
                .map(|name| DatedEntry::from_name(name, PathBuf::from(name)).unwrap())
                .collect(),
        )
    }

    fn run_to_string(
        entries: &[DatedEntry],
        config: &RetentionConfig,
        store: &MemStore,
        dry_run: bool,
    ) -> (String, Summary) {
        let mut out = Vec::new();
        let summary = execute(entries, config, store, &mut out, dry_run).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn reports_and_removes_in_catalog_order() {
        let entries = entries(&["2024-01-01", "2024-01-02", "2024-01-03"]);
        let config = RetentionConfig {
            daily: 2,
            ..RetentionConfig::default()
        };
        let store = MemStore::new(2048);
        let (output, summary) = run_to_string(&entries, &config, &store, false);

        assert_eq!(
            output,
            "KEEP 2024-01-03 (rule: daily #1)\n\
             KEEP 2024-01-02 (rule: daily #2)\n\
             PRUNE 2024-01-01 (2.0 KiB)\n\
             \n\
             Removed 1 directories totalling 2.0 KiB.\n",
        );
        assert_eq!(*store.removed.borrow(), ["2024-01-01"]);
        assert_eq!(
            summary,
            Summary {
                scanned: 3,
                kept: 2,
                removed: 1,
                reclaimed_bytes: 2048,
            },
        );
    }

    #[test]
    fn dry_run_prefixes_every_line_and_removes_nothing() {
        let entries = entries(&["2024-01-01", "2024-01-02"]);
        let config = RetentionConfig {
            daily: 1,
            ..RetentionConfig::default()
        };
        let store = MemStore::new(1024);
        let (output, summary) = run_to_string(&entries, &config, &store, true);

        assert_eq!(
            output,
            "(DRYRUN) KEEP 2024-01-02 (rule: daily #1)\n\
             (DRYRUN) PRUNE 2024-01-01 (1.0 KiB)\n\
             \n\
             (DRYRUN) Removed 1 directories totalling 1.0 KiB.\n",
        );
        assert!(store.removed.borrow().is_empty());
        assert_eq!(summary.removed, 1);
        assert_eq!(summary.reclaimed_bytes, 1024);
    }

    #[test]
    fn empty_catalog_prints_only_the_trailer() {
        let store = MemStore::new(0);
        let config = RetentionConfig {
            daily: 1,
            ..RetentionConfig::default()
        };
        let (output, summary) = run_to_string(&[], &config, &store, false);

        assert_eq!(output, "\nRemoved 0 directories totalling 0.0 B.\n");
        assert_eq!(summary, Summary::default());
    }
}
