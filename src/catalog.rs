//! Entry catalog: dated directory entries sorted most-recent-first.

use std::path::PathBuf;

use chrono::NaiveDate;

/// A candidate directory with a date-parseable name.
///
/// `name` is the unique key used across the catalog and the decision set;
/// `path` is the opaque handle to the underlying storage object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedEntry {
    pub date: NaiveDate,
    pub path: PathBuf,
    pub name: String,
}

impl DatedEntry {
    /// Parse a directory name of the exact form `YYYY-MM-DD`.
    ///
    /// Anything else (wrong shape, bad padding, invalid calendar date)
    /// yields `None`: such entries are not candidates for retention, not
    /// errors. The byte-shape check runs first because chrono's numeric
    /// fields accept leading whitespace and signs, which would let names
    /// like `" 024-01-01"` slip through as ancient dates.
    #[must_use]
    pub fn from_name(name: &str, path: PathBuf) -> Option<Self> {
        if !is_date_shaped(name.as_bytes()) {
            return None;
        }
        let date = NaiveDate::parse_from_str(name, "%Y-%m-%d").ok()?;
        Some(Self {
            date,
            path,
            name: name.to_string(),
        })
    }
}

/// Exactly four digits, dash, two digits, dash, two digits.
fn is_date_shaped(bytes: &[u8]) -> bool {
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && [0, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&idx| bytes[idx].is_ascii_digit())
}

/// Order entries by date descending. The sort is stable, so entries with
/// equal dates keep the order the supplier listed them in.
#[must_use]
pub fn catalog(mut entries: Vec<DatedEntry>) -> Vec<DatedEntry> {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}
