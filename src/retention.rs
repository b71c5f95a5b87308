//! GFS retention engine.
//!
//! Given a date-descending catalog and per-period keep quotas, partition
//! the entries into kept and pruned. Rules run in a fixed order; an entry
//! claimed by an earlier rule is never reconsidered by a later one.

use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::catalog::DatedEntry;

/// Retention rule tiers, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RetentionRule {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RetentionRule {
    /// Evaluation order is fixed: daily first, yearly last.
    pub const ALL: [Self; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Yearly];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Identify the period bucket a date falls into under this rule.
    ///
    /// Weeks use the ISO week calendar, so a late-December date can map
    /// into week 01 of the following ISO year.
    #[must_use]
    pub fn period_key(self, date: NaiveDate) -> String {
        match self {
            Self::Daily => date.format("%Y-%m-%d").to_string(),
            Self::Weekly => {
                let week = date.iso_week();
                format!("{:04}-W{:02}", week.year(), week.week())
            }
            Self::Monthly => date.format("%Y-%m").to_string(),
            Self::Yearly => format!("{:04}", date.year()),
        }
    }
}

impl fmt::Display for RetentionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keep quotas per rule tier. A quota of 0 disables that tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetentionConfig {
    pub daily: u32,
    pub weekly: u32,
    pub monthly: u32,
    pub yearly: u32,
}

impl RetentionConfig {
    #[must_use]
    pub const fn keep_count(&self, rule: RetentionRule) -> u32 {
        match rule {
            RetentionRule::Daily => self.daily,
            RetentionRule::Weekly => self.weekly,
            RetentionRule::Monthly => self.monthly,
            RetentionRule::Yearly => self.yearly,
        }
    }

    /// True when no rule would retain anything.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.daily == 0 && self.weekly == 0 && self.monthly == 0 && self.yearly == 0
    }
}

/// The verdict for one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Retained by `rule`, as its `ordinal`-th keep (1-based).
    Kept { rule: RetentionRule, ordinal: u32 },
    Pruned,
}

impl Decision {
    #[must_use]
    pub const fn is_kept(&self) -> bool {
        matches!(self, Self::Kept { .. })
    }
}

/// Classify every entry as kept or pruned.
///
/// `entries` must be sorted date-descending (see [`crate::catalog::catalog`]);
/// walking in that order means each period bucket is represented by its most
/// recent entry. An entry already kept by an earlier rule still advances the
/// period tracking of later rules, so a second entry in the same period is
/// skipped for that rule rather than counted. Pure and deterministic.
#[must_use]
pub fn decide(entries: &[DatedEntry], config: &RetentionConfig) -> HashMap<String, Decision> {
    let mut decisions: HashMap<String, Decision> = HashMap::with_capacity(entries.len());

    for rule in RetentionRule::ALL {
        let quota = config.keep_count(rule);
        if quota == 0 {
            continue;
        }
        let mut last_period: Option<String> = None;
        let mut counter = 0u32;
        for entry in entries {
            let period = rule.period_key(entry.date);
            if last_period.as_deref() != Some(period.as_str()) {
                last_period = Some(period);
                if !decisions.contains_key(&entry.name) {
                    counter += 1;
                    decisions.insert(
                        entry.name.clone(),
                        Decision::Kept {
                            rule,
                            ordinal: counter,
                        },
                    );
                    if counter == quota {
                        break;
                    }
                }
            }
        }
    }

    for entry in entries {
        decisions
            .entry(entry.name.clone())
            .or_insert(Decision::Pruned);
    }
    decisions
}
