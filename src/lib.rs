//! dirprune - prune date-named backup directories with GFS retention.
//!
//! Operators that produce one dated snapshot directory per day point this
//! tool at the parent directory and give it daily/weekly/monthly/yearly
//! quotas. The retention engine partitions the dated entries into a KEEP
//! set (each keep attributed to the rule and ordinal that claimed it) and
//! a PRUNE set, and the runner reports and removes the pruned directories.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod prune;
pub mod retention;
pub mod utils;

pub use error::{PruneError, Result};
