//! Command-line surface.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::error::{PruneError, Result};
use crate::retention::RetentionConfig;

#[derive(Parser, Debug)]
#[command(
    name = "dirprune",
    version,
    about = "Prune dated backup directories (YYYY-MM-DD) with GFS retention"
)]
pub struct Cli {
    /// Directory containing dated sub-directories
    pub base: PathBuf,

    /// Number of daily backups to keep
    #[arg(short = 'd', long = "keep-daily", value_name = "N", default_value_t = 0)]
    pub keep_daily: u32,

    /// Number of weekly backups to keep
    #[arg(short = 'w', long = "keep-weekly", value_name = "N", default_value_t = 0)]
    pub keep_weekly: u32,

    /// Number of monthly backups to keep
    #[arg(short = 'm', long = "keep-monthly", value_name = "N", default_value_t = 0)]
    pub keep_monthly: u32,

    /// Number of yearly backups to keep
    #[arg(short = 'y', long = "keep-yearly", value_name = "N", default_value_t = 0)]
    pub keep_yearly: u32,

    /// Show what would be removed without deleting
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Build the retention configuration, rejecting an all-zero policy
    /// before any scanning happens.
    pub fn retention(&self) -> Result<RetentionConfig> {
        let config = RetentionConfig {
            daily: self.keep_daily,
            weekly: self.keep_weekly,
            monthly: self.keep_monthly,
            yearly: self.keep_yearly,
        };
        if config.is_empty() {
            return Err(PruneError::Usage(
                "at least one of the --keep-* rules must be provided".to_string(),
            ));
        }
        Ok(config)
    }
}
