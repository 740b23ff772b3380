//! JSON schedule files.
//!
//! A schedule file is a JSON object keyed by day name. Activities that cross
//! midnight are split into two same-day entries on load and joined again on
//! save, so the planner never sees an entry whose end precedes its start.

use std::path::{Path, PathBuf};

use crate::error::{Result, ScheduleError};
use crate::schedule::{merge_midnight, split_midnight, WeekSchedule};

/// Where a week schedule is loaded from and saved to.
pub trait ScheduleStore {
    /// Load the week, normalized for planning.
    fn load(&self) -> Result<WeekSchedule>;

    /// Save a planned week.
    fn save(&self, week: &WeekSchedule) -> Result<()>;
}

/// Schedule stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonScheduleFile {
    path: PathBuf,
}

impl JsonScheduleFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a week from JSON text, without midnight normalization.
    pub fn parse(&self, content: &str) -> Result<WeekSchedule> {
        serde_json::from_str(content).map_err(|e| {
            ScheduleError::Malformed {
                path: self.path.clone(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

impl ScheduleStore for JsonScheduleFile {
    fn load(&self) -> Result<WeekSchedule> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScheduleError::NotFound(self.path.clone()).into()
            } else {
                crate::error::CoreError::Io(e)
            }
        })?;
        let week = self.parse(&content)?;
        Ok(split_midnight(&week))
    }

    fn save(&self, week: &WeekSchedule) -> Result<()> {
        let merged = merge_midnight(week);
        let content = serde_json::to_string_pretty(&merged)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
