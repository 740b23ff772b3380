//! Free-time slot detection between fixed activities.
//!
//! Only gaps between two time-adjacent fixed activities are reported. The
//! stretch before the first and after the last fixed activity of the day is
//! never offered to the planner.

use serde::{Serialize, Serializer};

use crate::schedule::{is_fixed, Activity};
use crate::time;

/// A gap between two consecutive fixed activities, `[start, end)` in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    #[serde(rename = "start_time", serialize_with = "clock")]
    pub start: u32,
    #[serde(rename = "end_time", serialize_with = "clock")]
    pub end: u32,
    pub duration_minutes: u32,
    pub preceding_activity_name: String,
    pub following_activity_name: String,
}

fn clock<S: Serializer>(minutes: &u32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time::format_minutes(*minutes))
}

impl Slot {
    /// Create a slot. `end` must not precede `start`.
    pub fn new(
        start: u32,
        end: u32,
        preceding_activity_name: impl Into<String>,
        following_activity_name: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            duration_minutes: end.saturating_sub(start),
            preceding_activity_name: preceding_activity_name.into(),
            following_activity_name: following_activity_name.into(),
        }
    }

    pub fn start_time(&self) -> String {
        time::format_minutes(self.start)
    }

    pub fn end_time(&self) -> String {
        time::format_minutes(self.end)
    }

    /// Hour of the day (0-23) in which the slot starts.
    pub fn start_hour(&self) -> u32 {
        self.start / 60
    }
}

/// Find the gaps between consecutive fixed activities of one day.
///
/// # Returns
/// Slots ordered by start time
pub fn find_slots(day: &[Activity]) -> Vec<Slot> {
    let mut fixed: Vec<&Activity> = day.iter().filter(|a| is_fixed(a)).collect();
    // full key so equal starts pair up the same way whatever the input order
    fixed.sort_by(|a, b| {
        a.interval()
            .cmp(&b.interval())
            .then_with(|| a.name.cmp(&b.name))
    });

    fixed
        .windows(2)
        .filter_map(|pair| {
            let (_, prev_end) = pair[0].interval();
            let (next_start, _) = pair[1].interval();
            (next_start > prev_end)
                .then(|| Slot::new(prev_end, next_start, &pair[0].name, &pair[1].name))
        })
        .collect()
}
