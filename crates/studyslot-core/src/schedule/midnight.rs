//! Normalization of activities that cross midnight.
//!
//! The planner only looks at one day at a time, so a `Sleep` entry such as
//! `23:00–07:00` is split into two same-day entries before planning
//! (`23:00–24:00` and `00:00–07:00`) and joined back on save.

use super::{sort_day, Activity, WeekSchedule, WEEKDAYS};
use crate::time::{self, MINUTES_PER_DAY};

/// Split every wrapping activity into two same-day entries.
pub fn split_midnight(week: &WeekSchedule) -> WeekSchedule {
    let mut out = week.clone();
    for day in WEEKDAYS {
        let activities = out.day_mut(day);
        let mut split = Vec::with_capacity(activities.len() + 1);
        for activity in activities.drain(..) {
            match wrapping_bounds(&activity) {
                Some((start, end)) => {
                    let mut late = activity.clone();
                    late.start_time = time::format_minutes(start);
                    late.end_time = time::format_minutes(MINUTES_PER_DAY);
                    let mut early = activity;
                    early.start_time = time::format_minutes(0);
                    early.end_time = time::format_minutes(end);
                    split.push(early);
                    split.push(late);
                }
                None => split.push(activity),
            }
        }
        sort_day(&mut split);
        *activities = split;
    }
    out
}

/// Join `00:00–x` / `y–24:00` pairs of the same wrapping activity back into
/// one `y–x` entry.
pub fn merge_midnight(week: &WeekSchedule) -> WeekSchedule {
    let mut out = week.clone();
    for day in WEEKDAYS {
        let activities = out.day_mut(day);
        while let Some((early_idx, late_idx)) = find_split_pair(activities) {
            let early = activities.remove(early_idx);
            // removing the early entry shifts everything after it
            let late_idx = if early_idx < late_idx { late_idx - 1 } else { late_idx };
            activities[late_idx].end_time = early.end_time;
        }
        sort_day(activities);
    }
    out
}

fn wrapping_bounds(activity: &Activity) -> Option<(u32, u32)> {
    if !activity.category.may_wrap_midnight() {
        return None;
    }
    let start = time::parse_minutes(&activity.start_time)?;
    let end = time::parse_minutes(&activity.end_time)?;
    (end < start && start < MINUTES_PER_DAY).then_some((start, end))
}

fn find_split_pair(activities: &[Activity]) -> Option<(usize, usize)> {
    for (early_idx, early) in activities.iter().enumerate() {
        if !early.category.may_wrap_midnight()
            || time::parse_minutes(&early.start_time) != Some(0)
        {
            continue;
        }
        let Some(early_end) = time::parse_minutes(&early.end_time) else {
            continue;
        };
        let late = activities.iter().position(|late| {
            late.category == early.category
                && late.name == early.name
                && late.generated == early.generated
                && time::parse_minutes(&late.end_time) == Some(MINUTES_PER_DAY)
                && time::parse_minutes(&late.start_time).is_some_and(|s| s > early_end)
        });
        if let Some(late_idx) = late {
            return Some((early_idx, late_idx));
        }
    }
    None
}
