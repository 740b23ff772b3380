//! Schedule types: activities, categories, and the seven-day week.
//!
//! A week is stored as a flat JSON object keyed by day name, each day an
//! ordered list of activities with `"HH:MM"` start and end times.

mod classify;
mod midnight;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::time::{self, MINUTES_PER_DAY};

pub use classify::{
    classify, is_fixed, is_learning_candidate_marker, ActivityClass, LEARNING_SLOT_MARKER,
};
pub use midnight::{merge_midnight, split_midnight};

/// Category of a scheduled activity.
///
/// Serialized with the exact labels used in schedule files. Labels this
/// version does not know deserialize as [`Category::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    University,
    Work,
    Sleep,
    Meal,
    Routine,
    Travel,
    Break,
    Flexible,
    #[serde(rename = "Study_Learning")]
    StudyLearning,
    #[serde(rename = "Study_Review")]
    StudyReview,
    #[serde(rename = "Study_Practice")]
    StudyPractice,
    #[serde(rename = "Free_Time")]
    FreeTime,
    Buffer,
    Housework,
    Language,
    #[serde(other)]
    Other,
}

impl Category {
    /// Label as written in schedule files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::University => "University",
            Category::Work => "Work",
            Category::Sleep => "Sleep",
            Category::Meal => "Meal",
            Category::Routine => "Routine",
            Category::Travel => "Travel",
            Category::Break => "Break",
            Category::Flexible => "Flexible",
            Category::StudyLearning => "Study_Learning",
            Category::StudyReview => "Study_Review",
            Category::StudyPractice => "Study_Practice",
            Category::FreeTime => "Free_Time",
            Category::Buffer => "Buffer",
            Category::Housework => "Housework",
            Category::Language => "Language",
            Category::Other => "Other",
        }
    }

    /// Whether an activity of this category may run past midnight.
    pub fn may_wrap_midnight(&self) -> bool {
        matches!(self, Category::Sleep)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub start_time: String, // HH:MM
    pub end_time: String,   // HH:MM
    pub name: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// True only for blocks produced by the planner.
    #[serde(default)]
    pub generated: bool,
}

impl Activity {
    /// Create a human-entered activity.
    pub fn new(
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        name: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            name: name.into(),
            category,
            details: None,
            generated: false,
        }
    }

    /// Attach free-text details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn start_minutes(&self) -> u32 {
        time::to_minutes(&self.start_time)
    }

    pub fn end_minutes(&self) -> u32 {
        time::to_minutes(&self.end_time)
    }

    /// Duration in minutes, wrapping past midnight when the end precedes the start.
    pub fn duration_minutes(&self) -> Option<u32> {
        time::span_minutes(self.start_minutes(), self.end_minutes())
    }

    /// The part of this activity that falls on its own day, as `[start, end)`
    /// in minutes. An activity that wraps past midnight occupies the rest of
    /// the day; one whose end equals its start is empty.
    pub fn interval(&self) -> (u32, u32) {
        let start = self.start_minutes();
        let end = self.end_minutes();
        if end < start {
            (start, MINUTES_PER_DAY)
        } else {
            (start, end)
        }
    }

    /// Check if this activity overlaps with `[start, end)`.
    pub fn overlaps(&self, start: u32, end: u32) -> bool {
        let (own_start, own_end) = self.interval();
        own_start < end && own_end > start
    }
}

/// Activities of one day, kept ordered by start time.
pub type DaySchedule = Vec<Activity>;

/// Sort a day's activities by start time. Ties keep their existing order.
pub fn sort_day(day: &mut [Activity]) {
    day.sort_by_key(|a| a.start_minutes());
}

/// The seven days in schedule order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Day name used as the key in schedule files.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A full week. All seven days are always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    #[serde(rename = "Monday", alias = "monday", default)]
    pub monday: DaySchedule,
    #[serde(rename = "Tuesday", alias = "tuesday", default)]
    pub tuesday: DaySchedule,
    #[serde(rename = "Wednesday", alias = "wednesday", default)]
    pub wednesday: DaySchedule,
    #[serde(rename = "Thursday", alias = "thursday", default)]
    pub thursday: DaySchedule,
    #[serde(rename = "Friday", alias = "friday", default)]
    pub friday: DaySchedule,
    #[serde(rename = "Saturday", alias = "saturday", default)]
    pub saturday: DaySchedule,
    #[serde(rename = "Sunday", alias = "sunday", default)]
    pub sunday: DaySchedule,
}

impl WeekSchedule {
    /// Create an empty week.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(&self, day: Weekday) -> &DaySchedule {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DaySchedule {
        match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }

    /// Iterate over `(day, activities)` from Monday to Sunday.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> {
        WEEKDAYS.into_iter().map(move |day| (day, self.day(day)))
    }

    /// Copy of this week with every generated block removed.
    pub fn without_generated(&self) -> WeekSchedule {
        let mut week = self.clone();
        for day in WEEKDAYS {
            week.day_mut(day).retain(|a| !a.generated);
        }
        week
    }

    /// Number of generated blocks across the week.
    pub fn generated_count(&self) -> usize {
        self.days()
            .map(|(_, activities)| activities.iter().filter(|a| a.generated).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_serialization() {
        let activity = Activity::new("09:30", "12:00", "Lecture", Category::University)
            .with_details("Room 101");

        let json = serde_json::to_string(&activity).unwrap();
        let decoded: Activity = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, activity);
        assert!(json.contains("\"University\""));
    }

    #[test]
    fn unknown_category_becomes_other() {
        let json = r#"{"start_time":"10:00","end_time":"11:00","name":"Gym","category":"Sports"}"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.category, Category::Other);
        assert!(!activity.generated);
        assert!(activity.details.is_none());
    }

    #[test]
    fn underscore_categories_use_file_labels() {
        let json = r#"{"start_time":"10:00","end_time":"11:00","name":"x","category":"Free_Time"}"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.category, Category::FreeTime);
        assert_eq!(Category::StudyLearning.to_string(), "Study_Learning");
    }

    #[test]
    fn interval_clips_wrapping_activity_at_midnight() {
        let sleep = Activity::new("23:00", "07:00", "Sleep", Category::Sleep);
        assert_eq!(sleep.interval(), (1380, 1440));
        assert_eq!(sleep.duration_minutes(), Some(480));
        assert!(sleep.overlaps(1400, 1410));
        assert!(!sleep.overlaps(300, 400));
    }

    #[test]
    fn week_missing_days_deserialize_empty() {
        let json = r#"{"Monday":[{"start_time":"08:00","end_time":"09:00","name":"Breakfast","category":"Meal"}]}"#;
        let week: WeekSchedule = serde_json::from_str(json).unwrap();
        assert_eq!(week.monday.len(), 1);
        assert!(week.sunday.is_empty());
        assert_eq!(week.days().count(), 7);
    }

    #[test]
    fn without_generated_keeps_human_entries() {
        let mut week = WeekSchedule::new();
        let mut block = Activity::new("12:00", "13:00", "Study", Category::StudyLearning);
        block.generated = true;
        week.friday = vec![
            Activity::new("08:00", "09:00", "Breakfast", Category::Meal),
            block,
        ];

        let stripped = week.without_generated();
        assert_eq!(week.generated_count(), 1);
        assert_eq!(stripped.generated_count(), 0);
        assert_eq!(stripped.friday.len(), 1);
    }

    #[test]
    fn sort_day_is_stable() {
        let mut day = vec![
            Activity::new("10:00", "11:00", "b", Category::Work),
            Activity::new("08:00", "09:00", "a", Category::Meal),
            Activity::new("10:00", "10:30", "c", Category::Flexible),
        ];
        sort_day(&mut day);
        let names: Vec<_> = day.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
