//! # studyslot Core Library
//!
//! This library places automatically generated learning blocks into a weekly
//! time-blocked schedule, filling free time between fixed commitments.
//! The command-line front end is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Time**: `"HH:MM"` conversion and midnight-wrapping durations
//! - **Schedule**: activities, categories, the seven-day week, and the
//!   classification of activities as fixed, candidate, or generated
//! - **Planner**: slot finding, suitability scoring, block building, and
//!   greedy per-day allocation wrapped in a weekly pass
//! - **Storage**: TOML configuration and JSON schedule files
//!
//! ## Key Components
//!
//! - [`LearningPlanner`]: Planning entry point bound to a [`PlannerConfig`]
//! - [`WeekSchedule`]: The schedule value planned over
//! - [`Config`]: Application configuration management
//! - [`ScheduleStore`]: Trait for loading and saving schedules

pub mod error;
pub mod planner;
pub mod schedule;
pub mod storage;
pub mod time;

pub use error::{ConfigError, CoreError, ScheduleError, ValidationError};
pub use planner::{
    optimize_week, plan_week, DaySummary, LearningPlanner, PlannerConfig, ScoreAdjustment,
    ScoredSlot, Slot, SubjectPriority, WeekPlan,
};
pub use schedule::{Activity, ActivityClass, Category, DaySchedule, WeekSchedule, WEEKDAYS};
pub use storage::{Config, JsonScheduleFile, ScheduleStore};
