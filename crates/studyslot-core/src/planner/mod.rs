//! Automatic placement of learning blocks into a weekly schedule.
//!
//! The pipeline per day:
//! - Finds free slots between consecutive fixed activities
//! - Scores each slot for suitability (0-100)
//! - Greedily fills the best slots within the daily budget and block cap
//! - Merges the generated blocks back into the day, sorted by start time
//!
//! Planning is a pure function of `(schedule, config)`: nothing is persisted
//! between calls and the input schedule is never modified.

mod allocator;
mod block;
mod config;
mod score;
mod slot;

use chrono::Weekday;

use crate::schedule::{Activity, WeekSchedule};

pub use allocator::{
    allocate_day, optimize_week, plan_week, score_day, DayPlan, DaySummary, WeekPlan,
};
pub use block::build_block;
pub use config::{PlannerConfig, SubjectPriority, DEFAULT_SUBJECT};
pub use score::{
    score_slot, ScoreAdjustment, ScoredSlot, HIGH_LOAD_KEYWORDS, TRANSITION_KEYWORDS,
};
pub use slot::{find_slots, Slot};

/// Learning block planner bound to one configuration.
pub struct LearningPlanner {
    config: PlannerConfig,
}

impl LearningPlanner {
    /// Create a planner with default config
    pub fn new() -> Self {
        Self {
            config: PlannerConfig::default(),
        }
    }

    /// Create with custom config
    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Scored slots of one day, generated blocks ignored.
    pub fn explain_day(&self, day: &[Activity]) -> Vec<ScoredSlot> {
        let human: Vec<Activity> = day.iter().filter(|a| !a.generated).cloned().collect();
        score_day(&human, &self.config)
    }

    /// Plan one day with the full daily budget.
    pub fn plan_day(&self, weekday: Weekday, day: &[Activity]) -> DayPlan {
        let human: Vec<Activity> = day.iter().filter(|a| !a.generated).cloned().collect();
        allocate_day(weekday, &human, self.config.daily_learning_minutes, &self.config)
    }

    /// Plan a week, returning the new schedule and per-day summaries.
    pub fn plan_week(&self, week: &WeekSchedule) -> WeekPlan {
        plan_week(week, &self.config)
    }

    /// Plan a week, returning only the new schedule.
    pub fn optimize(&self, week: &WeekSchedule) -> WeekSchedule {
        optimize_week(week, &self.config)
    }
}

impl Default for LearningPlanner {
    fn default() -> Self {
        Self::new()
    }
}
