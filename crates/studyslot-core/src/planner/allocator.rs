//! Greedy per-day allocation and the weekly pass around it.
//!
//! Each day is planned independently: generated blocks from earlier runs are
//! dropped, the remaining human-entered activities are searched for slots,
//! and the best-scoring slots are filled until the day's budget or block cap
//! is used up. The only cross-day state is the optional weekly budget.

use chrono::Weekday;
use serde::Serialize;

use super::{build_block, find_slots, score_slot, PlannerConfig, ScoredSlot};
use crate::schedule::{day_name, sort_day, Activity, WeekSchedule, WEEKDAYS};

/// Counters describing how one day was planned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub day: Weekday,
    pub slots_found: usize,
    pub slots_eligible: usize,
    pub blocks: usize,
    pub minutes: u32,
}

/// Result of planning one day.
#[derive(Debug, Clone)]
pub struct DayPlan {
    /// Generated blocks in the order they were accepted
    pub blocks: Vec<Activity>,
    pub summary: DaySummary,
}

/// Result of planning a week.
#[derive(Debug, Clone)]
pub struct WeekPlan {
    pub schedule: WeekSchedule,
    /// Monday to Sunday
    pub days: Vec<DaySummary>,
}

impl WeekPlan {
    pub fn total_blocks(&self) -> usize {
        self.days.iter().map(|d| d.blocks).sum()
    }

    pub fn total_minutes(&self) -> u32 {
        self.days.iter().map(|d| d.minutes).sum()
    }
}

/// Score every slot of a day, in slot order.
pub fn score_day(day: &[Activity], config: &PlannerConfig) -> Vec<ScoredSlot> {
    find_slots(day)
        .iter()
        .map(|slot| score_slot(slot, day, config))
        .collect()
}

/// Plan learning blocks for one day.
///
/// # Arguments
/// * `weekday` - Day being planned, used for the summary
/// * `day` - Human-entered activities of the day
/// * `budget` - Minutes of learning allowed today
/// * `config` - Planner parameters
pub fn allocate_day(
    weekday: Weekday,
    day: &[Activity],
    budget: u32,
    config: &PlannerConfig,
) -> DayPlan {
    let scored = score_day(day, config);
    let slots_found = scored.len();

    let mut eligible: Vec<ScoredSlot> = scored
        .into_iter()
        .filter(|s| s.is_eligible(config))
        .collect();
    eligible.sort_by(|a, b| {
        b.suitability
            .cmp(&a.suitability)
            .then(a.slot.start.cmp(&b.slot.start))
    });

    let max_blocks = config.max_daily_blocks as usize;
    let mut remaining = budget;
    let mut blocks: Vec<Activity> = Vec::new();

    for slot in &eligible {
        if remaining == 0 || blocks.len() >= max_blocks {
            break;
        }
        if let Some(block) = build_block(slot, remaining, blocks.len(), config) {
            let (start, end) = block.interval();
            remaining = remaining.saturating_sub(end - start);
            blocks.push(block);
        }
    }

    let summary = DaySummary {
        day: weekday,
        slots_found,
        slots_eligible: eligible.len(),
        blocks: blocks.len(),
        minutes: budget - remaining,
    };
    tracing::debug!(
        day = day_name(weekday),
        slots = summary.slots_found,
        eligible = summary.slots_eligible,
        blocks = summary.blocks,
        minutes = summary.minutes,
        "planned day"
    );

    DayPlan { blocks, summary }
}

/// Replace all generated blocks of a week with a fresh plan.
///
/// The input is left untouched. Days are processed Monday to Sunday; unless
/// `weekly_learning_minutes` is set, each day's result depends only on that
/// day's activities.
pub fn plan_week(week: &WeekSchedule, config: &PlannerConfig) -> WeekPlan {
    let mut schedule = WeekSchedule::new();
    let mut days = Vec::with_capacity(WEEKDAYS.len());
    let mut weekly_remaining = config.weekly_learning_minutes;

    for weekday in WEEKDAYS {
        let mut activities: Vec<Activity> = week
            .day(weekday)
            .iter()
            .filter(|a| !a.generated)
            .cloned()
            .collect();

        let budget = match weekly_remaining {
            Some(weekly) => weekly.min(config.daily_learning_minutes),
            None => config.daily_learning_minutes,
        };
        let plan = allocate_day(weekday, &activities, budget, config);
        if let Some(weekly) = weekly_remaining.as_mut() {
            *weekly = weekly.saturating_sub(plan.summary.minutes);
        }

        activities.extend(plan.blocks);
        sort_day(&mut activities);
        *schedule.day_mut(weekday) = activities;
        days.push(plan.summary);
    }

    WeekPlan { schedule, days }
}

/// Convenience wrapper returning only the new schedule.
pub fn optimize_week(week: &WeekSchedule, config: &PlannerConfig) -> WeekSchedule {
    plan_week(week, config).schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Category;
    use std::collections::BTreeSet;

    fn university_day() -> Vec<Activity> {
        vec![
            Activity::new("08:00", "09:00", "Breakfast", Category::Meal),
            Activity::new("09:30", "12:00", "Lectures", Category::University),
            Activity::new("13:00", "17:00", "Job", Category::Work),
            Activity::new("17:30", "19:00", "Commute and dinner", Category::Travel),
        ]
    }

    #[test]
    fn test_allocate_day_prefers_highest_score() {
        let config = PlannerConfig {
            preferred_hours: BTreeSet::from([17]),
            max_daily_blocks: 1,
            ..PlannerConfig::default()
        };

        let plan = allocate_day(Weekday::Mon, &university_day(), 120, &config);
        // 09:00 after breakfast, 12:00 at ideal length, 17:00 preferred:
        // all clamp to 100 and the tie goes to the earliest slot
        assert_eq!(plan.blocks.len(), 1);
        assert_eq!(plan.blocks[0].start_time, "09:00");
        assert_eq!(plan.summary.slots_found, 3);
        assert_eq!(plan.summary.slots_eligible, 3);
    }

    #[test]
    fn test_allocate_day_stops_at_block_cap() {
        let config = PlannerConfig {
            max_daily_blocks: 2,
            daily_learning_minutes: 600,
            ..PlannerConfig::default()
        };

        let plan = allocate_day(Weekday::Mon, &university_day(), 600, &config);
        assert_eq!(plan.blocks.len(), 2);
        assert_eq!(plan.summary.minutes, 90);
    }

    #[test]
    fn test_allocate_day_skips_ineligible_slots() {
        let config = PlannerConfig {
            min_block_minutes: 45,
            ..PlannerConfig::default()
        };

        let plan = allocate_day(Weekday::Mon, &university_day(), 120, &config);
        assert_eq!(plan.blocks.len(), 1);
        assert_eq!(plan.blocks[0].start_time, "12:00");
        assert_eq!(plan.blocks[0].end_time, "13:00");
        assert_eq!(plan.summary.slots_eligible, 1);
    }

    #[test]
    fn test_plan_week_replaces_generated_blocks() {
        let mut week = WeekSchedule::new();
        let mut stale = Activity::new("09:00", "09:30", "Old", Category::StudyLearning);
        stale.generated = true;
        week.tuesday = university_day();
        week.tuesday.push(stale);

        let config = PlannerConfig {
            min_block_minutes: 45,
            ..PlannerConfig::default()
        };
        let plan = plan_week(&week, &config);

        assert_eq!(week.generated_count(), 1, "input must not change");
        let tuesday = &plan.schedule.tuesday;
        let generated: Vec<_> = tuesday.iter().filter(|a| a.generated).collect();
        assert_eq!(generated.len(), 1);
        assert_eq!(generated[0].start_time, "12:00");
        assert!(tuesday.windows(2).all(|w| w[0].start_minutes() <= w[1].start_minutes()));
        assert_eq!(plan.total_blocks(), 1);
        assert_eq!(plan.days.len(), 7);
    }

    #[test]
    fn test_weekly_budget_caps_later_days() {
        let mut week = WeekSchedule::new();
        for weekday in WEEKDAYS {
            *week.day_mut(weekday) = university_day();
        }
        let config = PlannerConfig {
            min_block_minutes: 45,
            weekly_learning_minutes: Some(150),
            ..PlannerConfig::default()
        };

        let plan = plan_week(&week, &config);
        let minutes: Vec<_> = plan.days.iter().map(|d| d.minutes).collect();
        // 150 weekly: 60 + 60, then only 30 left which is below the minimum
        assert_eq!(minutes, vec![60, 60, 0, 0, 0, 0, 0]);
        assert_eq!(plan.total_minutes(), 120);
    }

    #[test]
    fn subjects_follow_weight_order_every_day() {
        let mut week = WeekSchedule::new();
        week.monday = university_day();
        week.tuesday = vec![
            Activity::new("07:00", "09:00", "Gym", Category::Routine),
            Activity::new("12:00", "13:00", "Lunch", Category::Meal),
        ];
        let config = PlannerConfig {
            min_block_minutes: 45,
            max_daily_blocks: 2,
            subject_priorities: vec![
                crate::planner::SubjectPriority::new("Spanish", 1.0),
                crate::planner::SubjectPriority::new("Rust", 5.0),
            ],
            ..PlannerConfig::default()
        };

        let schedule = optimize_week(&week, &config);
        let subjects = |day: &[Activity]| -> Vec<String> {
            day.iter()
                .filter(|a| a.generated)
                .map(|a| a.name.clone())
                .collect()
        };
        assert_eq!(subjects(&schedule.monday), vec!["Rust"]);
        // the first block of any weekday gets the top subject
        assert_eq!(subjects(&schedule.tuesday), vec!["Rust"]);
    }

    #[test]
    fn second_block_of_a_day_takes_next_subject() {
        let config = PlannerConfig {
            max_daily_blocks: 2,
            daily_learning_minutes: 600,
            subject_priorities: vec![
                crate::planner::SubjectPriority::new("Rust", 2.0),
                crate::planner::SubjectPriority::new("Spanish", 1.0),
            ],
            ..PlannerConfig::default()
        };

        let plan = allocate_day(Weekday::Fri, &university_day(), 600, &config);
        let names: Vec<_> = plan.blocks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Rust", "Spanish"]);
    }
}
