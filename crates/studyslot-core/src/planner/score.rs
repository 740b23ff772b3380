//! Suitability scoring of free slots.
//!
//! Every slot starts at 100 and is adjusted by fixed weights:
//!
//! | Condition | Adjustment |
//! |-----------|------------|
//! | shorter than `min_block_minutes` | score is 0 |
//! | overlaps a fixed activity | score is 0 |
//! | overlaps ordinary (non-candidate) flexible content | -30 |
//! | preceded by a high cognitive load activity | -20 |
//! | preceded by a natural transition | +10 |
//! | starts in a preferred hour | +15 |
//! | within 15 minutes of the ideal length | +10 |
//!
//! The result is clamped to `[0, 100]`.

use serde::Serialize;

use super::{PlannerConfig, Slot};
use crate::schedule::{classify, is_fixed, Activity, ActivityClass};

/// Substrings of the preceding activity name that mark a draining activity.
pub const HIGH_LOAD_KEYWORDS: &[&str] = &["intensive", "exam", "deadline"];

/// Substrings of the preceding activity name that mark a natural pause.
pub const TRANSITION_KEYWORDS: &[&str] = &["break", "meal", "lunch", "breakfast", "dinner", "walk"];

const BASE_SCORE: i32 = 100;
const IDEAL_LENGTH_TOLERANCE: i64 = 15;

/// One rule that fired while scoring a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreAdjustment {
    TooShort,
    ContainsFixed,
    OccupiedByFlexible,
    HighLoadBefore,
    TransitionBefore,
    PreferredHour,
    NearIdealLength,
}

impl ScoreAdjustment {
    /// Signed change to the score. Rejections are expressed as -100.
    pub fn delta(&self) -> i32 {
        match self {
            ScoreAdjustment::TooShort | ScoreAdjustment::ContainsFixed => -BASE_SCORE,
            ScoreAdjustment::OccupiedByFlexible => -30,
            ScoreAdjustment::HighLoadBefore => -20,
            ScoreAdjustment::TransitionBefore => 10,
            ScoreAdjustment::PreferredHour => 15,
            ScoreAdjustment::NearIdealLength => 10,
        }
    }

    /// Whether this adjustment disqualifies the slot outright.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ScoreAdjustment::TooShort | ScoreAdjustment::ContainsFixed)
    }

    pub fn describe(&self) -> &'static str {
        match self {
            ScoreAdjustment::TooShort => "too short",
            ScoreAdjustment::ContainsFixed => "contains fixed activity",
            ScoreAdjustment::OccupiedByFlexible => "occupied by flexible activity",
            ScoreAdjustment::HighLoadBefore => "follows high cognitive load",
            ScoreAdjustment::TransitionBefore => "follows natural transition",
            ScoreAdjustment::PreferredHour => "preferred hour",
            ScoreAdjustment::NearIdealLength => "near ideal length",
        }
    }
}

/// A slot with its suitability for a learning block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredSlot {
    #[serde(flatten)]
    pub slot: Slot,
    /// 0-100, higher is better
    pub suitability: u8,
    pub blocked_by_fixed: bool,
    pub overlaps_flexible: bool,
    /// Rules that fired, in evaluation order
    pub adjustments: Vec<ScoreAdjustment>,
}

impl ScoredSlot {
    fn rejected(slot: &Slot, reason: ScoreAdjustment) -> Self {
        Self {
            slot: slot.clone(),
            suitability: 0,
            blocked_by_fixed: reason == ScoreAdjustment::ContainsFixed,
            overlaps_flexible: false,
            adjustments: vec![reason],
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.adjustments.iter().any(ScoreAdjustment::is_rejection)
    }

    /// A slot is eligible when it was not rejected and meets the score threshold.
    pub fn is_eligible(&self, config: &PlannerConfig) -> bool {
        !self.is_rejected() && self.suitability >= config.minimum_suitability_score
    }
}

/// Score one slot against the day it came from.
///
/// # Arguments
/// * `slot` - Gap produced by [`find_slots`](super::find_slots)
/// * `day` - All activities of that day, used to detect overlapping content
/// * `config` - Planner parameters
pub fn score_slot(slot: &Slot, day: &[Activity], config: &PlannerConfig) -> ScoredSlot {
    if slot.duration_minutes == 0 || slot.duration_minutes < config.min_block_minutes {
        return ScoredSlot::rejected(slot, ScoreAdjustment::TooShort);
    }

    let overlapping: Vec<&Activity> = day
        .iter()
        .filter(|a| a.overlaps(slot.start, slot.end))
        .collect();

    if overlapping.iter().any(|a| is_fixed(a)) {
        return ScoredSlot::rejected(slot, ScoreAdjustment::ContainsFixed);
    }

    let mut adjustments = Vec::new();

    // generated blocks are replaceable and candidates are offered for learning
    let overlaps_flexible = overlapping
        .iter()
        .any(|a| classify(a) == ActivityClass::Ordinary);
    if overlaps_flexible {
        adjustments.push(ScoreAdjustment::OccupiedByFlexible);
    }

    let preceding = slot.preceding_activity_name.to_lowercase();
    if contains_any(&preceding, HIGH_LOAD_KEYWORDS) {
        adjustments.push(ScoreAdjustment::HighLoadBefore);
    }
    if contains_any(&preceding, TRANSITION_KEYWORDS) {
        adjustments.push(ScoreAdjustment::TransitionBefore);
    }

    let start_hour = u8::try_from(slot.start_hour()).ok();
    if start_hour.is_some_and(|h| config.preferred_hours.contains(&h)) {
        adjustments.push(ScoreAdjustment::PreferredHour);
    }

    let distance = (i64::from(slot.duration_minutes) - i64::from(config.ideal_block_minutes)).abs();
    if distance < IDEAL_LENGTH_TOLERANCE {
        adjustments.push(ScoreAdjustment::NearIdealLength);
    }

    let score = adjustments
        .iter()
        .fold(BASE_SCORE, |score, adj| score + adj.delta())
        .clamp(0, 100);

    let scored = ScoredSlot {
        slot: slot.clone(),
        suitability: score as u8,
        blocked_by_fixed: false,
        overlaps_flexible,
        adjustments,
    };
    tracing::trace!(
        start = %scored.slot.start_time(),
        end = %scored.slot.end_time(),
        suitability = scored.suitability,
        "scored slot"
    );
    scored
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Category;
    use std::collections::BTreeSet;

    fn config_without_bonuses() -> PlannerConfig {
        PlannerConfig {
            preferred_hours: BTreeSet::new(),
            ideal_block_minutes: 200,
            max_block_minutes: 240,
            ..PlannerConfig::default()
        }
    }

    #[test]
    fn too_short_scores_zero() {
        let slot = Slot::new(600, 610, "Lectures", "Job");
        let config = PlannerConfig {
            min_block_minutes: 25,
            ..PlannerConfig::default()
        };

        let scored = score_slot(&slot, &[], &config);
        assert_eq!(scored.suitability, 0);
        assert_eq!(scored.adjustments, vec![ScoreAdjustment::TooShort]);
        assert!(!scored.is_eligible(&config));
    }

    #[test]
    fn fixed_overlap_scores_zero() {
        let slot = Slot::new(600, 720, "Lectures", "Job");
        let day = vec![Activity::new("11:00", "11:30", "Call", Category::Work)];

        let scored = score_slot(&slot, &day, &PlannerConfig::default());
        assert_eq!(scored.suitability, 0);
        assert!(scored.blocked_by_fixed);

        let lenient = PlannerConfig {
            minimum_suitability_score: 0,
            ..PlannerConfig::default()
        };
        assert!(!scored.is_eligible(&lenient));
    }

    #[test]
    fn ordinary_overlap_is_penalized_but_candidates_are_not() {
        let config = config_without_bonuses();
        let slot = Slot::new(600, 720, "Lectures", "Job");

        let ordinary = vec![Activity::new("10:30", "11:00", "Chores", Category::Housework)];
        let scored = score_slot(&slot, &ordinary, &config);
        assert_eq!(scored.suitability, 70);
        assert!(scored.overlaps_flexible);

        let candidate = vec![Activity::new("10:30", "11:00", "Open", Category::Flexible)];
        let scored = score_slot(&slot, &candidate, &config);
        assert_eq!(scored.suitability, 100);
        assert!(!scored.overlaps_flexible);
    }

    #[test]
    fn preceding_name_heuristics() {
        let config = config_without_bonuses();

        let after_exam = score_slot(&Slot::new(600, 720, "Math EXAM", "Job"), &[], &config);
        assert_eq!(after_exam.suitability, 80);
        assert_eq!(after_exam.adjustments, vec![ScoreAdjustment::HighLoadBefore]);

        // bonus is capped by the clamp
        let after_lunch = score_slot(&Slot::new(600, 720, "Lunch break", "Job"), &[], &config);
        assert_eq!(after_lunch.suitability, 100);
        assert_eq!(after_lunch.adjustments, vec![ScoreAdjustment::TransitionBefore]);

        let mixed = score_slot(&Slot::new(600, 720, "Intensive lunch", "Job"), &[], &config);
        assert_eq!(mixed.suitability, 90);
    }

    #[test]
    fn preferred_hour_and_ideal_length_bonuses() {
        let config = PlannerConfig {
            preferred_hours: BTreeSet::from([12]),
            ideal_block_minutes: 60,
            ..PlannerConfig::default()
        };
        let day_penalty = vec![Activity::new("12:10", "12:20", "Chores", Category::Housework)];

        let scored = score_slot(&Slot::new(720, 780, "Lectures", "Job"), &day_penalty, &config);
        // 100 - 30 + 15 + 10
        assert_eq!(scored.suitability, 95);
        assert_eq!(
            scored.adjustments,
            vec![
                ScoreAdjustment::OccupiedByFlexible,
                ScoreAdjustment::PreferredHour,
                ScoreAdjustment::NearIdealLength,
            ]
        );

        // 74 minutes is 14 away from ideal, 75 is not
        let near = score_slot(&Slot::new(600, 674, "x", "y"), &day_penalty, &config);
        assert!(near.adjustments.contains(&ScoreAdjustment::NearIdealLength));
        let far = score_slot(&Slot::new(600, 675, "x", "y"), &day_penalty, &config);
        assert!(!far.adjustments.contains(&ScoreAdjustment::NearIdealLength));
    }

    #[test]
    fn penalties_accumulate() {
        let config = PlannerConfig {
            preferred_hours: BTreeSet::new(),
            ..PlannerConfig::default()
        };
        let day = vec![Activity::new("10:00", "10:30", "Chores", Category::Housework)];

        let scored = score_slot(&Slot::new(600, 900, "exam", "Job"), &day, &config);
        assert_eq!(scored.suitability, 50);
        assert_eq!(
            scored.adjustments.iter().map(ScoreAdjustment::delta).sum::<i32>(),
            -50
        );
    }
}
