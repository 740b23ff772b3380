//! Turning a selected slot into a concrete learning block.

use super::{PlannerConfig, ScoredSlot};
use crate::schedule::{Activity, Category};
use crate::time;

/// Build a generated learning block at the start of `scored`.
///
/// The block is `min(slot length, max_block_minutes, remaining_budget)` long,
/// with its end rounded to `round_to_minutes`. Rounding never lengthens the
/// block past that cap or past the slot; when the nearest multiple would, the
/// end is rounded down instead.
///
/// # Arguments
/// * `scored` - Eligible slot to fill
/// * `remaining_budget` - Minutes still available today
/// * `subject_rank` - Rank into the weight-ordered subject list
/// * `config` - Planner parameters
///
/// # Returns
/// `None` if the block would be shorter than `min_block_minutes`
pub fn build_block(
    scored: &ScoredSlot,
    remaining_budget: u32,
    subject_rank: usize,
    config: &PlannerConfig,
) -> Option<Activity> {
    let slot = &scored.slot;
    let actual = slot
        .duration_minutes
        .min(config.max_block_minutes)
        .min(remaining_budget);
    if actual == 0 || actual < config.min_block_minutes {
        return None;
    }

    let start = slot.start;
    let cap = start + actual;
    let end = round_end(cap, config.round_to_minutes).min(slot.end);

    let duration = end.checked_sub(start).filter(|d| *d > 0)?;
    if duration < config.min_block_minutes {
        return None;
    }

    let subject = config.subject_at(subject_rank);
    Some(Activity {
        start_time: time::format_minutes(start),
        end_time: time::format_minutes(end),
        name: subject.to_string(),
        category: Category::StudyLearning,
        details: Some(format!(
            "Auto-generated learning block (suitability {}/100)",
            scored.suitability
        )),
        generated: true,
    })
}

/// Round `cap` to the nearest multiple of `step` without exceeding it.
fn round_end(cap: u32, step: u32) -> u32 {
    if step == 0 {
        return cap;
    }
    let nearest = (cap + step / 2) / step * step;
    if nearest <= cap {
        nearest
    } else {
        cap / step * step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{score_slot, Slot, SubjectPriority};

    fn scored(start: u32, end: u32, config: &PlannerConfig) -> ScoredSlot {
        score_slot(&Slot::new(start, end, "Lectures", "Job"), &[], config)
    }

    #[test]
    fn block_fills_slot_up_to_max() {
        let config = PlannerConfig::default();
        let slot = scored(720, 780, &config);

        let block = build_block(&slot, 120, 0, &config).unwrap();
        assert_eq!(block.start_time, "12:00");
        assert_eq!(block.end_time, "13:00");
        assert!(block.generated);
        assert_eq!(block.category, Category::StudyLearning);
        assert_eq!(block.name, "Learning");

        let long = scored(600, 900, &config);
        let block = build_block(&long, 300, 0, &config).unwrap();
        assert_eq!(block.end_time, "11:30");
    }

    #[test]
    fn block_respects_remaining_budget() {
        let config = PlannerConfig::default();
        let slot = scored(720, 780, &config);

        let block = build_block(&slot, 30, 0, &config).unwrap();
        assert_eq!(block.end_time, "12:30");
        assert!(build_block(&slot, 20, 0, &config).is_none());
        assert!(build_block(&slot, 0, 0, &config).is_none());
    }

    #[test]
    fn rounding_never_lengthens_block() {
        let config = PlannerConfig {
            max_block_minutes: 90,
            ..PlannerConfig::default()
        };
        // 10:08 + 90 = 11:38, nearest quarter is 11:45 which would exceed the cap
        let slot = scored(608, 800, &config);
        let block = build_block(&slot, 120, 0, &config).unwrap();
        assert_eq!(block.end_time, "11:30");

        // 10:07 + 90 = 11:37, nearest quarter is 11:30
        let slot = scored(607, 800, &config);
        let block = build_block(&slot, 120, 0, &config).unwrap();
        assert_eq!(block.end_time, "11:30");
    }

    #[test]
    fn rounding_below_minimum_rejects() {
        let config = PlannerConfig {
            min_block_minutes: 30,
            round_to_minutes: 15,
            ..PlannerConfig::default()
        };
        // 12:10..12:44 rounds down to 12:30, leaving 20 minutes
        let slot = scored(730, 764, &config);
        assert!(build_block(&slot, 120, 0, &config).is_none());

        let no_rounding = PlannerConfig {
            round_to_minutes: 0,
            ..config
        };
        let block = build_block(&slot, 120, 0, &no_rounding).unwrap();
        assert_eq!(block.end_time, "12:44");
    }

    #[test]
    fn subject_follows_rank() {
        let config = PlannerConfig {
            subject_priorities: vec![
                SubjectPriority::new("Spanish", 1.0),
                SubjectPriority::new("Rust", 3.0),
            ],
            ..PlannerConfig::default()
        };
        let slot = scored(720, 780, &config);

        assert_eq!(build_block(&slot, 60, 0, &config).unwrap().name, "Rust");
        assert_eq!(build_block(&slot, 60, 1, &config).unwrap().name, "Spanish");
        assert_eq!(build_block(&slot, 60, 2, &config).unwrap().name, "Rust");
    }

    #[test]
    fn test_round_end() {
        assert_eq!(round_end(697, 15), 690);
        assert_eq!(round_end(690, 15), 690);
        assert_eq!(round_end(700, 15), 690);
        assert_eq!(round_end(700, 0), 700);
    }
}
