use std::path::{Path, PathBuf};

use chrono::Weekday;
use clap::Subcommand;
use studyslot_core::schedule::{day_name, merge_midnight};
use studyslot_core::{JsonScheduleFile, LearningPlanner, ScheduleStore, WeekSchedule};

use super::load_config;

#[derive(Subcommand)]
pub enum PlanAction {
    /// Place learning blocks into a weekly schedule
    Optimize {
        /// Schedule file (defaults to `schedule_path` from config)
        file: Option<PathBuf>,
        /// Write the planned schedule here instead of printing it
        #[arg(long, short, conflicts_with = "json")]
        output: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the scored free slots of one day
    Slots {
        /// Schedule file (defaults to `schedule_path` from config)
        file: Option<PathBuf>,
        /// Day to inspect (e.g. "monday", "tue")
        #[arg(long, short)]
        day: Weekday,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove previously generated learning blocks
    Clear {
        /// Schedule file (defaults to `schedule_path` from config)
        file: Option<PathBuf>,
        /// Write the cleared schedule here instead of overwriting the input
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

pub fn run(action: PlanAction, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    config.planner.validate()?;
    let planner = LearningPlanner::with_config(config.planner.clone());

    let schedule_file = |file: Option<PathBuf>| -> Result<JsonScheduleFile, Box<dyn std::error::Error>> {
        file.or_else(|| config.schedule_path.clone())
            .map(JsonScheduleFile::new)
            .ok_or_else(|| "no schedule file given and schedule_path is not set".into())
    };

    match action {
        PlanAction::Optimize { file, output, json } => {
            let store = schedule_file(file)?;
            let week = store.load()?;
            tracing::debug!(path = %store.path().display(), "loaded schedule");
            let plan = planner.plan_week(&week);

            if let Some(output) = output {
                JsonScheduleFile::new(&output).save(&plan.schedule)?;
                eprintln!(
                    "Placed {} blocks ({} min) into {}",
                    plan.total_blocks(),
                    plan.total_minutes(),
                    output.display()
                );
            } else if json {
                let merged = merge_midnight(&plan.schedule);
                println!("{}", serde_json::to_string_pretty(&merged)?);
            } else {
                print_week(&plan.schedule);
                println!();
                for summary in &plan.days {
                    println!(
                        "{:<10} {} slots, {} eligible, {} blocks, {} min",
                        day_name(summary.day),
                        summary.slots_found,
                        summary.slots_eligible,
                        summary.blocks,
                        summary.minutes
                    );
                }
                println!(
                    "Total: {} blocks, {} min",
                    plan.total_blocks(),
                    plan.total_minutes()
                );
            }
        }
        PlanAction::Slots { file, day, json } => {
            let store = schedule_file(file)?;
            let week = store.load()?;
            let scored = planner.explain_day(week.day(day));

            if json {
                println!("{}", serde_json::to_string_pretty(&scored)?);
            } else if scored.is_empty() {
                println!("No free slots on {}.", day_name(day));
            } else {
                for s in &scored {
                    let mark = if s.is_eligible(planner.config()) { "*" } else { " " };
                    let reasons: Vec<_> = s.adjustments.iter().map(|a| a.describe()).collect();
                    println!(
                        "{mark} {}-{} {:>4} min  score {:>3}  {}",
                        s.slot.start_time(),
                        s.slot.end_time(),
                        s.slot.duration_minutes,
                        s.suitability,
                        reasons.join(", ")
                    );
                }
            }
        }
        PlanAction::Clear { file, output } => {
            let store = schedule_file(file)?;
            let week = store.load()?;
            let removed = week.generated_count();
            let target = output.map(JsonScheduleFile::new).unwrap_or(store);
            target.save(&week.without_generated())?;
            eprintln!("Removed {removed} generated blocks");
        }
    }

    Ok(())
}

fn print_week(week: &WeekSchedule) {
    for (weekday, day) in week.days() {
        println!("{}", day_name(weekday));
        if day.is_empty() {
            println!("  (empty)");
        }
        for activity in day {
            let marker = if activity.generated { "+" } else { " " };
            println!(
                "{marker} {}-{}  {} [{}]",
                activity.start_time, activity.end_time, activity.name, activity.category
            );
        }
    }
}

