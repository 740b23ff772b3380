//! Planner parameters.
//!
//! `PlannerConfig` is an immutable value handed to every planning call. The
//! planner never validates it; callers run [`PlannerConfig::validate`] first.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::ValidationError;

/// A subject to learn and its relative importance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectPriority {
    pub name: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl SubjectPriority {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// Placement parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Shortest block worth generating (minutes)
    #[serde(default = "default_min_block_minutes", alias = "minBlockMinutes")]
    pub min_block_minutes: u32,
    /// Block length that earns the ideal-length bonus (minutes)
    #[serde(default = "default_ideal_block_minutes", alias = "idealBlockMinutes")]
    pub ideal_block_minutes: u32,
    /// Longest single block (minutes)
    #[serde(default = "default_max_block_minutes", alias = "maxBlockMinutes")]
    pub max_block_minutes: u32,
    /// Slots scoring below this (0-100) are never used
    #[serde(
        default = "default_minimum_suitability_score",
        alias = "minimumSuitabilityScore"
    )]
    pub minimum_suitability_score: u8,
    #[serde(default = "default_max_daily_blocks", alias = "maxDailyBlocks")]
    pub max_daily_blocks: u32,
    /// Total generated minutes allowed per day
    #[serde(default = "default_daily_learning_minutes", alias = "dailyLearningMinutes")]
    pub daily_learning_minutes: u32,
    /// Round block ends to this many minutes; 0 disables rounding
    #[serde(default = "default_round_to_minutes", alias = "roundToMinutes")]
    pub round_to_minutes: u32,
    /// Hours of the day (0-23) at which a block preferably starts
    #[serde(default = "default_preferred_hours", alias = "preferredHours")]
    pub preferred_hours: BTreeSet<u8>,
    /// Optional cap on generated minutes across the whole week
    #[serde(
        default,
        alias = "weeklyLearningMinutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub weekly_learning_minutes: Option<u32>,
    /// Subjects in the order they were configured
    #[serde(default, alias = "subjectPriorities")]
    pub subject_priorities: Vec<SubjectPriority>,
}

// Default functions
fn default_min_block_minutes() -> u32 {
    30
}
fn default_ideal_block_minutes() -> u32 {
    60
}
fn default_max_block_minutes() -> u32 {
    90
}
fn default_minimum_suitability_score() -> u8 {
    50
}
fn default_max_daily_blocks() -> u32 {
    3
}
fn default_daily_learning_minutes() -> u32 {
    120
}
fn default_round_to_minutes() -> u32 {
    15
}
fn default_preferred_hours() -> BTreeSet<u8> {
    [9, 10, 11, 15, 16, 17].into_iter().collect()
}
fn default_weight() -> f64 {
    1.0
}

/// Block name used when no subjects are configured.
pub const DEFAULT_SUBJECT: &str = "Learning";

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_block_minutes: default_min_block_minutes(),
            ideal_block_minutes: default_ideal_block_minutes(),
            max_block_minutes: default_max_block_minutes(),
            minimum_suitability_score: default_minimum_suitability_score(),
            max_daily_blocks: default_max_daily_blocks(),
            daily_learning_minutes: default_daily_learning_minutes(),
            round_to_minutes: default_round_to_minutes(),
            preferred_hours: default_preferred_hours(),
            weekly_learning_minutes: None,
            subject_priorities: Vec::new(),
        }
    }
}

impl PlannerConfig {
    /// Subjects ordered by weight, highest first. Equal weights keep their
    /// configured order.
    pub fn ranked_subjects(&self) -> Vec<&SubjectPriority> {
        let mut ranked: Vec<_> = self.subject_priorities.iter().collect();
        ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        ranked
    }

    /// Subject at `rank` in weight order, cycling when `rank` runs past the end.
    pub fn subject_at(&self, rank: usize) -> &str {
        let ranked = self.ranked_subjects();
        if ranked.is_empty() {
            return DEFAULT_SUBJECT;
        }
        let subject = ranked[rank % ranked.len()];
        &subject.name
    }

    /// Check the documented preconditions.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_block_minutes > self.max_block_minutes {
            return Err(ValidationError::InvalidRange {
                field: "min_block_minutes..max_block_minutes".into(),
                min: self.min_block_minutes.into(),
                max: self.max_block_minutes.into(),
            });
        }
        if self.ideal_block_minutes < self.min_block_minutes
            || self.ideal_block_minutes > self.max_block_minutes
        {
            return Err(ValidationError::InvalidValue {
                field: "ideal_block_minutes".into(),
                message: format!(
                    "{} is outside [{}, {}]",
                    self.ideal_block_minutes, self.min_block_minutes, self.max_block_minutes
                ),
            });
        }
        if self.minimum_suitability_score > 100 {
            return Err(ValidationError::InvalidValue {
                field: "minimum_suitability_score".into(),
                message: format!("{} exceeds 100", self.minimum_suitability_score),
            });
        }
        if let Some(hour) = self.preferred_hours.iter().find(|h| **h > 23) {
            return Err(ValidationError::InvalidValue {
                field: "preferred_hours".into(),
                message: format!("{hour} is not an hour of the day"),
            });
        }
        if let Some(subject) = self
            .subject_priorities
            .iter()
            .find(|s| !s.weight.is_finite() || s.weight < 0.0)
        {
            return Err(ValidationError::InvalidValue {
                field: "subject_priorities".into(),
                message: format!("weight of '{}' must be a non-negative number", subject.name),
            });
        }
        Ok(())
    }
}
