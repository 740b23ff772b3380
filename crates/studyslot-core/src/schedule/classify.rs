//! Activity classification.
//!
//! The only place that knows which categories are immovable commitments.
//! Everything downstream asks these predicates instead of matching categories.

use serde::{Deserialize, Serialize};

use super::{Activity, Category};

/// Phrase in `details` that marks an activity as a possible learning slot.
pub const LEARNING_SLOT_MARKER: &str = "learning slot";

/// How the planner treats an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityClass {
    /// Immovable commitment: never overlapped by a generated block.
    Fixed,
    /// Flexible time explicitly offered for learning.
    Candidate,
    /// Produced by an earlier planner run; replaced on every run.
    Generated,
    /// Any other human-entered, non-fixed activity.
    Ordinary,
}

/// True iff the activity's category is an immovable commitment.
pub fn is_fixed(activity: &Activity) -> bool {
    match activity.category {
        Category::University
        | Category::Work
        | Category::Sleep
        | Category::Meal
        | Category::Routine
        | Category::Travel => true,
        Category::Break
        | Category::Flexible
        | Category::StudyLearning
        | Category::StudyReview
        | Category::StudyPractice
        | Category::FreeTime
        | Category::Buffer
        | Category::Housework
        | Category::Language
        | Category::Other => false,
    }
}

/// True iff the activity is flexible time or carries the learning-slot marker.
pub fn is_learning_candidate_marker(activity: &Activity) -> bool {
    activity.category == Category::Flexible
        || activity
            .details
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(LEARNING_SLOT_MARKER))
}

/// Classify an activity. The `generated` flag wins over the category.
pub fn classify(activity: &Activity) -> ActivityClass {
    if activity.generated {
        ActivityClass::Generated
    } else if is_fixed(activity) {
        ActivityClass::Fixed
    } else if is_learning_candidate_marker(activity) {
        ActivityClass::Candidate
    } else {
        ActivityClass::Ordinary
    }
}
