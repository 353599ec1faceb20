//! Course models.
//!
//! Two shapes of course flow through the engine: completed transcript rows
//! (credits + earned grade) and remaining planned courses (credits + an
//! optional pre-assigned goal grade). Both are plain immutable data — the
//! engine derives new lists from them and never mutates caller input.

use serde::{Deserialize, Serialize};

use super::Grade;

/// A finished, graded course from the historical transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedCourse {
    /// Credit hours (non-negative, may be fractional).
    pub credits: f64,
    /// Earned letter grade.
    pub grade: Grade,
}

impl CompletedCourse {
    /// Creates a completed course row.
    pub fn new(credits: f64, grade: Grade) -> Self {
        Self { credits, grade }
    }
}

/// A planned future course in the graduation plan.
///
/// With a goal grade set the course is "locked" — the solver treats that
/// grade as committed. Without one the course is "free" and the solver
/// determines its grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemainingCourse {
    /// Opaque caller identifier, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Credit hours (non-negative, may be fractional).
    pub credits: f64,
    /// Pre-assigned goal grade. `None` = grade to be solved for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_grade: Option<Grade>,
}

impl RemainingCourse {
    /// Creates a free remaining course.
    pub fn new(credits: f64) -> Self {
        Self {
            id: None,
            credits,
            goal_grade: None,
        }
    }

    /// Sets the caller identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Locks the course to a goal grade.
    pub fn with_goal_grade(mut self, grade: Grade) -> Self {
        self.goal_grade = Some(grade);
        self
    }

    /// Whether a goal grade is set.
    pub fn is_locked(&self) -> bool {
        self.goal_grade.is_some()
    }
}
