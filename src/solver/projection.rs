//! Goal-grade GPA projection.
//!
//! Answers the complementary question to the distribution solver: not
//! "what grades do I still need?" but "where do my chosen goal grades
//! land me?". Assumes every locked course earns exactly its goal grade
//! and projects the graduation GPA from there.

use serde::{Deserialize, Serialize};

use crate::models::RemainingCourse;

use super::lock_from_goals;

/// Tolerance when comparing a projection against the target.
const TARGET_TOLERANCE: f64 = 0.01;

/// Where a projection stands relative to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectionStatus {
    /// Projected GPA reaches the target (within tolerance).
    OnTrack,
    /// Projected GPA falls short of the target.
    Below,
    /// Some courses have no goal grade, or there is no target to compare
    /// against — the projection is not a final GPA.
    Incomplete,
}

/// Projected graduation outcome assuming all goal grades are earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpaProjection {
    /// GPA over completed plus goal-locked credits.
    pub projected_gpa: f64,
    /// Remaining courses with a goal grade set.
    pub courses_with_goals: usize,
    /// All remaining courses.
    pub total_courses: usize,
    /// Whether any remaining course still lacks a goal grade.
    pub has_unassigned_courses: bool,
    /// Standing relative to the target.
    pub status: ProjectionStatus,
    /// Credits covered by goal grades.
    pub locked_credits: f64,
    /// Credits still without a goal grade.
    pub free_credits: f64,
}

impl GpaProjection {
    /// Projects the graduation GPA from the current transcript and the
    /// goal grades on the remaining plan.
    ///
    /// With unassigned courses the projection is partial and the status
    /// is [`ProjectionStatus::Incomplete`] regardless of target. A target
    /// of `0.0` is honored as a real target.
    pub fn calculate(
        completed_credits: f64,
        completed_qp: f64,
        remaining: &[RemainingCourse],
        target_gpa: Option<f64>,
    ) -> Self {
        let partition = lock_from_goals(remaining);

        let projected_credits = completed_credits + partition.locked_credits;
        let projected_qp = completed_qp + partition.locked_quality_points;
        let projected_gpa = if projected_credits > 0.0 {
            projected_qp / projected_credits
        } else {
            0.0
        };

        let has_unassigned_courses = !partition.free.is_empty();
        let free_credits: f64 = partition.free.iter().map(|course| course.credits).sum();

        let status = if has_unassigned_courses {
            ProjectionStatus::Incomplete
        } else {
            match target_gpa {
                Some(target) if projected_gpa >= target - TARGET_TOLERANCE => {
                    ProjectionStatus::OnTrack
                }
                Some(_) => ProjectionStatus::Below,
                None => ProjectionStatus::Incomplete,
            }
        };

        Self {
            projected_gpa,
            courses_with_goals: remaining.len() - partition.free.len(),
            total_courses: remaining.len(),
            has_unassigned_courses,
            status,
            locked_credits: partition.locked_credits,
            free_credits,
        }
    }
}
