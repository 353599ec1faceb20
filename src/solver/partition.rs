//! Goal-lock partitioning.
//!
//! Splits the remaining plan into courses the student has already
//! committed a goal grade to ("locked") and courses the solver must still
//! assign ("free"). Single pass, stable: free courses keep their original
//! relative order.

use serde::{Deserialize, Serialize};

use crate::models::RemainingCourse;

/// Result of partitioning remaining courses by goal grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockedPartition {
    /// Credits across locked courses.
    pub locked_credits: f64,
    /// Quality points committed by locked courses (credits × goal points).
    pub locked_quality_points: f64,
    /// Free courses, in original relative order.
    pub free: Vec<RemainingCourse>,
}

/// Partitions remaining courses into locked aggregates and a free list.
///
/// Courses with a goal grade contribute their credits and quality points
/// to the locked aggregates; all others are carried over unmodified. The
/// input is never mutated.
pub fn lock_from_goals(remaining: &[RemainingCourse]) -> LockedPartition {
    let mut locked_credits = 0.0;
    let mut locked_quality_points = 0.0;
    let mut free = Vec::new();

    for course in remaining {
        match course.goal_grade {
            Some(grade) => {
                locked_credits += course.credits;
                locked_quality_points += course.credits * grade.points();
            }
            None => free.push(course.clone()),
        }
    }

    LockedPartition {
        locked_credits,
        locked_quality_points,
        free,
    }
}
