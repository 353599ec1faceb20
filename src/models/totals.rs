//! Cumulative transcript totals.
//!
//! Reduces completed transcript rows into the three aggregates every other
//! computation starts from: completed credits, completed quality points,
//! and current GPA.

use serde::{Deserialize, Serialize};

use super::CompletedCourse;

/// Derived snapshot of a completed transcript.
///
/// Computed once per transcript; immutable thereafter. Quality points are
/// `credits × grade points`, summed across rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Total completed credit hours.
    pub completed_credits: f64,
    /// Total earned quality points.
    pub completed_quality_points: f64,
    /// Quality points / credits; `0` for an empty transcript.
    pub current_gpa: f64,
}

impl Totals {
    /// Computes totals from completed transcript rows.
    ///
    /// Rows are trusted — callers holding untrusted data must validate
    /// first. An empty transcript yields a GPA of `0`, not `NaN`.
    pub fn from_transcript(rows: &[CompletedCourse]) -> Self {
        let completed_credits: f64 = rows.iter().map(|row| row.credits).sum();
        let completed_quality_points: f64 = rows
            .iter()
            .map(|row| row.credits * row.grade.points())
            .sum();
        let current_gpa = if completed_credits > 0.0 {
            completed_quality_points / completed_credits
        } else {
            0.0
        };

        Self {
            completed_credits,
            completed_quality_points,
            current_gpa,
        }
    }
}
