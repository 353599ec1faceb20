//! Distribution result (solver output) and its human-readable rendering.
//!
//! `DistributionResult` is the sole output contract of the solver. When a
//! plan is feasible and has free courses, the grade counts sum to the
//! number of free courses and the weighted quality points cover the need.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Grade;

/// Outcome of a grade-distribution solve.
///
/// Every branch of the solver returns one of these — it never raises for
/// validated input. The short-circuit branches (no remaining courses, all
/// courses locked, impossible average) carry an explanatory `message` and
/// an empty distribution; the greedy path fills `distribution` over all
/// twelve grades and leaves `message` unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionResult {
    /// Whether the target GPA is attainable.
    pub feasible: bool,
    /// Average grade-point value required over free courses.
    pub required_avg: f64,
    /// Residual quality-point shortfall (expected `0` when feasible).
    pub quality_points_needed: f64,
    /// Per-grade course counts over the free courses.
    pub distribution: HashMap<Grade, u32>,
    /// Explanation for short-circuit branches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DistributionResult {
    /// Number of courses covered by the distribution.
    pub fn assigned_count(&self) -> u32 {
        self.distribution.values().sum()
    }

    /// Display sentence for this result.
    ///
    /// Uses the embedded branch message when present, otherwise renders
    /// the grade distribution.
    pub fn summary(&self) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => format_distribution_message(&self.distribution),
        }
    }
}

/// Renders a grade-count map as a sentence.
///
/// Grades are listed highest to lowest; zero counts are skipped. Counts
/// above 1 get a plain `s` suffix on the label (so `A-` pluralizes to
/// `A-s`). Missing keys count as zero. An empty distribution yields a
/// fixed fallback sentence.
///
/// ```
/// use std::collections::HashMap;
/// use u_gpa::models::{format_distribution_message, Grade};
///
/// let mut dist = HashMap::new();
/// dist.insert(Grade::A, 2);
/// dist.insert(Grade::C, 1);
/// assert_eq!(format_distribution_message(&dist), "You need 2 As, and 1 C.");
/// ```
pub fn format_distribution_message(distribution: &HashMap<Grade, u32>) -> String {
    let mut parts: Vec<String> = Vec::new();

    for grade in Grade::ALL {
        let count = distribution.get(&grade).copied().unwrap_or(0);
        if count > 0 {
            if count == 1 {
                parts.push(format!("{count} {grade}"));
            } else {
                parts.push(format!("{count} {grade}s"));
            }
        }
    }

    match parts.len() {
        0 => "No specific grade distribution needed.".to_string(),
        1 => format!("You need {}.", parts[0]),
        _ => {
            let last = parts.pop().unwrap_or_default();
            format!("You need {}, and {}.", parts.join(", "), last)
        }
    }
}
