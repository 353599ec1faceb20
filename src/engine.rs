//! Validated compute facade.
//!
//! The one entry point for callers holding untrusted payloads: validates
//! the request at the JSON boundary, runs the solver on the typed result,
//! and logs the outcome. The core modules stay silent; this is the only
//! layer that emits tracing events.

use serde_json::Value;

use crate::models::DistributionResult;
use crate::solver::distribution_for_target;
use crate::validation::{validate_distribution_request, ValidationError};

/// Computes a grade distribution from an untrusted request payload.
///
/// Validates `targetGpa`, `completedCredits`, `completedQualityPoints`,
/// and `remaining`, then solves. Fails only on validation — the solver
/// itself returns a structured result for every well-formed input.
///
/// ```
/// use serde_json::json;
///
/// let payload = json!({
///     "targetGpa": 3.5,
///     "completedCredits": 60.0,
///     "completedQualityPoints": 210.0,
///     "remaining": [{ "credits": 3.0 }]
/// });
///
/// let result = u_gpa::engine::compute_distribution(&payload).unwrap();
/// assert!(result.feasible);
/// ```
pub fn compute_distribution(payload: &Value) -> Result<DistributionResult, ValidationError> {
    let request = validate_distribution_request(payload)?;

    let result = distribution_for_target(
        request.completed_credits,
        request.completed_quality_points,
        &request.remaining,
        request.target_gpa,
    );

    tracing::info!(
        feasible = result.feasible,
        required_avg = result.required_avg,
        free_courses = result.assigned_count(),
        "computed grade distribution"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Grade;
    use serde_json::json;

    #[test]
    fn test_compute_distribution_valid_payload() {
        let payload = json!({
            "targetGpa": 3.5,
            "completedCredits": 60,
            "completedQualityPoints": 210.0,
            "remaining": [{ "credits": 3.0 }]
        });

        let result = compute_distribution(&payload).unwrap();

        assert!(result.feasible);
        // 10.5 QP needed on 3 credits → lowest sufficient grade is A-.
        assert_eq!(result.distribution.get(&Grade::AMinus), Some(&1));
    }

    #[test]
    fn test_compute_distribution_rejects_bad_payload() {
        let error = compute_distribution(&json!("nope")).unwrap_err();
        assert_eq!(error.message, "Payload must be an object");

        let error = compute_distribution(&json!({
            "targetGpa": 5.0,
            "completedCredits": 60,
            "completedQualityPoints": 210,
            "remaining": []
        }))
        .unwrap_err();
        assert_eq!(error.field.as_deref(), Some("targetGpa"));
    }

    #[test]
    fn test_compute_distribution_locked_courses_pass_through() {
        let payload = json!({
            "targetGpa": 3.5,
            "completedCredits": 60,
            "completedQualityPoints": 210,
            "remaining": [
                { "credits": 30, "goalGrade": "A" },
                { "credits": 30, "goalGrade": "B" }
            ]
        });

        let result = compute_distribution(&payload).unwrap();

        assert!(result.feasible);
        assert!(result.distribution.is_empty());
        assert!(result.summary().starts_with("All remaining courses"));
    }
}
