//! Input validation for distribution requests.
//!
//! Guards the boundary between untrusted caller data (JSON payloads) and
//! the typed engine. Each function either returns a sanitized value or
//! fails with a [`ValidationError`]; nothing behind this boundary
//! re-checks. Checks:
//! - Numeric range and finiteness (target GPA, credits, quality points)
//! - Grade membership (with null/empty normalizing to "no grade set")
//! - Structural shape (objects, arrays), with element indexes spliced
//!   into error messages so callers can localize the offending entry
//!
//! Validation is eager: the first failing check aborts the composite
//! validation with no partial result.

use serde_json::Value;
use thiserror::Error;

use crate::models::{Grade, RemainingCourse};

/// A validation failure.
///
/// Carries a human-readable message and, where known, the name of the
/// failing field for precise caller feedback. Deterministic: the same
/// input always produces the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Human-readable description.
    pub message: String,
    /// Offending field, when attributable to one.
    pub field: Option<String>,
}

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    fn with_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

/// A fully validated distribution request payload.
#[derive(Debug, Clone)]
pub struct DistributionRequest {
    /// Target cumulative GPA at graduation, in `[0.0, 4.0]`.
    pub target_gpa: f64,
    /// Credits already completed.
    pub completed_credits: f64,
    /// Quality points already earned.
    pub completed_quality_points: f64,
    /// Remaining planned courses.
    pub remaining: Vec<RemainingCourse>,
}

/// Validates a target GPA: a finite number in `[0.0, 4.0]`.
pub fn validate_target_gpa(value: &Value) -> Result<f64, ValidationError> {
    let target = value
        .as_f64()
        .ok_or_else(|| ValidationError::with_field("Target GPA must be a number", "targetGpa"))?;

    if !target.is_finite() {
        return Err(ValidationError::with_field(
            "Target GPA must be a finite number",
            "targetGpa",
        ));
    }

    if !(0.0..=Grade::MAX_POINTS).contains(&target) {
        return Err(ValidationError::with_field(
            "Target GPA must be between 0.0 and 4.0",
            "targetGpa",
        ));
    }

    Ok(target)
}

/// Validates a credit (or quality-point) value: a finite number `>= 0`.
///
/// `field_name` is embedded in the error message for caller context.
pub fn validate_credits(value: &Value, field_name: &str) -> Result<f64, ValidationError> {
    let credits = value.as_f64().ok_or_else(|| {
        ValidationError::with_field(format!("{field_name} must be a number"), field_name)
    })?;

    if !credits.is_finite() {
        return Err(ValidationError::with_field(
            format!("{field_name} must be a finite number"),
            field_name,
        ));
    }

    if credits < 0.0 {
        return Err(ValidationError::with_field(
            format!("{field_name} cannot be negative"),
            field_name,
        ));
    }

    Ok(credits)
}

/// Validates a grade value.
///
/// Null and the empty string normalize to `None` ("no grade set" — a
/// valid absent state, not an error). Anything else must be a member of
/// the grade enumeration.
pub fn validate_grade(value: &Value) -> Result<Option<Grade>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::String(label) if label.is_empty() => Ok(None),
        Value::String(label) => Grade::parse(label).map(Some).ok_or_else(invalid_grade),
        _ => Err(invalid_grade()),
    }
}

fn invalid_grade() -> ValidationError {
    ValidationError::with_field(
        "Invalid grade. Must be one of: A, A-, B+, B, B-, C+, C, C-, D+, D, D-, E",
        "grade",
    )
}

/// Validates a single remaining-course object.
///
/// Requires an object with valid `credits`; `goalGrade` is validated when
/// present; a string `id` passes through unchanged, any other `id` is
/// dropped.
pub fn validate_remaining_course(value: &Value) -> Result<RemainingCourse, ValidationError> {
    let object = value
        .as_object()
        .ok_or_else(|| ValidationError::new("Course must be an object"))?;

    let null = Value::Null;
    let credits = validate_credits(object.get("credits").unwrap_or(&null), "course.credits")?;

    let goal_grade = match object.get("goalGrade") {
        Some(grade) => validate_grade(grade)?,
        None => None,
    };

    let id = object.get("id").and_then(Value::as_str).map(str::to_owned);

    Ok(RemainingCourse {
        id,
        credits,
        goal_grade,
    })
}

/// Validates an array of remaining courses.
///
/// On element failure, re-raises with the element index prefixed into the
/// message (e.g. `Course 1: course.credits cannot be negative`) and the
/// field set to `remaining[{index}]`.
pub fn validate_remaining_courses(value: &Value) -> Result<Vec<RemainingCourse>, ValidationError> {
    let list = value
        .as_array()
        .ok_or_else(|| ValidationError::new("Remaining courses must be an array"))?;

    list.iter()
        .enumerate()
        .map(|(index, course)| {
            validate_remaining_course(course).map_err(|error| {
                ValidationError::with_field(
                    format!("Course {index}: {}", error.message),
                    format!("remaining[{index}]"),
                )
            })
        })
        .collect()
}

/// Validates a complete distribution request payload.
pub fn validate_distribution_request(value: &Value) -> Result<DistributionRequest, ValidationError> {
    let object = value
        .as_object()
        .ok_or_else(|| ValidationError::new("Payload must be an object"))?;

    let null = Value::Null;
    Ok(DistributionRequest {
        target_gpa: validate_target_gpa(object.get("targetGpa").unwrap_or(&null))?,
        completed_credits: validate_credits(
            object.get("completedCredits").unwrap_or(&null),
            "completedCredits",
        )?,
        completed_quality_points: validate_credits(
            object.get("completedQualityPoints").unwrap_or(&null),
            "completedQualityPoints",
        )?,
        remaining: validate_remaining_courses(object.get("remaining").unwrap_or(&null))?,
    })
}
