//! Greedy grade-distribution solver.
//!
//! Determines whether a target graduation GPA is attainable and, when it
//! is, assigns a letter grade to every free remaining course.
//!
//! # Algorithm
//!
//! 1. No remaining credits → feasibility is just current QP vs. target QP.
//! 2. Partition remaining courses into locked and free.
//! 3. Quality points still needed from free courses:
//!    `max(0, target_gpa × total_credits − (completed_qp + locked_qp))`.
//! 4. No free credits → feasibility only, nothing to solve.
//! 5. Required average over free credits; above the scale maximum the
//!    target is unattainable outright.
//! 6. Greedy fill: walk free courses by credits descending (stable on
//!    ties) and give each the lowest grade that keeps the residual need
//!    coverable by straight As on the courses after it. Low grades are
//!    front-loaded onto high-credit courses; slack drifts to the tail.
//!
//! The heuristic is deterministic, not optimal — a different visit order
//! or scan direction yields a different (still feasible) distribution.
//! Feasibility comparisons are strict float comparisons with no epsilon.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 16 (Greedy
//! Algorithms)

use std::collections::HashMap;

use crate::models::{DistributionResult, Grade, RemainingCourse};

use super::lock_from_goals;

/// Total quality points still required at graduation to hit the target.
///
/// `max(0, target_gpa × (completed + remaining credits) − completed_qp)`.
/// Never negative: a target already exceeded returns `0` ("nothing further
/// required"), discarding the surplus.
pub fn required_qp_at_graduation(
    completed_credits: f64,
    completed_qp: f64,
    remaining_credits: f64,
    target_gpa: f64,
) -> f64 {
    let total_credits = completed_credits + remaining_credits;
    let qp_target = target_gpa * total_credits;
    (qp_target - completed_qp).max(0.0)
}

/// Solves for a per-grade course-count distribution meeting the target.
///
/// Never fails for validated input — every branch returns a structured
/// [`DistributionResult`].
///
/// ```
/// use u_gpa::models::RemainingCourse;
/// use u_gpa::solver::distribution_for_target;
///
/// // 3.0 GPA over 60 credits, two 3-credit courses left, holding at 3.0.
/// let remaining = vec![RemainingCourse::new(3.0), RemainingCourse::new(3.0)];
/// let result = distribution_for_target(60.0, 180.0, &remaining, 3.0);
///
/// assert!(result.feasible);
/// assert_eq!(result.assigned_count(), 2);
/// ```
pub fn distribution_for_target(
    completed_credits: f64,
    completed_qp: f64,
    remaining: &[RemainingCourse],
    target_gpa: f64,
) -> DistributionResult {
    let remaining_credits: f64 = remaining.iter().map(|course| course.credits).sum();

    // No remaining courses: the transcript alone decides.
    if remaining_credits <= 0.0 {
        let feasible = completed_qp >= target_gpa * completed_credits;
        let message = if feasible {
            "You have no remaining courses. Your current GPA exceeds your target."
        } else {
            "You have no remaining courses. Your current GPA is below your target."
        };
        return DistributionResult {
            feasible,
            required_avg: 0.0,
            quality_points_needed: 0.0,
            distribution: HashMap::new(),
            message: Some(message.to_string()),
        };
    }

    let partition = lock_from_goals(remaining);

    let total_credits = completed_credits + remaining_credits;
    let qp_target = target_gpa * total_credits;

    // Quality points that must come from free courses.
    let qp_needed_free =
        (qp_target - (completed_qp + partition.locked_quality_points)).max(0.0);
    let free_credits = remaining_credits - partition.locked_credits;

    // Everything locked: feasibility only, no distribution to solve for.
    if free_credits <= 0.0 {
        let feasible = qp_needed_free <= 0.0;
        let message = if feasible {
            "All remaining courses have goal grades set. Your target is achievable."
        } else {
            "All remaining courses have goal grades set. Your target is not achievable with these grades."
        };
        return DistributionResult {
            feasible,
            required_avg: 0.0,
            quality_points_needed: qp_needed_free,
            distribution: HashMap::new(),
            message: Some(message.to_string()),
        };
    }

    let required_avg = qp_needed_free / free_credits;

    // Even straight As cannot close the gap.
    if required_avg > Grade::MAX_POINTS {
        return DistributionResult {
            feasible: false,
            required_avg,
            quality_points_needed: qp_needed_free,
            distribution: HashMap::new(),
            message: Some(format!(
                "This target is impossible. You would need an average of {required_avg:.2} GPA on remaining courses, but the maximum is 4.0."
            )),
        };
    }

    // Greedy fill over free courses, largest credit load first so the
    // coarsest assignments happen while the most slack remains.
    let mut distribution: HashMap<Grade, u32> =
        Grade::ALL.iter().map(|&grade| (grade, 0)).collect();

    let mut sorted_free = partition.free;
    sorted_free.sort_by(|a, b| {
        b.credits
            .partial_cmp(&a.credits)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut qp_accumulated = 0.0;

    for (index, course) in sorted_free.iter().enumerate() {
        let qp_still_required = qp_needed_free - qp_accumulated;
        let credits_after_this: f64 = sorted_free[index + 1..]
            .iter()
            .map(|c| c.credits)
            .sum();
        let max_qp_from_rest = credits_after_this * Grade::MAX_POINTS;

        // Lowest grade that keeps the residual coverable by the courses
        // after this one. Falls back to A if the scan finds nothing
        // (unreachable once the average check above has passed).
        let mut selected = Grade::A;
        for &grade in Grade::ALL.iter().rev() {
            let qp_if_chosen = course.credits * grade.points();
            if qp_still_required - qp_if_chosen <= max_qp_from_rest {
                selected = grade;
                break;
            }
        }

        *distribution.entry(selected).or_insert(0) += 1;
        qp_accumulated += course.credits * selected.points();
    }

    let feasible = qp_accumulated >= qp_needed_free;

    DistributionResult {
        feasible,
        required_avg,
        quality_points_needed: (qp_needed_free - qp_accumulated).max(0.0),
        distribution,
        message: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(result: &DistributionResult, grade: Grade) -> u32 {
        result.distribution.get(&grade).copied().unwrap_or(0)
    }

    #[test]
    fn test_required_qp_basic() {
        // 3.0 over 60 credits, want 3.5 over 120: 420 - 180 = 240.
        assert_eq!(required_qp_at_graduation(60.0, 180.0, 60.0, 3.5), 240.0);
    }

    #[test]
    fn test_required_qp_partial_progress() {
        // 240 QP banked; 420 needed in total.
        assert_eq!(required_qp_at_graduation(60.0, 240.0, 60.0, 3.5), 180.0);
    }

    #[test]
    fn test_required_qp_target_already_met() {
        assert_eq!(required_qp_at_graduation(120.0, 480.0, 0.0, 3.5), 0.0);
    }

    #[test]
    fn test_required_qp_never_negative() {
        assert!(required_qp_at_graduation(120.0, 500.0, 0.0, 3.5) >= 0.0);
        assert!(required_qp_at_graduation(0.0, 0.0, 0.0, 4.0) >= 0.0);
    }

    #[test]
    fn test_no_remaining_courses_target_met() {
        let result = distribution_for_target(100.0, 400.0, &[], 4.0);

        assert!(result.feasible);
        assert_eq!(result.required_avg, 0.0);
        assert_eq!(result.quality_points_needed, 0.0);
        assert!(result.distribution.is_empty());
        assert_eq!(
            result.message.as_deref(),
            Some("You have no remaining courses. Your current GPA exceeds your target.")
        );
    }

    #[test]
    fn test_no_remaining_courses_target_missed() {
        let result = distribution_for_target(100.0, 350.0, &[], 4.0);

        assert!(!result.feasible);
        assert_eq!(result.required_avg, 0.0);
        assert_eq!(
            result.message.as_deref(),
            Some("You have no remaining courses. Your current GPA is below your target.")
        );
    }

    #[test]
    fn test_all_locked_exactly_meets_target() {
        // 210 QP over 60 credits; locks add 30×A + 30×B = 210 QP.
        // Graduation: 420 QP over 120 credits = 3.5 exactly.
        let remaining = vec![
            RemainingCourse::new(30.0).with_goal_grade(Grade::A),
            RemainingCourse::new(30.0).with_goal_grade(Grade::B),
        ];

        let result = distribution_for_target(60.0, 210.0, &remaining, 3.5);

        assert!(result.feasible);
        assert_eq!(result.required_avg, 0.0);
        assert!(result.distribution.is_empty());
        assert_eq!(
            result.message.as_deref(),
            Some("All remaining courses have goal grades set. Your target is achievable.")
        );
    }

    #[test]
    fn test_all_locked_misses_target() {
        // Locked grades too low for a 4.0 finish.
        let remaining = vec![RemainingCourse::new(30.0).with_goal_grade(Grade::C)];

        let result = distribution_for_target(60.0, 240.0, &remaining, 4.0);

        assert!(!result.feasible);
        assert!(result.quality_points_needed > 0.0);
        assert_eq!(
            result.message.as_deref(),
            Some("All remaining courses have goal grades set. Your target is not achievable with these grades.")
        );
    }

    #[test]
    fn test_impossible_average() {
        // 390 QP over 100 credits; 4.0 over 110 needs 50 QP on 10 credits.
        let remaining = vec![RemainingCourse::new(10.0)];

        let result = distribution_for_target(100.0, 390.0, &remaining, 4.0);

        assert!(!result.feasible);
        assert_eq!(result.required_avg, 5.0);
        assert_eq!(result.quality_points_needed, 50.0);
        assert!(result.distribution.is_empty());
        assert_eq!(
            result.message.as_deref(),
            Some("This target is impossible. You would need an average of 5.00 GPA on remaining courses, but the maximum is 4.0.")
        );
    }

    #[test]
    fn test_greedy_fill_pins_heuristic_output() {
        // 300 QP over 100 credits; 3.0 over 125 needs 75 QP on five
        // 5-credit courses. The greedy walk gives the first course an E
        // (the rest can still cover 75 with As), the second a B, then
        // straight As.
        let remaining = vec![
            RemainingCourse::new(5.0),
            RemainingCourse::new(5.0),
            RemainingCourse::new(5.0),
            RemainingCourse::new(5.0),
            RemainingCourse::new(5.0),
        ];

        let result = distribution_for_target(100.0, 300.0, &remaining, 3.0);

        assert!(result.feasible);
        assert_eq!(result.required_avg, 3.0);
        assert_eq!(result.quality_points_needed, 0.0);
        assert_eq!(count(&result, Grade::E), 1);
        assert_eq!(count(&result, Grade::B), 1);
        assert_eq!(count(&result, Grade::A), 3);
        assert_eq!(result.assigned_count(), 5);
    }

    #[test]
    fn test_greedy_sorts_by_credits_descending() {
        // Fresh transcript, 2.0 target over a 2-credit and a 4-credit
        // course. The 4-credit course is visited first and takes the low
        // grade; visiting in input order would give 1 E and 1 B instead.
        let remaining = vec![RemainingCourse::new(2.0), RemainingCourse::new(4.0)];

        let result = distribution_for_target(0.0, 0.0, &remaining, 2.0);

        assert!(result.feasible);
        assert_eq!(count(&result, Grade::D), 1);
        assert_eq!(count(&result, Grade::A), 1);
    }

    #[test]
    fn test_single_course_needs_a_minus() {
        // 210 QP over 60 credits; 3.5 over 63 needs 10.5 QP on 3 credits,
        // a 3.5 average → lowest sufficient grade is A-.
        let remaining = vec![RemainingCourse::new(3.0)];

        let result = distribution_for_target(60.0, 210.0, &remaining, 3.5);

        assert!(result.feasible);
        assert_eq!(count(&result, Grade::AMinus), 1);
        assert_eq!(result.message, None);
    }

    #[test]
    fn test_locked_courses_reduce_free_need() {
        // 300 QP over 100 credits; 3.0 over 120. Ten credits locked at A
        // leave 20 QP on 10 free credits → a C.
        let remaining = vec![
            RemainingCourse::new(10.0).with_goal_grade(Grade::A),
            RemainingCourse::new(10.0),
        ];

        let result = distribution_for_target(100.0, 300.0, &remaining, 3.0);

        assert!(result.feasible);
        assert_eq!(result.assigned_count(), 1);
        assert_eq!(count(&result, Grade::C), 1);
    }

    #[test]
    fn test_zero_target_assigns_lowest_grades() {
        let remaining = vec![RemainingCourse::new(10.0)];

        let result = distribution_for_target(60.0, 240.0, &remaining, 0.0);

        assert!(result.feasible);
        assert_eq!(result.quality_points_needed, 0.0);
        assert_eq!(count(&result, Grade::E), 1);
    }

    #[test]
    fn test_distribution_covers_all_free_courses() {
        let remaining = vec![
            RemainingCourse::new(3.0),
            RemainingCourse::new(4.0),
            RemainingCourse::new(1.5),
            RemainingCourse::new(3.0),
        ];

        let result = distribution_for_target(30.0, 120.0, &remaining, 3.8);

        if result.feasible {
            assert_eq!(result.assigned_count(), remaining.len() as u32);
        }
        // The full scale is present in the map, zero counts included.
        assert_eq!(result.distribution.len(), Grade::ALL.len());
    }

    #[test]
    fn test_exact_four_point_average_is_feasible() {
        // Needing exactly 4.0 on every free course is the boundary case
        // and stays feasible: 0 QP over 10 credits, 4.0 target.
        let remaining = vec![RemainingCourse::new(5.0), RemainingCourse::new(5.0)];

        let result = distribution_for_target(0.0, 0.0, &remaining, 4.0);

        assert!(result.feasible);
        assert_eq!(result.required_avg, 4.0);
        assert_eq!(count(&result, Grade::A), 2);
        assert_eq!(result.quality_points_needed, 0.0);
    }
}
