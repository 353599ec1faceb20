//! Feasibility solving and projection for graduation targets.
//!
//! Provides goal-lock partitioning, the required-quality-point gap
//! calculation, the greedy grade-distribution solver, and goal-grade GPA
//! projection.
//!
//! # Algorithm
//!
//! `distribution_for_target` is a greedy, lowest-safe-grade heuristic: it
//! visits free courses by credit load (descending) and gives each the
//! least generous grade that keeps the target reachable by the courses
//! after it. It is fast and deterministic, not optimal.
//!
//! # Projection
//!
//! `GpaProjection` computes the graduation GPA implied by the goal grades
//! alone, with an on-track status against the target.

mod greedy;
mod partition;
mod projection;

pub use greedy::{distribution_for_target, required_qp_at_graduation};
pub use partition::{lock_from_goals, LockedPartition};
pub use projection::{GpaProjection, ProjectionStatus};
