//! GPA forecasting engine.
//!
//! Predicts the letter-grade distribution a student must earn across
//! remaining courses to reach a target cumulative GPA at graduation, and
//! reports whether that target is attainable at all. The crate is a pure
//! computation library: given numeric and enumerated inputs it returns a
//! deterministic result or fails with a validation error. No storage,
//! no I/O, no UI — surrounding application layers call in with plain data
//! and render what comes back.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Grade`, `CompletedCourse`,
//!   `RemainingCourse`, `Totals`, `DistributionResult`
//! - **`validation`**: Boundary checks over untrusted JSON payloads
//! - **`solver`**: Goal-lock partitioning, required-quality-point gap,
//!   greedy distribution solver, goal-grade projection
//! - **`engine`**: Validated compute facade with structured logging
//!
//! # Concurrency
//!
//! Every function is a synchronous, side-effect-free transformation of
//! its inputs. There is no shared state; concurrent callers need no
//! coordination.

pub mod engine;
pub mod models;
pub mod solver;
pub mod validation;
