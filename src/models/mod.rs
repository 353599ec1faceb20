//! GPA domain models.
//!
//! Provides the core data types for representing transcripts, graduation
//! plans, and solver results. All arithmetic is floating-point on the 4.0
//! scale; grade points carry one decimal digit, so quality-point sums are
//! not assumed integer-clean.
//!
//! # Vocabulary
//!
//! | u-gpa | Registrar term |
//! |-------|----------------|
//! | Quality points | Credits × grade points, summed |
//! | Locked course | Remaining course with a goal grade pre-assigned |
//! | Free course | Remaining course the solver assigns a grade to |

mod course;
mod distribution;
mod grade;
mod totals;

pub use course::{CompletedCourse, RemainingCourse};
pub use distribution::{format_distribution_message, DistributionResult};
pub use grade::Grade;
pub use totals::Totals;
