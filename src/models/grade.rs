//! Letter-grade scale.
//!
//! A closed twelve-step letter-grade enumeration on the 4.0 scale, with a
//! fixed grade-point value per grade and a canonical highest→lowest
//! ordering. The ordering is load-bearing: the distribution solver scans
//! it (reversed) when picking the lowest grade that keeps a plan feasible,
//! so changing it changes solver output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A letter grade on the 4.0 scale.
///
/// The enumeration is total: no other symbol is a valid grade. Each grade
/// maps to an immutable point value, strictly decreasing from `A` (4.0)
/// down to `E` (0.0).
///
/// Serializes as its letter label (`"A-"`, `"B+"`, …), so grades work both
/// as JSON values and as JSON object keys in distribution maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// 4.0
    A,
    /// 3.7
    #[serde(rename = "A-")]
    AMinus,
    /// 3.4
    #[serde(rename = "B+")]
    BPlus,
    /// 3.0
    B,
    /// 2.7
    #[serde(rename = "B-")]
    BMinus,
    /// 2.4
    #[serde(rename = "C+")]
    CPlus,
    /// 2.0
    C,
    /// 1.7
    #[serde(rename = "C-")]
    CMinus,
    /// 1.4
    #[serde(rename = "D+")]
    DPlus,
    /// 1.0
    D,
    /// 0.7
    #[serde(rename = "D-")]
    DMinus,
    /// 0.0
    E,
}

impl Grade {
    /// All grades, highest to lowest. This order is canonical.
    pub const ALL: [Grade; 12] = [
        Grade::A,
        Grade::AMinus,
        Grade::BPlus,
        Grade::B,
        Grade::BMinus,
        Grade::CPlus,
        Grade::C,
        Grade::CMinus,
        Grade::DPlus,
        Grade::D,
        Grade::DMinus,
        Grade::E,
    ];

    /// The highest grade-point value on the scale.
    pub const MAX_POINTS: f64 = 4.0;

    /// Grade-point value of this grade.
    pub fn points(self) -> f64 {
        match self {
            Grade::A => 4.0,
            Grade::AMinus => 3.7,
            Grade::BPlus => 3.4,
            Grade::B => 3.0,
            Grade::BMinus => 2.7,
            Grade::CPlus => 2.4,
            Grade::C => 2.0,
            Grade::CMinus => 1.7,
            Grade::DPlus => 1.4,
            Grade::D => 1.0,
            Grade::DMinus => 0.7,
            Grade::E => 0.0,
        }
    }

    /// Letter label of this grade (e.g. `"A-"`).
    pub fn label(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::DMinus => "D-",
            Grade::E => "E",
        }
    }

    /// Parses a letter label into a grade.
    ///
    /// Returns `None` for anything outside the enumeration; absence
    /// handling (null/empty input) is the validator's job, not this one's.
    pub fn parse(label: &str) -> Option<Grade> {
        match label {
            "A" => Some(Grade::A),
            "A-" => Some(Grade::AMinus),
            "B+" => Some(Grade::BPlus),
            "B" => Some(Grade::B),
            "B-" => Some(Grade::BMinus),
            "C+" => Some(Grade::CPlus),
            "C" => Some(Grade::C),
            "C-" => Some(Grade::CMinus),
            "D+" => Some(Grade::DPlus),
            "D" => Some(Grade::D),
            "D-" => Some(Grade::DMinus),
            "E" => Some(Grade::E),
            _ => None,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
