//! Semester model (CGPA context)

use super::RawMark;
use serde::{Deserialize, Serialize};

/// A completed semester: its GPA and, optionally, its total credits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Semester GPA on the 10-point scale
    pub gpa: f64,

    /// Total credits for the semester; absent means "unknown"
    pub credits: RawMark,
}

impl Semester {
    /// Create a semester with known credits
    #[must_use]
    pub const fn new(gpa: f64, credits: f64) -> Self {
        Self {
            gpa,
            credits: Some(credits),
        }
    }

    /// Create a semester whose credits were not entered
    #[must_use]
    pub const fn without_credits(gpa: f64) -> Self {
        Self { gpa, credits: None }
    }

    /// Credits with absent (or negative) treated as 0
    #[must_use]
    pub fn credit_weight(&self) -> f64 {
        self.credits.filter(|c| c.is_finite()).unwrap_or(0.0).max(0.0)
    }
}
