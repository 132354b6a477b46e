//! Internal-mark aggregation for the Theory and Integrated layouts

use crate::core::models::{IntegratedMarks, Layout, PaperMarks, RawMark, TheoryMarks};
use crate::core::round_to;
use crate::core::scale::{
    weighted_sum, WeightSpec, INTEGRATED_COMPONENTS, THEORY_ASSIGNMENT1, THEORY_ASSIGNMENT2,
    THEORY_ASSIGNMENT3, THEORY_COMPONENTS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const THEORY_BANDS: [(f64, &str); 3] = [
    (35.0, "Excellent work!"),
    (30.0, "Great job!"),
    (20.0, "Good effort, keep improving."),
];
const THEORY_FALLBACK: &str = "Needs improvement.";

const INTEGRATED_BANDS: [(f64, &str); 3] = [
    (45.0, "Outstanding performance!"),
    (35.0, "Great job!"),
    (25.0, "Good effort."),
];
const INTEGRATED_FALLBACK: &str = "Focus on the practicals.";

/// What a blank Theory assignment counts as
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentDefault {
    /// Blank assignments score 0
    #[default]
    Zero,
    /// Blank assignments score full marks (10/10)
    Full,
}

impl AssignmentDefault {
    /// Raw mark substituted for a blank field with the given scale
    #[must_use]
    pub const fn fill(self, spec: &WeightSpec) -> RawMark {
        match self {
            Self::Zero => None,
            Self::Full => Some(spec.source_max),
        }
    }

    /// Name used in the config file
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Full => "full",
        }
    }
}

impl FromStr for AssignmentDefault {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zero" | "0" => Ok(Self::Zero),
            "full" | "max" => Ok(Self::Full),
            _ => Err(format!(
                "Invalid assignment default: '{s}' (expected 'zero' or 'full')"
            )),
        }
    }
}

impl fmt::Display for AssignmentDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of an internal-mark calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Clamped total, rounded to one decimal place
    pub total: f64,
    /// Maximum possible total for the layout
    pub max_total: f64,
    /// Clamped, unrounded total as a percentage of `max_total`
    pub percentage: f64,
    /// Qualitative message for the total
    pub message: String,
}

impl CalculationResult {
    /// One-line text summary suitable for copying
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "Total Internal Marks: {}/{} ({})",
            self.total, self.max_total, self.message
        )
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary_line())
    }
}

/// Calculate Theory internal marks, blank assignments counting as 0.
#[must_use]
pub fn calculate_theory(marks: &TheoryMarks) -> CalculationResult {
    calculate_theory_with(marks, AssignmentDefault::Zero)
}

/// Calculate Theory internal marks with an explicit blank-assignment policy.
#[must_use]
pub fn calculate_theory_with(
    marks: &TheoryMarks,
    assignments: AssignmentDefault,
) -> CalculationResult {
    let filled = fill_assignments(marks, assignments);
    let raw_total = weighted_sum(&THEORY_COMPONENTS, &filled.values());
    summarize(Layout::Theory, raw_total)
}

/// Calculate Integrated internal marks. Blank fields count as 0.
#[must_use]
pub fn calculate_integrated(marks: &IntegratedMarks) -> CalculationResult {
    let raw_total = weighted_sum(&INTEGRATED_COMPONENTS, &marks.values());
    summarize(Layout::Integrated, raw_total)
}

/// Calculate internal marks for either layout
#[must_use]
pub fn calculate(marks: &PaperMarks, assignments: AssignmentDefault) -> CalculationResult {
    match marks {
        PaperMarks::Theory(m) => calculate_theory_with(m, assignments),
        PaperMarks::Integrated(m) => calculate_integrated(m),
    }
}

/// Substitute the policy value for blank Theory assignments
pub(crate) fn fill_assignments(marks: &TheoryMarks, assignments: AssignmentDefault) -> TheoryMarks {
    TheoryMarks {
        assignment1: marks
            .assignment1
            .or_else(|| assignments.fill(&THEORY_ASSIGNMENT1.spec)),
        assignment2: marks
            .assignment2
            .or_else(|| assignments.fill(&THEORY_ASSIGNMENT2.spec)),
        assignment3: marks
            .assignment3
            .or_else(|| assignments.fill(&THEORY_ASSIGNMENT3.spec)),
        ..*marks
    }
}

fn summarize(layout: Layout, raw_total: f64) -> CalculationResult {
    let max_total = layout.max_total();
    // f64::max drops NaN, so a malformed total clamps to 0
    let clamped = raw_total.max(0.0).min(max_total);
    if (clamped - raw_total).abs() > f64::EPSILON {
        crate::debug!("{layout} total {raw_total:.3} clamped to {clamped:.3}");
    }

    let (bands, fallback) = match layout {
        Layout::Theory => (&THEORY_BANDS, THEORY_FALLBACK),
        Layout::Integrated => (&INTEGRATED_BANDS, INTEGRATED_FALLBACK),
    };

    CalculationResult {
        total: round_to(clamped, 1),
        max_total,
        percentage: clamped / max_total * 100.0,
        message: band_message(clamped, bands, fallback).to_string(),
    }
}

/// First band (high to low) whose threshold `value` reaches
fn band_message(value: f64, bands: &[(f64, &'static str)], fallback: &'static str) -> &'static str {
    bands
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map_or(fallback, |(_, message)| message)
}
