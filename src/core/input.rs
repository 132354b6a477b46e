//! Input handling at the boundary between the user and the engine
//!
//! Raw text becomes an absent-or-number mark, and numbers above a field's
//! declared maximum are clamped with an advisory. This is the first of two
//! clamping layers; the aggregator clamps its totals again.

use crate::core::models::{Layout, RawMark};

/// Declared maximum for a CIE 1 / CIE 2 / Practical 1 / Practical 2 field
pub const MAX_HALF_PAPER: f64 = 50.0;
/// Declared maximum for a CIE 3 / Practical 3 / Model field
pub const MAX_FULL_PAPER: f64 = 100.0;
/// Declared maximum for an assignment field
pub const MAX_ASSIGNMENT: f64 = 10.0;
/// Declared maximum for paper credits
pub const MAX_PAPER_CREDITS: f64 = 20.0;
/// Declared maximum for semester credits
pub const MAX_SEMESTER_CREDITS: f64 = 30.0;
/// Declared maximum for a GPA or CGPA
pub const MAX_GPA: f64 = 10.0;
/// Declared maximum for an expected external mark
pub const MAX_EXTERNAL: f64 = 100.0;

/// Declared maximum for a target internal mark or an internal mark
#[must_use]
pub const fn max_internal(layout: Layout) -> f64 {
    layout.max_total()
}

/// A parsed field value and the advisory produced while bounding it
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    /// Value to hand to the engine
    pub value: RawMark,
    /// Set when the entered value was replaced by the maximum
    pub advisory: Option<String>,
}

/// Parse user text into a mark.
///
/// Empty, whitespace-only, non-numeric, negative and non-finite text are all
/// absent. Decimals are accepted.
#[must_use]
pub fn parse_mark(text: &str) -> RawMark {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Clamp a value to `max`, producing an advisory when it was exceeded.
#[must_use]
pub fn clamp_to_max(value: RawMark, max: f64) -> FieldValue {
    match value {
        Some(v) if v > max => FieldValue {
            value: Some(max),
            advisory: Some(format!("Max value is {max}")),
        },
        _ => FieldValue {
            value,
            advisory: None,
        },
    }
}

/// Parse optional user text and bound it to `max`.
#[must_use]
pub fn read_field(text: Option<&str>, max: f64) -> FieldValue {
    clamp_to_max(text.and_then(parse_mark), max)
}
