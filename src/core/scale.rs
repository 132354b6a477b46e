//! Scale conversion and the fixed weight tables
//!
//! Every component of an internal mark is entered on its own scale (a CIE
//! out of 50, an assignment out of 10, ...) and contributes a fixed weight to
//! the layout's total. Conversion is linear: `mark / source_max * weight`.

use crate::core::models::{Layout, RawMark};

/// Source scale and target weight of one component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightSpec {
    /// Maximum raw mark on the component's own scale (always > 0)
    pub source_max: f64,
    /// Contribution of a full raw mark to the layout total
    pub target_weight: f64,
}

impl WeightSpec {
    /// Create a weight spec
    #[must_use]
    pub const fn new(source_max: f64, target_weight: f64) -> Self {
        Self {
            source_max,
            target_weight,
        }
    }

    /// Convert a raw mark (absent counts as 0)
    #[must_use]
    pub fn apply(&self, raw: RawMark) -> f64 {
        convert(raw, self.source_max, self.target_weight)
    }
}

/// A named component of a layout's weight table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    /// Field name, matching the marks record
    pub name: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Scale and weight
    pub spec: WeightSpec,
}

impl Component {
    const fn new(name: &'static str, label: &'static str, source_max: f64, target_weight: f64) -> Self {
        Self {
            name,
            label,
            spec: WeightSpec::new(source_max, target_weight),
        }
    }
}

/// Theory CIE 1: 50 → 8
pub const THEORY_CIE1: Component = Component::new("cie1", "CIE 1", 50.0, 8.0);
/// Theory CIE 2: 50 → 8
pub const THEORY_CIE2: Component = Component::new("cie2", "CIE 2", 50.0, 8.0);
/// Theory assignment 1: 10 → 4
pub const THEORY_ASSIGNMENT1: Component = Component::new("assignment1", "Assignment 1", 10.0, 4.0);
/// Theory assignment 2: 10 → 4
pub const THEORY_ASSIGNMENT2: Component = Component::new("assignment2", "Assignment 2", 10.0, 4.0);
/// Theory assignment 3: 10 → 6
pub const THEORY_ASSIGNMENT3: Component = Component::new("assignment3", "Assignment 3", 10.0, 6.0);
/// Theory model exam: 100 → 10
pub const THEORY_MODEL: Component = Component::new("model", "Model Exam", 100.0, 10.0);

/// Integrated CIE 1: 50 → 7
pub const INTEGRATED_CIE1: Component = Component::new("cie1", "CIE 1", 50.0, 7.0);
/// Integrated CIE 2: 50 → 7
pub const INTEGRATED_CIE2: Component = Component::new("cie2", "CIE 2", 50.0, 7.0);
/// Integrated CIE 3 / model: 100 → 11
pub const INTEGRATED_CIE3: Component = Component::new("cie3", "CIE 3", 100.0, 11.0);
/// Integrated practical 1: 50 → 7
pub const INTEGRATED_PRACTICAL1: Component = Component::new("practical1", "Practical 1", 50.0, 7.0);
/// Integrated practical 2: 50 → 7
pub const INTEGRATED_PRACTICAL2: Component = Component::new("practical2", "Practical 2", 50.0, 7.0);
/// Integrated practical 3: 100 → 11
pub const INTEGRATED_PRACTICAL3: Component =
    Component::new("practical3", "Practical 3", 100.0, 11.0);

/// Theory weight table, in `TheoryMarks` field order
pub const THEORY_COMPONENTS: [Component; 6] = [
    THEORY_CIE1,
    THEORY_CIE2,
    THEORY_ASSIGNMENT1,
    THEORY_ASSIGNMENT2,
    THEORY_ASSIGNMENT3,
    THEORY_MODEL,
];

/// Integrated weight table, in `IntegratedMarks` field order
pub const INTEGRATED_COMPONENTS: [Component; 6] = [
    INTEGRATED_CIE1,
    INTEGRATED_CIE2,
    INTEGRATED_CIE3,
    INTEGRATED_PRACTICAL1,
    INTEGRATED_PRACTICAL2,
    INTEGRATED_PRACTICAL3,
];

/// Weight table for a layout
#[must_use]
pub const fn components(layout: Layout) -> &'static [Component; 6] {
    match layout {
        Layout::Theory => &THEORY_COMPONENTS,
        Layout::Integrated => &INTEGRATED_COMPONENTS,
    }
}

/// Convert a raw mark on `source_max` to its weighted contribution.
///
/// Absent and non-finite marks contribute 0. No rounding and no clamping
/// happen here; the aggregator clamps the final total.
#[must_use]
pub fn convert(raw: RawMark, source_max: f64, target_weight: f64) -> f64 {
    debug_assert!(source_max > 0.0, "source_max must be positive");
    raw.filter(|v| v.is_finite())
        .map_or(0.0, |v| v / source_max * target_weight)
}

/// Sum the weighted contributions of `values` against `table`, pairwise.
#[must_use]
pub fn weighted_sum(table: &[Component], values: &[RawMark]) -> f64 {
    table
        .iter()
        .zip(values)
        .map(|(component, raw)| {
            let weighted = component.spec.apply(*raw);
            crate::debug!(
                "{}: {:?}/{} -> {weighted:.3}",
                component.name,
                raw,
                component.spec.source_max
            );
            weighted
        })
        .sum()
}
