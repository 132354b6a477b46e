//! Target solving: the raw mark still needed on one unknown component
//!
//! The aggregation formula is linear, so for a desired total and the
//! weighted sum of every known component the unknown raw mark is
//! `(target - known) / weight * source_max`.

use crate::core::internal::{fill_assignments, AssignmentDefault};
use crate::core::models::{IntegratedMarks, Layout, TheoryMarks};
use crate::core::round_to;
use crate::core::scale::{
    weighted_sum, Component, INTEGRATED_CIE3, INTEGRATED_COMPONENTS, THEORY_COMPONENTS,
    THEORY_MODEL,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feasibility of a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetStatus {
    /// Known components already reach the target
    Achieved,
    /// Even a full mark on the unknown component falls short
    Impossible,
    /// Reachable with the reported mark
    Normal,
}

impl fmt::Display for TargetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Achieved => "achieved",
            Self::Impossible => "impossible",
            Self::Normal => "normal",
        };
        f.write_str(as_str)
    }
}

/// Decimal places kept before classifying a requirement
const SNAP_PLACES: i32 = 9;

/// Solver output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredMark {
    /// Raw mark on the unknown component.
    ///
    /// `Normal`: rounded up to a whole mark. `Impossible`: the fractional
    /// requirement to one decimal. `Achieved`: the unrounded (non-positive)
    /// requirement.
    pub required_raw_mark: f64,
    /// Feasibility classification
    pub status: TargetStatus,
    /// Maximum raw mark of the unknown component
    pub source_max: f64,
}

impl RequiredMark {
    /// User-facing message. `label` names the unknown component.
    #[must_use]
    pub fn message(&self, label: &str) -> String {
        match self.status {
            TargetStatus::Achieved => {
                format!("Target already achieved! You don't need any marks in {label}.")
            }
            TargetStatus::Impossible => format!(
                "Impossible target. You would need {:.1}/{} in {label}.",
                self.required_raw_mark, self.source_max
            ),
            TargetStatus::Normal => format!(
                "You need {}/{} in {label}.",
                self.required_raw_mark, self.source_max
            ),
        }
    }
}

/// Solve for the raw mark needed on the unknown component.
///
/// # Arguments
/// * `target` - Desired layout total
/// * `known_weighted_sum` - Weighted contribution of every known component
/// * `unknown_weight` - Target weight of the unknown component (> 0)
/// * `unknown_source_max` - Maximum raw mark of the unknown component (> 0)
#[must_use]
pub fn solve_required_mark(
    target: f64,
    known_weighted_sum: f64,
    unknown_weight: f64,
    unknown_source_max: f64,
) -> RequiredMark {
    let needed_weighted = target - known_weighted_sum;
    let required = needed_weighted / unknown_weight * unknown_source_max;
    // Division noise such as 42.00000000000001 must not ceil to 43
    let snapped = round_to(required, SNAP_PLACES);

    let (required_raw_mark, status) = if snapped <= 0.0 {
        (required, TargetStatus::Achieved)
    } else if snapped > unknown_source_max {
        (round_to(required, 1), TargetStatus::Impossible)
    } else {
        // Rounding up keeps the reported mark sufficient
        (snapped.ceil(), TargetStatus::Normal)
    };

    crate::debug!(
        "target {target:.2}, known {known_weighted_sum:.3}, required {required:.3} -> {status}"
    );

    RequiredMark {
        required_raw_mark,
        status,
        source_max: unknown_source_max,
    }
}

/// A target solved against one layout's unknown component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSolution {
    /// Layout solved for
    pub layout: Layout,
    /// Component treated as unknown
    pub unknown: Component,
    /// Solver output
    pub required: RequiredMark,
}

impl TargetSolution {
    /// Name of the unknown component as shown to users
    #[must_use]
    pub const fn unknown_label(&self) -> &'static str {
        match self.layout {
            Layout::Theory => "Model",
            Layout::Integrated => "Model/CIE3",
        }
    }

    /// User-facing message for this solution
    #[must_use]
    pub fn message(&self) -> String {
        match (self.required.status, self.layout) {
            (TargetStatus::Normal, Layout::Theory) => format!(
                "You need {}/{} in Model Exam.",
                self.required.required_raw_mark, self.required.source_max
            ),
            _ => self.required.message(self.unknown_label()),
        }
    }
}

/// Solve a Theory target with the model exam as the unknown.
///
/// The `model` field of `marks` is ignored. Blank assignments follow
/// `assignments`, as in the forward calculation.
#[must_use]
pub fn solve_theory_target(
    target: f64,
    marks: &TheoryMarks,
    assignments: AssignmentDefault,
) -> TargetSolution {
    let known = TheoryMarks {
        model: None,
        ..fill_assignments(marks, assignments)
    };
    let known_sum = weighted_sum(&THEORY_COMPONENTS, &known.values());
    TargetSolution {
        layout: Layout::Theory,
        unknown: THEORY_MODEL,
        required: solve_required_mark(
            target,
            known_sum,
            THEORY_MODEL.spec.target_weight,
            THEORY_MODEL.spec.source_max,
        ),
    }
}

/// Solve an Integrated target with CIE 3 as the unknown.
///
/// The `cie3` field of `marks` is ignored.
#[must_use]
pub fn solve_integrated_target(target: f64, marks: &IntegratedMarks) -> TargetSolution {
    let known = IntegratedMarks {
        cie3: None,
        ..*marks
    };
    let known_sum = weighted_sum(&INTEGRATED_COMPONENTS, &known.values());
    TargetSolution {
        layout: Layout::Integrated,
        unknown: INTEGRATED_CIE3,
        required: solve_required_mark(
            target,
            known_sum,
            INTEGRATED_CIE3.spec.target_weight,
            INTEGRATED_CIE3.spec.source_max,
        ),
    }
}
