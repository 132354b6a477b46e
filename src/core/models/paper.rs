//! Paper model (GPA context)

use super::{Layout, RawMark};
use serde::{Deserialize, Serialize};

/// A paper taken in a semester, as seen by the GPA predictor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    /// Paper layout; decides how the external mark is weighted
    pub layout: Layout,

    /// Credit hours (absent counts as 0)
    pub credits: RawMark,

    /// Internal mark, out of the layout's maximum total
    pub internal: RawMark,

    /// Expected external (semester) mark, out of 100
    pub external: RawMark,
}

impl Paper {
    /// Create a new paper
    ///
    /// # Arguments
    /// * `layout` - Theory or Integrated
    /// * `credits` - Credit hours
    /// * `internal` - Internal mark
    /// * `external` - External mark out of 100
    #[must_use]
    pub const fn new(layout: Layout, credits: RawMark, internal: RawMark, external: RawMark) -> Self {
        Self {
            layout,
            credits,
            internal,
            external,
        }
    }

    /// Credit hours with absent (or negative) treated as 0
    #[must_use]
    pub fn credit_weight(&self) -> f64 {
        self.credits.filter(|c| c.is_finite()).unwrap_or(0.0).max(0.0)
    }
}
