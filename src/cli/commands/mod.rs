//! CLI command handlers for `Markify`.
//!
//! Each command is implemented in its own submodule. Numeric text from the
//! command line goes through [`read`] before reaching the engine.

pub mod boost;
pub mod cgpa;
pub mod config;
pub mod gpa;
pub mod internal;
pub mod target;

use markify::core::input::read_field;
use markify::core::models::RawMark;
use markify::warn;

/// Parse and bound one field, reporting any advisory as a warning.
pub fn read(label: &str, text: Option<&str>, max: f64) -> RawMark {
    let field = read_field(text, max);
    if let Some(advisory) = &field.advisory {
        warn!("{label}: {advisory}");
    }
    if let Some(t) = text.filter(|t| !t.trim().is_empty()) {
        if field.value.is_none() {
            warn!("{label}: '{t}' is not a valid mark; treating as blank");
        }
    }
    field.value
}
