//! Core module: the marks engine and its supporting layers

pub mod config;
pub mod gpa;
pub mod input;
pub mod internal;
pub mod models;
pub mod scale;
pub mod snapshot;
pub mod target;

/// Returns the current version of the `Markify` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Round `value` to `places` decimal places (half away from zero).
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
