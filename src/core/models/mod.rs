//! Data models for `Markify`

pub mod marks;
pub mod paper;
pub mod semester;

pub use marks::{IntegratedMarks, Layout, PaperMarks, RawMark, TheoryMarks};
pub use paper::Paper;
pub use semester::Semester;
