//! Marks records for the two paper layouts

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A raw mark as entered by the user. `None` means "not yet entered".
pub type RawMark = Option<f64>;

/// The two fixed paper layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Theory paper: internal out of 40, external counts 60
    Theory,
    /// Integrated paper: internal out of 50, external counts 50
    Integrated,
}

impl Layout {
    /// Maximum internal total for this layout
    #[must_use]
    pub const fn max_total(self) -> f64 {
        match self {
            Self::Theory => 40.0,
            Self::Integrated => 50.0,
        }
    }

    /// Weight of the 100-mark external exam in the final percentage
    #[must_use]
    pub const fn external_weight(self) -> f64 {
        match self {
            Self::Theory => 60.0,
            Self::Integrated => 50.0,
        }
    }

    /// Lowercase name used in snapshots and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Theory => "theory",
            Self::Integrated => "integrated",
        }
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "theory" | "t" => Ok(Self::Theory),
            "integrated" | "int" | "i" => Ok(Self::Integrated),
            _ => Err(format!("Unknown paper type: {s}")),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw marks for a Theory paper
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TheoryMarks {
    /// CIE 1 (out of 50)
    pub cie1: RawMark,
    /// CIE 2 (out of 50)
    pub cie2: RawMark,
    /// Assignment 1 (out of 10)
    pub assignment1: RawMark,
    /// Assignment 2 (out of 10)
    pub assignment2: RawMark,
    /// Assignment 3 (out of 10)
    pub assignment3: RawMark,
    /// Model exam (out of 100)
    pub model: RawMark,
}

impl TheoryMarks {
    /// Field names in weight-table order
    pub const FIELDS: [&'static str; 6] = [
        "cie1",
        "cie2",
        "assignment1",
        "assignment2",
        "assignment3",
        "model",
    ];

    /// Field values in weight-table order
    #[must_use]
    pub const fn values(&self) -> [RawMark; 6] {
        [
            self.cie1,
            self.cie2,
            self.assignment1,
            self.assignment2,
            self.assignment3,
            self.model,
        ]
    }
}

/// Raw marks for an Integrated paper
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntegratedMarks {
    /// CIE 1 (out of 50)
    pub cie1: RawMark,
    /// CIE 2 (out of 50)
    pub cie2: RawMark,
    /// CIE 3 / model (out of 100)
    pub cie3: RawMark,
    /// Practical 1 (out of 50)
    pub practical1: RawMark,
    /// Practical 2 (out of 50)
    pub practical2: RawMark,
    /// Practical 3 (out of 100)
    pub practical3: RawMark,
}

impl IntegratedMarks {
    /// Field names in weight-table order
    pub const FIELDS: [&'static str; 6] = [
        "cie1",
        "cie2",
        "cie3",
        "practical1",
        "practical2",
        "practical3",
    ];

    /// Field values in weight-table order
    #[must_use]
    pub const fn values(&self) -> [RawMark; 6] {
        [
            self.cie1,
            self.cie2,
            self.cie3,
            self.practical1,
            self.practical2,
            self.practical3,
        ]
    }
}

/// Marks for either layout.
///
/// Serialized as the bare field record; the layout travels separately
/// (see the snapshot `type` field).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaperMarks {
    /// Theory layout marks
    Theory(TheoryMarks),
    /// Integrated layout marks
    Integrated(IntegratedMarks),
}

impl PaperMarks {
    /// The layout these marks belong to
    #[must_use]
    pub const fn layout(&self) -> Layout {
        match self {
            Self::Theory(_) => Layout::Theory,
            Self::Integrated(_) => Layout::Integrated,
        }
    }

    /// Field names in weight-table order
    #[must_use]
    pub const fn field_names(&self) -> [&'static str; 6] {
        match self {
            Self::Theory(_) => TheoryMarks::FIELDS,
            Self::Integrated(_) => IntegratedMarks::FIELDS,
        }
    }

    /// Field values in weight-table order
    #[must_use]
    pub const fn values(&self) -> [RawMark; 6] {
        match self {
            Self::Theory(m) => m.values(),
            Self::Integrated(m) => m.values(),
        }
    }
}

impl From<TheoryMarks> for PaperMarks {
    fn from(marks: TheoryMarks) -> Self {
        Self::Theory(marks)
    }
}

impl From<IntegratedMarks> for PaperMarks {
    fn from(marks: IntegratedMarks) -> Self {
        Self::Integrated(marks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_totals_and_external_weights_sum_to_100() {
        for layout in [Layout::Theory, Layout::Integrated] {
            let sum = layout.max_total() + layout.external_weight();
            assert!((sum - 100.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!("Theory".parse::<Layout>(), Ok(Layout::Theory));
        assert_eq!("int".parse::<Layout>(), Ok(Layout::Integrated));
        assert!("lab".parse::<Layout>().is_err());
    }

    #[test]
    fn test_default_marks_are_absent() {
        let marks = TheoryMarks::default();
        assert!(marks.values().iter().all(Option::is_none));
    }

    #[test]
    fn test_paper_marks_layout_and_fields() {
        let marks = PaperMarks::from(IntegratedMarks {
            cie3: Some(90.0),
            ..IntegratedMarks::default()
        });

        assert_eq!(marks.layout(), Layout::Integrated);
        assert_eq!(marks.field_names()[2], "cie3");
        assert_eq!(marks.values()[2], Some(90.0));
    }

    #[test]
    fn test_untagged_deserialize_picks_layout_by_fields() {
        let json = r#"{"cie1":40,"cie2":null,"cie3":90,"practical1":null,"practical2":null,"practical3":null}"#;
        let marks: PaperMarks = serde_json::from_str(json).expect("parse marks");
        assert_eq!(marks.layout(), Layout::Integrated);

        let json = r#"{"cie1":40,"cie2":null,"assignment1":9,"assignment2":null,"assignment3":null,"model":85}"#;
        let marks: PaperMarks = serde_json::from_str(json).expect("parse marks");
        assert_eq!(marks.layout(), Layout::Theory);
    }
}
