//! Snapshot export of a marks record and its result
//!
//! Two formats: a flat one-row CSV and a JSON object of the shape
//! `{type, timestamp, marks, result}`.

use crate::core::internal::CalculationResult;
use crate::core::models::{Layout, PaperMarks};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// A calculation frozen at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Paper layout
    #[serde(rename = "type")]
    pub layout: Layout,
    /// When the snapshot was taken (UTC)
    pub timestamp: DateTime<Utc>,
    /// Marks as entered
    pub marks: PaperMarks,
    /// Calculation result for `marks`
    pub result: CalculationResult,
}

impl Snapshot {
    /// Take a snapshot now
    #[must_use]
    pub fn new(marks: PaperMarks, result: CalculationResult) -> Self {
        Self::at(marks, result, Utc::now())
    }

    /// Take a snapshot with an explicit timestamp
    #[must_use]
    pub const fn at(marks: PaperMarks, result: CalculationResult, timestamp: DateTime<Utc>) -> Self {
        Self {
            layout: marks.layout(),
            timestamp,
            marks,
            result,
        }
    }

    /// File name for this snapshot, e.g. `markify_theory_20260102_030405.json`
    #[must_use]
    pub fn default_file_name(&self, format: SnapshotFormat) -> String {
        format!(
            "markify_{}_{}.{}",
            self.layout,
            self.timestamp.format("%Y%m%d_%H%M%S"),
            format.extension()
        )
    }
}

/// Supported snapshot formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// One header row and one data row
    Csv,
    /// Pretty-printed JSON object
    Json,
}

impl SnapshotFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Exporter for this format
    #[must_use]
    pub fn exporter(&self) -> Box<dyn SnapshotExporter> {
        match self {
            Self::Csv => Box::new(CsvExporter),
            Self::Json => Box::new(JsonExporter),
        }
    }
}

impl FromStr for SnapshotFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown export format: {s}")),
        }
    }
}

impl fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Trait for writing snapshots in different formats
pub trait SnapshotExporter {
    /// Render the snapshot as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn render(&self, snapshot: &Snapshot) -> Result<String, Box<dyn Error>>;

    /// Render the snapshot and write it to `output_path`
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    fn export(&self, snapshot: &Snapshot, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(snapshot)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, content)?;
        crate::debug!("snapshot written to {}", output_path.display());
        Ok(())
    }
}

/// Flat-column CSV exporter
pub struct CsvExporter;

impl SnapshotExporter for CsvExporter {
    fn render(&self, snapshot: &Snapshot) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();

        let fields = snapshot.marks.field_names();
        writeln!(
            out,
            "type,timestamp,{},total,maxTotal,percentage,message",
            fields.join(",")
        )?;

        let marks: Vec<String> = snapshot
            .marks
            .values()
            .iter()
            .map(|v| v.map(|m| m.to_string()).unwrap_or_default())
            .collect();
        let result = &snapshot.result;
        writeln!(
            out,
            "{},{},{},{},{},{},\"{}\"",
            snapshot.layout,
            snapshot.timestamp.to_rfc3339(),
            marks.join(","),
            result.total,
            result.max_total,
            result.percentage,
            result.message.replace('"', "\"\"")
        )?;

        Ok(out)
    }
}

/// JSON exporter
pub struct JsonExporter;

impl SnapshotExporter for JsonExporter {
    fn render(&self, snapshot: &Snapshot) -> Result<String, Box<dyn Error>> {
        Ok(serde_json::to_string_pretty(snapshot)?)
    }
}
