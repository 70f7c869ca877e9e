//! Serialization report types.
//!
//! Records what a serialize pass read and produced, and which shapes it
//! skipped.

use serde::Serialize;
use std::fmt;

use crate::geom::RoiId;
use crate::model::Coord3D;

/// A report generated during a serialize pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SerializeReport {
    /// Counts from the shape source.
    pub input: SerializeCounts,
    /// Counts in the produced records.
    pub output: SerializeCounts,
    /// Shapes that produced no record.
    pub issues: Vec<SerializeIssue>,
}

impl SerializeReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an issue to the report.
    pub fn add(&mut self, issue: SerializeIssue) {
        self.issues.push(issue);
    }

    /// Number of shapes that were skipped.
    pub fn skipped_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.code == SerializeIssueCode::SkippedUnimplementedShape)
            .count()
    }

    /// Returns true if every input shape produced a record.
    pub fn is_complete(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for SerializeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  {} ROI(s), {} shape(s)",
            self.input.rois, self.input.shapes
        )?;

        if self.output != self.input {
            writeln!(
                f,
                "  output: {} ROI(s), {} shape(s)",
                self.output.rois, self.output.shapes
            )?;
        }

        if !self.issues.is_empty() {
            writeln!(f)?;
            writeln!(f, "Skipped ({}):", self.issues.len())?;
            for issue in &self.issues {
                writeln!(f, "  - {}", issue)?;
            }
        }

        Ok(())
    }
}

/// ROI and shape counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SerializeCounts {
    pub rois: usize,
    pub shapes: usize,
}

/// One shape that did not make it into the output.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SerializeIssue {
    /// A stable code for the issue type.
    pub code: SerializeIssueCode,
    /// The ROI holding the shape.
    pub roi: RoiId,
    /// The plane of the shape.
    pub coord: Coord3D,
    /// A human-readable description.
    pub message: String,
}

impl SerializeIssue {
    /// Creates an issue for a shape whose kind has no canonical encoding.
    pub fn skipped(kind: &str, roi: RoiId, coord: Coord3D) -> Self {
        Self {
            code: SerializeIssueCode::SkippedUnimplementedShape,
            roi,
            coord,
            message: format!("{} shape has no canonical encoding and was skipped", kind),
        }
    }
}

impl fmt::Display for SerializeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ROI {} at {}: {}", self.roi, self.coord, self.message)
    }
}

/// A stable code identifying the type of serialization issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SerializeIssueCode {
    /// A shape kind without a canonical encoding was left out.
    SkippedUnimplementedShape,
}
