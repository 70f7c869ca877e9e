//! Canonical output records handed to persistence or transport.
//!
//! Records are complete: a sink stores or sends them field by field without
//! further transformation.

use serde::{Deserialize, Serialize};

use super::roi::ImageRef;
use crate::geom::{Point2D, RoiId, ShapeId};

/// The canonical form of one ROI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiRecord {
    /// Passed through only for ROIs that are not client-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RoiId>,

    pub client_side: bool,

    pub image: ImageRef,

    /// Shapes in ascending (Z, T) order.
    pub shapes: Vec<ShapeRecord>,
}

/// The canonical form of one shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    /// Passed through only for figures that are not client-authored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ShapeId>,

    pub dirty: bool,

    pub z: i32,

    pub t: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// SVG transform attribute value, e.g. `translate(10)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,

    #[serde(flatten)]
    pub geometry: ShapeGeometry,
}

/// Variant-specific geometry of a shape record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeGeometry {
    Ellipse { cx: f64, cy: f64, rx: f64, ry: f64 },
    Point { cx: f64, cy: f64 },
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Text { x: f64, y: f64 },
    Polygon(PathPoints),
    Polyline(PathPoints),
}

impl ShapeGeometry {
    /// Returns the record kind as written in the `kind` tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ShapeGeometry::Ellipse { .. } => "ellipse",
            ShapeGeometry::Point { .. } => "point",
            ShapeGeometry::Rectangle { .. } => "rectangle",
            ShapeGeometry::Text { .. } => "text",
            ShapeGeometry::Polygon(_) => "polygon",
            ShapeGeometry::Polyline(_) => "polyline",
        }
    }

    /// Returns the flattened path for polygon and polyline records.
    pub fn path(&self) -> Option<&PathPoints> {
        match self {
            ShapeGeometry::Polygon(path) | ShapeGeometry::Polyline(path) => Some(path),
            _ => None,
        }
    }
}

/// A Bezier path flattened into parallel sequences, one entry per node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathPoints {
    /// On-curve points.
    pub points: Vec<Point2D>,
    /// Incoming handles.
    pub control_in: Vec<Point2D>,
    /// Outgoing handles.
    pub control_out: Vec<Point2D>,
    /// Per-node handle masks.
    pub masks: Vec<i32>,
}

impl PathPoints {
    /// Creates empty sequences with room for `nodes` entries.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            points: Vec::with_capacity(nodes),
            control_in: Vec::with_capacity(nodes),
            control_out: Vec::with_capacity(nodes),
            masks: Vec::with_capacity(nodes),
        }
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the path has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
