//! Shape conversion: one client-side shape to one canonical record.
//!
//! Conversion is a two-step dispatch. [`classify`] maps the figure onto a
//! [`ShapeKind`] (or rejects it), then [`convert_shape`] extracts the
//! geometry for that kind, encodes the transform and copies the shape-level
//! metadata.
//!
//! Metadata rules shared by every kind:
//! - `dirty`, `z`, `t` are copied from the shape;
//! - the shape id is passed through only if the figure is not
//!   client-authored;
//! - the label is copied, except for text figures whose record text is the
//!   figure's own text.

mod classify;

pub use classify::{classify, ShapeKind};

use tracing::debug;

use crate::error::RoiError;
use crate::geom::BezierNode;
use crate::model::{PathPoints, RoiShape, ShapeGeometry, ShapeRecord};
use crate::transform;

/// The outcome of converting one shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Conversion {
    /// The canonical record for the shape.
    Record(ShapeRecord),
    /// The shape's kind has no canonical encoding yet; no record exists.
    Unimplemented { kind: &'static str },
}

/// Converts one shape into its canonical record.
///
/// # Errors
/// Fails if the figure is unsupported or its transform has a non-finite
/// coefficient. Kinds without an encoding (masks) are not errors here; they
/// come back as [`Conversion::Unimplemented`] and the caller decides.
pub fn convert_shape(shape: &RoiShape) -> Result<Conversion, RoiError> {
    let figure = &shape.figure;
    let kind = classify(figure)?;
    debug!(z = shape.z, t = shape.t, kind = kind.name(), "converting shape");

    let mut text = shape.text.clone();
    let geometry = match kind {
        ShapeKind::Ellipse(ellipse) => ShapeGeometry::Ellipse {
            cx: ellipse.center.x,
            cy: ellipse.center.y,
            rx: ellipse.radius_x,
            ry: ellipse.radius_y,
        },
        ShapeKind::Point(center) => ShapeGeometry::Point {
            cx: center.x,
            cy: center.y,
        },
        ShapeKind::Rectangle(rect) => ShapeGeometry::Rectangle {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        },
        ShapeKind::Text { x, y, text: value } => {
            text = Some(value.to_string());
            ShapeGeometry::Text { x, y }
        }
        ShapeKind::Bezier { closed, nodes } => {
            let path = flatten_nodes(nodes);
            if closed {
                ShapeGeometry::Polygon(path)
            } else {
                ShapeGeometry::Polyline(path)
            }
        }
        ShapeKind::Mask(_) => {
            return Ok(Conversion::Unimplemented { kind: kind.name() });
        }
    };

    let transform = transform::encode_optional(figure.transform.as_ref())?;
    let id = if figure.client_object { None } else { shape.id };

    Ok(Conversion::Record(ShapeRecord {
        id,
        dirty: shape.dirty,
        z: shape.z,
        t: shape.t,
        text,
        transform,
        geometry,
    }))
}

/// Splits Bezier nodes into the parallel point and mask sequences, keeping
/// node order.
pub fn flatten_nodes(nodes: &[BezierNode]) -> PathPoints {
    let mut path = PathPoints::with_capacity(nodes.len());
    for node in nodes {
        path.points.push(node.primary);
        path.control_in.push(node.control_in);
        path.control_out.push(node.control_out);
        path.masks.push(node.mask);
    }
    path
}
