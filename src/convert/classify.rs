//! Figure classification.

use crate::error::RoiError;
use crate::geom::{BezierNode, Ellipse, Point2D, Rect};
use crate::model::{Figure, FigureKind};

/// What a figure converts as, with a view of the geometry it converts from.
///
/// Lines classify as open Bezier paths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind<'a> {
    Ellipse(&'a Ellipse),
    Point(Point2D),
    Rectangle(&'a Rect),
    Text { x: f64, y: f64, text: &'a str },
    Bezier { closed: bool, nodes: &'a [BezierNode] },
    Mask(&'a Rect),
}

impl ShapeKind<'_> {
    /// Short name for logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Ellipse(_) => "ellipse",
            ShapeKind::Point(_) => "point",
            ShapeKind::Rectangle(_) => "rectangle",
            ShapeKind::Text { .. } => "text",
            ShapeKind::Bezier { closed: true, .. } => "closed bezier",
            ShapeKind::Bezier { closed: false, .. } => "open bezier",
            ShapeKind::Mask(_) => "mask",
        }
    }
}

/// Classifies a figure.
///
/// # Errors
/// Returns [`RoiError::UnsupportedFigure`] naming the figure's kind if it is
/// outside the supported set.
pub fn classify(figure: &Figure) -> Result<ShapeKind<'_>, RoiError> {
    let kind = match &figure.kind {
        FigureKind::Bezier { closed, nodes } => ShapeKind::Bezier {
            closed: *closed,
            nodes,
        },
        FigureKind::Ellipse(ellipse) => ShapeKind::Ellipse(ellipse),
        FigureKind::Line { nodes } => ShapeKind::Bezier {
            closed: false,
            nodes,
        },
        FigureKind::Mask(frame) => ShapeKind::Mask(frame),
        FigureKind::Point { center } => ShapeKind::Point(*center),
        FigureKind::Rectangle(rect) => ShapeKind::Rectangle(rect),
        FigureKind::Text { x, y, text } => ShapeKind::Text {
            x: *x,
            y: *y,
            text,
        },
        FigureKind::Unsupported { name, .. } => {
            return Err(RoiError::UnsupportedFigure { name: name.clone() });
        }
    };
    Ok(kind)
}
