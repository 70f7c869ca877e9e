//! Geometry value types shared by the input model and the output records.
//!
//! These are plain value holders: points, rectangles, ellipses, Bezier nodes,
//! affine transforms and the ID newtypes. They carry no behaviour beyond
//! construction and validation, and they compare with exact `f64`
//! equality.
//!
//! # Example
//!
//! ```
//! use roiserial::geom::{AffineTransform, BezierNode, Ellipse, Point2D, Rect};
//!
//! let ellipse = Ellipse::from_frame(Rect::new(0.0, 0.0, 4.0, 2.0));
//! assert_eq!(ellipse.center, Point2D::new(2.0, 1.0));
//!
//! let node = BezierNode::corner(10.0, 20.0);
//! assert_eq!(node.mask, BezierNode::CORNER_MASK);
//!
//! let shift = AffineTransform::translation(10.0, 0.0);
//! assert_eq!(shift.first_non_finite(), None);
//! ```

mod affine;
mod bezier;
mod ids;
mod point;
mod rect;

// Re-export core types for convenient access
pub use affine::{AffineTransform, COEFFICIENT_NAMES};
pub use bezier::BezierNode;
pub use ids::{ImageId, RoiId, ShapeId};
pub use point::Point2D;
pub use rect::{Ellipse, Rect};
