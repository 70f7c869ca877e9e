//! Two-dimensional points in image coordinates.

use serde::{Deserialize, Serialize};

/// A point in the image plane.
///
/// Equality is exact component-wise `f64` equality: points are echoes of
/// stored values, so no tolerance is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// Creates a new point with the given x and y values.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
