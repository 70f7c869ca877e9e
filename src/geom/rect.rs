//! Axis-aligned rectangles and ellipse parameters.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// An axis-aligned rectangle given by its top-left corner and its size.
///
/// The constructor does not enforce a positive width or height; a figure
/// dragged "backwards" is stored as it was drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle from XYWH values.
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the centre of the rectangle.
    #[inline]
    pub fn center(&self) -> Point2D {
        Point2D::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// An axis-aligned ellipse given by its centre and its two radii.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Point2D,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl Ellipse {
    /// Creates a new ellipse from its centre and radii.
    #[inline]
    pub fn new(center: Point2D, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
        }
    }

    /// Creates the ellipse inscribed in `frame`.
    ///
    /// Each radius is half the frame's extent on that axis.
    pub fn from_frame(frame: Rect) -> Self {
        Self {
            center: frame.center(),
            radius_x: frame.width / 2.0,
            radius_y: frame.height / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(10.0, 20.0, 90.0, 60.0);
        assert_eq!(rect.center(), Point2D::new(55.0, 50.0));
    }

    #[test]
    fn test_ellipse_from_frame_halves_the_extent() {
        let ellipse = Ellipse::from_frame(Rect::new(0.0, 0.0, 10.0, 4.0));
        assert_eq!(ellipse.center, Point2D::new(5.0, 2.0));
        assert_eq!(ellipse.radius_x, 5.0);
        assert_eq!(ellipse.radius_y, 2.0);
    }
}
