//! Bezier path nodes.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// One node of a Bezier path.
///
/// A node is its on-curve point plus two handles. The mask tells which
/// handles take part in the curve; see the `*_MASK` constants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BezierNode {
    /// The on-curve point.
    pub primary: Point2D,

    /// Handle controlling the curve entering this node.
    pub control_in: Point2D,

    /// Handle controlling the curve leaving this node.
    pub control_out: Point2D,

    /// Which handles are active.
    #[serde(default)]
    pub mask: i32,
}

impl BezierNode {
    /// Neither handle is active; the node is a polygon corner.
    pub const CORNER_MASK: i32 = 0;
    /// Only the incoming handle is active.
    pub const IN_MASK: i32 = 1;
    /// Only the outgoing handle is active.
    pub const OUT_MASK: i32 = 2;
    /// Both handles are active.
    pub const BOTH_MASK: i32 = Self::IN_MASK | Self::OUT_MASK;

    /// Creates a node with explicit handles and mask.
    pub fn new(primary: Point2D, control_in: Point2D, control_out: Point2D, mask: i32) -> Self {
        Self {
            primary,
            control_in,
            control_out,
            mask,
        }
    }

    /// Creates a corner node whose handles coincide with the on-curve point.
    pub fn corner(x: f64, y: f64) -> Self {
        let p = Point2D::new(x, y);
        Self::new(p, p, p, Self::CORNER_MASK)
    }
}
