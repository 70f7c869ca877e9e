//! Two-dimensional affine transforms.

use serde::{Deserialize, Serialize};


/// A 2×3 affine matrix.
///
/// Maps `(x, y)` to `(a·x + c·y + e, b·x + d·y + f)`. The coefficient order
/// matches the SVG `matrix(a b c d e f)` form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

/// Coefficient names in storage order, for diagnostics.
pub const COEFFICIENT_NAMES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

impl AffineTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Creates a transform from its six coefficients.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// A pure translation by `(tx, ty)`.
    #[inline]
    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// An axis-aligned scale about the origin.
    #[inline]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// A rotation by `radians` about the origin.
    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Returns the coefficients as `[a, b, c, d, e, f]`.
    #[inline]
    pub fn coefficients(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// Returns the name and value of the first non-finite coefficient, if any.
    pub fn first_non_finite(&self) -> Option<(&'static str, f64)> {
        COEFFICIENT_NAMES
            .iter()
            .zip(self.coefficients())
            .find(|(_, value)| !value.is_finite())
            .map(|(name, value)| (*name, value))
    }

    /// Returns true if all coefficients are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.first_non_finite().is_none()
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f64; 6]> for AffineTransform {
    fn from([a, b, c, d, e, f]: [f64; 6]) -> Self {
        Self::new(a, b, c, d, e, f)
    }
}

// Stored as a flat `[a, b, c, d, e, f]` array rather than a keyed object
impl Serialize for AffineTransform {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.coefficients().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AffineTransform {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let coefficients = <[f64; 6]>::deserialize(deserializer)?;
        Ok(Self::from(coefficients))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_non_finite_names_the_coefficient() {
        let t = AffineTransform::new(1.0, 0.0, 0.0, 1.0, f64::INFINITY, 0.0);
        let (name, value) = t.first_non_finite().unwrap();
        assert_eq!(name, "e");
        assert!(value.is_infinite());
        assert!(AffineTransform::IDENTITY.is_finite());
    }

    #[test]
    fn test_serde_as_flat_array() {
        let t = AffineTransform::new(2.0, 0.0, 0.0, 3.0, 4.5, 0.0);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "[2.0,0.0,0.0,3.0,4.5,0.0]");
        let back: AffineTransform = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_rejects_short_array() {
        assert!(serde_json::from_str::<AffineTransform>("[1, 0, 0, 1]").is_err());
    }
}
