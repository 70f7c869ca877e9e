//! Canonical text encoding of affine transforms.
//!
//! Transforms are written as SVG 1.2 Tiny/Mobile `transform` attribute
//! values, restricted to four forms: `none`, `translate(tx [ty])`,
//! `scale(sx [sy])` and `matrix(a b c d e f)`. The shortest form that
//! represents the transform exactly is chosen; anything involving rotation
//! or shear is written as a full matrix.
//!
//! # Example
//!
//! ```
//! use roiserial::geom::AffineTransform;
//! use roiserial::transform::encode;
//!
//! assert_eq!(encode(&AffineTransform::translation(5.0, 3.0)).unwrap(), "translate(5 3)");
//! assert_eq!(encode(&AffineTransform::scale(2.5, 2.5)).unwrap(), "scale(2.5)");
//! ```

use crate::error::RoiError;
use crate::geom::AffineTransform;

/// The shape of an affine transform, from most to least specific.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformKind {
    /// No effect.
    Identity,
    /// Pure translation.
    Translation,
    /// The same non-zero scale on both axes, no translation.
    UniformScale,
    /// Different scales per axis, no translation. One of them may be zero.
    Scale,
    /// Anything else: rotation, shear, a zero scale on both axes, or scale
    /// combined with translation.
    General,
}

impl TransformKind {
    /// Classifies a transform. The first matching kind wins.
    pub fn of(t: &AffineTransform) -> Self {
        let axis_aligned = t.b == 0.0 && t.c == 0.0;
        let untranslated = t.e == 0.0 && t.f == 0.0;
        let unit_diagonal = t.a == 1.0 && t.d == 1.0;

        if axis_aligned && unit_diagonal && untranslated {
            TransformKind::Identity
        } else if axis_aligned && unit_diagonal {
            TransformKind::Translation
        } else if axis_aligned && untranslated && t.a == t.d && t.a != 0.0 {
            TransformKind::UniformScale
        } else if axis_aligned && untranslated && t.a != t.d {
            TransformKind::Scale
        } else {
            TransformKind::General
        }
    }
}

/// Encodes a transform as its canonical SVG attribute value.
///
/// # Errors
/// Returns [`RoiError::Encoding`] if any coefficient is NaN or infinite.
pub fn encode(t: &AffineTransform) -> Result<String, RoiError> {
    if let Some((coefficient, value)) = t.first_non_finite() {
        return Err(RoiError::Encoding { coefficient, value });
    }

    let encoded = match TransformKind::of(t) {
        TransformKind::Identity => "none".to_string(),
        TransformKind::Translation => {
            // translate(<tx> [<ty>]); a missing <ty> means zero
            if t.f == 0.0 {
                format!("translate({})", format_number(t.e))
            } else {
                format!("translate({} {})", format_number(t.e), format_number(t.f))
            }
        }
        // scale(<sx> [<sy>]); a missing <sy> means equal to <sx>
        TransformKind::UniformScale => format!("scale({})", format_number(t.a)),
        TransformKind::Scale => format!("scale({} {})", format_number(t.a), format_number(t.d)),
        TransformKind::General => {
            let mut buf = String::from("matrix(");
            for (i, value) in t.coefficients().into_iter().enumerate() {
                if i != 0 {
                    buf.push(' ');
                }
                buf.push_str(&format_number(value));
            }
            buf.push(')');
            buf
        }
    };

    Ok(encoded)
}

/// Encodes an optional transform; `None` stays `None`.
pub fn encode_optional(t: Option<&AffineTransform>) -> Result<Option<String>, RoiError> {
    t.map(encode).transpose()
}

/// Formats a coefficient as its shortest round-trip decimal, minus a trailing
/// `.0`.
///
/// `5.0` becomes `5`, `5.25` stays `5.25`. Only the literal suffix is
/// removed; no rounding takes place.
pub fn format_number(value: f64) -> String {
    // Debug always keeps a fractional part or an exponent
    let mut s = format!("{:?}", value);
    if s.ends_with(".0") {
        s.truncate(s.len() - 2);
    }
    s
}
