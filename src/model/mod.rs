//! Data model: client-side ROIs in, canonical records out.
//!
//! The input side mirrors what a drawing client holds in memory: a
//! [`RoiComponent`] of [`Roi`]s, each holding one [`RoiShape`] per (Z, T)
//! plane, each wrapping a [`Figure`]. The output side is the
//! persistence-ready form: one [`RoiRecord`] per ROI with a [`ShapeRecord`]
//! per shape.
//!
//! Both sides use ordered maps or vectors only, so every traversal is
//! deterministic.
//!
//! # Example
//!
//! ```
//! use roiserial::model::{Coord3D, Figure, Roi, RoiComponent, RoiShape};
//!
//! let roi = Roi::new(7u64, false)
//!     .with_shape(
//!         RoiShape::new(Coord3D::new(0, 0), Figure::rectangle(1.0, 2.0, 3.0, 4.0))
//!             .with_id(99u64),
//!     )
//!     .unwrap();
//!
//! let mut component = RoiComponent::new();
//! component.add_roi(roi).unwrap();
//! assert_eq!(component.shape_count(), 1);
//! ```

mod figure;
pub mod io_json;
mod record;
mod roi;

pub use figure::{Figure, FigureKind};
pub use record::{PathPoints, RoiRecord, ShapeGeometry, ShapeRecord};
pub use roi::{Coord3D, ImageRef, Roi, RoiComponent, RoiDocument, RoiShape, ShapeSource};
