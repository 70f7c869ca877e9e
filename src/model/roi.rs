//! ROIs, their per-plane shapes and the component that holds them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::figure::Figure;
use crate::error::RoiError;
use crate::geom::{ImageId, RoiId, ShapeId};

/// The (Z, T) plane a shape lives on.
///
/// Ordering is Z-major, then T, which is the order shapes are serialized in.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Coord3D {
    pub z: i32,
    pub t: i32,
}

impl Coord3D {
    /// Creates a new coordinate.
    #[inline]
    pub fn new(z: i32, t: i32) -> Self {
        Self { z, t }
    }
}

impl fmt::Display for Coord3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(z={}, t={})", self.z, self.t)
    }
}

/// Reference to the image a set of ROIs is drawn on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub id: ImageId,

    /// Optional display name of the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ImageRef {
    /// Creates a reference to the image with the given id.
    pub fn new(id: impl Into<ImageId>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    /// Sets the display name of the image.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// One figure of a ROI, placed on a single (Z, T) plane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiShape {
    pub z: i32,
    pub t: i32,

    /// Server identifier; only meaningful for figures that are not
    /// client-authored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ShapeId>,

    /// True if the shape changed since it was last saved.
    #[serde(default)]
    pub dirty: bool,

    /// Free-text label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    pub figure: Figure,
}

impl RoiShape {
    /// Creates a clean, unlabelled shape without an identifier.
    pub fn new(coord: Coord3D, figure: Figure) -> Self {
        Self {
            z: coord.z,
            t: coord.t,
            id: None,
            dirty: false,
            text: None,
            figure,
        }
    }

    /// Returns the plane this shape lives on.
    #[inline]
    pub fn coord(&self) -> Coord3D {
        Coord3D::new(self.z, self.t)
    }

    /// Sets the server identifier.
    pub fn with_id(mut self, id: impl Into<ShapeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the label.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Marks the shape as modified.
    pub fn dirty(mut self) -> Self {
        self.dirty = true;
        self
    }
}

/// A region of interest: one figure per (Z, T) plane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoiData", into = "RoiData")]
pub struct Roi {
    id: RoiId,
    client_side: bool,
    shapes: BTreeMap<Coord3D, RoiShape>,
}

impl Roi {
    /// Creates an empty ROI.
    pub fn new(id: impl Into<RoiId>, client_side: bool) -> Self {
        Self {
            id: id.into(),
            client_side,
            shapes: BTreeMap::new(),
        }
    }

    /// The local key of this ROI.
    #[inline]
    pub fn id(&self) -> RoiId {
        self.id
    }

    /// True if the ROI was created on the client and not yet saved.
    #[inline]
    pub fn is_client_side(&self) -> bool {
        self.client_side
    }

    /// Adds a shape on its own plane.
    ///
    /// # Errors
    /// Returns [`RoiError::DuplicateCoordinate`] if the plane is taken.
    pub fn add_shape(&mut self, shape: RoiShape) -> Result<(), RoiError> {
        let coord = shape.coord();
        if self.shapes.contains_key(&coord) {
            return Err(RoiError::DuplicateCoordinate {
                roi: self.id,
                coord,
            });
        }
        self.shapes.insert(coord, shape);
        Ok(())
    }

    /// Builder form of [`Roi::add_shape`].
    pub fn with_shape(mut self, shape: RoiShape) -> Result<Self, RoiError> {
        self.add_shape(shape)?;
        Ok(self)
    }

    /// The shapes of this ROI, keyed and ordered by plane.
    #[inline]
    pub fn shapes(&self) -> &BTreeMap<Coord3D, RoiShape> {
        &self.shapes
    }

    /// Number of shapes in this ROI.
    #[inline]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }
}

/// Wire form of a ROI: shapes as a list, validated on the way in.
#[derive(Clone, Serialize, Deserialize)]
struct RoiData {
    id: RoiId,
    #[serde(default)]
    client_side: bool,
    #[serde(default)]
    shapes: Vec<RoiShape>,
}

impl TryFrom<RoiData> for Roi {
    type Error = RoiError;

    fn try_from(data: RoiData) -> Result<Self, Self::Error> {
        let mut roi = Roi::new(data.id, data.client_side);
        for shape in data.shapes {
            roi.add_shape(shape)?;
        }
        Ok(roi)
    }
}

impl From<Roi> for RoiData {
    fn from(roi: Roi) -> Self {
        Self {
            id: roi.id,
            client_side: roi.client_side,
            shapes: roi.shapes.into_values().collect(),
        }
    }
}

/// The ROIs of one image, keyed and ordered by ROI id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Roi>", into = "Vec<Roi>")]
pub struct RoiComponent {
    rois: BTreeMap<RoiId, Roi>,
}

impl RoiComponent {
    /// Creates an empty component.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a ROI.
    ///
    /// # Errors
    /// Returns [`RoiError::DuplicateRoi`] if a ROI with the same id exists.
    pub fn add_roi(&mut self, roi: Roi) -> Result<(), RoiError> {
        if self.rois.contains_key(&roi.id) {
            return Err(RoiError::DuplicateRoi { roi: roi.id });
        }
        self.rois.insert(roi.id, roi);
        Ok(())
    }

    /// Number of ROIs.
    pub fn len(&self) -> usize {
        self.rois.len()
    }

    /// Returns true if the component holds no ROIs.
    pub fn is_empty(&self) -> bool {
        self.rois.is_empty()
    }

    /// Total number of shapes across all ROIs.
    pub fn shape_count(&self) -> usize {
        self.rois.values().map(Roi::shape_count).sum()
    }
}

impl TryFrom<Vec<Roi>> for RoiComponent {
    type Error = RoiError;

    fn try_from(rois: Vec<Roi>) -> Result<Self, Self::Error> {
        let mut component = RoiComponent::new();
        for roi in rois {
            component.add_roi(roi)?;
        }
        Ok(component)
    }
}

impl From<RoiComponent> for Vec<Roi> {
    fn from(component: RoiComponent) -> Self {
        component.rois.into_values().collect()
    }
}

/// Supplies the ROIs to serialize.
///
/// The map type fixes the visiting order: ascending ROI id.
pub trait ShapeSource {
    /// The ROIs, keyed by id.
    fn roi_map(&self) -> &BTreeMap<RoiId, Roi>;
}

impl ShapeSource for RoiComponent {
    fn roi_map(&self) -> &BTreeMap<RoiId, Roi> {
        &self.rois
    }
}

impl ShapeSource for BTreeMap<RoiId, Roi> {
    fn roi_map(&self) -> &BTreeMap<RoiId, Roi> {
        self
    }
}

/// A persisted ROI document: the image and its ROIs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiDocument {
    pub image: ImageRef,
    #[serde(default)]
    pub rois: RoiComponent,
}
