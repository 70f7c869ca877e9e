//! ROI serialization: a whole shape source to canonical records.
//!
//! The pass is deterministic and all-or-nothing:
//! - ROIs are visited in ascending id, shapes in ascending (Z, T);
//! - the first unsupported figure or unencodable transform aborts the pass;
//! - a sink only ever receives the output of a pass that succeeded.
//!
//! Shapes whose kind has no canonical encoding (masks) abort the pass too,
//! unless [`SerializeOptions::skip_unimplemented`] is set, in which case
//! they are left out and listed in the [`SerializeReport`].

mod report;
mod sink;

pub use report::{SerializeCounts, SerializeIssue, SerializeIssueCode, SerializeReport};
pub use sink::{JsonFileSink, RecordSink};

use tracing::{debug, warn};

use crate::convert::{convert_shape, Conversion};
use crate::error::RoiError;
use crate::model::{ImageRef, Roi, RoiRecord, ShapeSource};

/// Options for serialization behavior.
#[derive(Clone, Debug, Default)]
pub struct SerializeOptions {
    /// If true, shapes without a canonical encoding are skipped and reported
    /// instead of failing the pass.
    pub skip_unimplemented: bool,
}

/// The output of a successful serialize pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Serialized {
    /// One record per ROI, in ascending ROI id.
    pub records: Vec<RoiRecord>,
    /// What was read, written and skipped.
    pub report: SerializeReport,
}

/// Serializes every ROI of `source` drawn on `image`.
///
/// # Errors
/// Returns the first [`RoiError::UnsupportedFigure`] or
/// [`RoiError::Encoding`] encountered, or [`RoiError::UnimplementedShape`]
/// for a mask unless skipping is enabled. No records are returned on error.
pub fn serialize<S>(
    source: &S,
    image: &ImageRef,
    opts: &SerializeOptions,
) -> Result<Serialized, RoiError>
where
    S: ShapeSource + ?Sized,
{
    let rois = source.roi_map();
    let mut report = SerializeReport::new();
    let mut records = Vec::with_capacity(rois.len());

    for roi in rois.values() {
        report.input.rois += 1;
        report.input.shapes += roi.shape_count();

        let record = serialize_roi(roi, image, opts, &mut report)?;
        report.output.rois += 1;
        report.output.shapes += record.shapes.len();
        records.push(record);
    }

    debug!(
        rois = report.output.rois,
        shapes = report.output.shapes,
        skipped = report.skipped_count(),
        "serialized ROIs"
    );

    Ok(Serialized { records, report })
}

/// Serializes `source` and hands the records to `sink`.
///
/// The sink is called once, and only if the whole pass succeeded.
pub fn serialize_into<S, K>(
    source: &S,
    image: &ImageRef,
    opts: &SerializeOptions,
    sink: &mut K,
) -> Result<SerializeReport, RoiError>
where
    S: ShapeSource + ?Sized,
    K: RecordSink + ?Sized,
{
    let Serialized { records, report } = serialize(source, image, opts)?;
    sink.accept(records)?;
    Ok(report)
}

/// Builds the record for one ROI.
fn serialize_roi(
    roi: &Roi,
    image: &ImageRef,
    opts: &SerializeOptions,
    report: &mut SerializeReport,
) -> Result<RoiRecord, RoiError> {
    debug!(roi = %roi.id(), shapes = roi.shape_count(), "serializing ROI");

    let client_side = roi.is_client_side();
    let mut record = RoiRecord {
        id: if client_side { None } else { Some(roi.id()) },
        client_side,
        image: image.clone(),
        shapes: Vec::with_capacity(roi.shape_count()),
    };

    for (coord, shape) in roi.shapes() {
        match convert_shape(shape)? {
            Conversion::Record(shape_record) => record.shapes.push(shape_record),
            Conversion::Unimplemented { kind } if opts.skip_unimplemented => {
                warn!(roi = %roi.id(), %coord, kind, "skipping shape without encoding");
                report.add(SerializeIssue::skipped(kind, roi.id(), *coord));
            }
            Conversion::Unimplemented { kind } => {
                return Err(RoiError::UnimplementedShape {
                    kind,
                    roi: roi.id(),
                    coord: *coord,
                });
            }
        }
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{AffineTransform, BezierNode, RoiId, ShapeId};
    use crate::model::{Coord3D, Figure, FigureKind, RoiComponent, RoiShape, ShapeGeometry};

    fn component(rois: Vec<Roi>) -> RoiComponent {
        let mut component = RoiComponent::new();
        for roi in rois {
            component.add_roi(roi).unwrap();
        }
        component
    }

    fn image() -> ImageRef {
        ImageRef::new(1u64)
    }

    #[test]
    fn test_end_to_end_rectangle() {
        let shape = RoiShape::new(
            Coord3D::new(0, 0),
            Figure::rectangle(1.0, 2.0, 3.0, 4.0)
                .with_transform(AffineTransform::new(1.0, 0.0, 0.0, 1.0, 10.0, 0.0)),
        )
        .with_id(99u64);
        let source = component(vec![Roi::new(7u64, false).with_shape(shape).unwrap()]);

        let out = serialize(&source, &image(), &SerializeOptions::default()).unwrap();
        assert_eq!(out.records.len(), 1);

        let roi = &out.records[0];
        assert_eq!(roi.id, Some(RoiId(7)));
        assert!(!roi.client_side);
        assert_eq!(roi.image, image());
        assert_eq!(roi.shapes.len(), 1);

        let rect = &roi.shapes[0];
        assert_eq!(rect.id, Some(ShapeId(99)));
        assert_eq!((rect.z, rect.t), (0, 0));
        assert_eq!(rect.transform.as_deref(), Some("translate(10)"));
        assert_eq!(
            rect.geometry,
            ShapeGeometry::Rectangle {
                x: 1.0,
                y: 2.0,
                width: 3.0,
                height: 4.0
            }
        );
        assert!(out.report.is_complete());
    }

    #[test]
    fn test_rois_in_id_order_and_client_side_ids_dropped() {
        let source = component(vec![
            Roi::new(9u64, false),
            Roi::new(2u64, true),
            Roi::new(5u64, false),
        ]);

        let out = serialize(&source, &image(), &SerializeOptions::default()).unwrap();
        let ids: Vec<Option<RoiId>> = out.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![None, Some(RoiId(5)), Some(RoiId(9))]);
        assert!(out.records[0].client_side);
    }

    #[test]
    fn test_shapes_in_plane_order() {
        let mut roi = Roi::new(1u64, false);
        for (z, t) in [(1, 0), (0, 1), (0, 0)] {
            roi.add_shape(RoiShape::new(Coord3D::new(z, t), Figure::point(0.0, 0.0)))
                .unwrap();
        }
        let source = component(vec![roi]);

        let out = serialize(&source, &image(), &SerializeOptions::default()).unwrap();
        let planes: Vec<(i32, i32)> = out.records[0].shapes.iter().map(|s| (s.z, s.t)).collect();
        assert_eq!(planes, vec![(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn test_unsupported_figure_fails_whole_pass() {
        let roi = Roi::new(1u64, false)
            .with_shape(RoiShape::new(Coord3D::new(0, 0), Figure::point(0.0, 0.0)))
            .unwrap()
            .with_shape(RoiShape::new(
                Coord3D::new(0, 1),
                Figure::new(FigureKind::unsupported("arrow")),
            ))
            .unwrap();
        let source = component(vec![roi]);

        let mut sink: Vec<RoiRecord> = Vec::new();
        let err = serialize_into(&source, &image(), &SerializeOptions::default(), &mut sink)
            .unwrap_err();
        assert!(matches!(err, RoiError::UnsupportedFigure { ref name } if name == "arrow"));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_mask_fails_by_default() {
        let roi = Roi::new(3u64, false)
            .with_shape(RoiShape::new(
                Coord3D::new(1, 2),
                Figure::mask(0.0, 0.0, 4.0, 4.0),
            ))
            .unwrap();
        let source = component(vec![roi]);

        let err = serialize(&source, &image(), &SerializeOptions::default()).unwrap_err();
        match err {
            RoiError::UnimplementedShape { kind, roi, coord } => {
                assert_eq!(kind, "mask");
                assert_eq!(roi, RoiId(3));
                assert_eq!(coord, Coord3D::new(1, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_mask_skipped_when_allowed() {
        let roi = Roi::new(3u64, false)
            .with_shape(RoiShape::new(
                Coord3D::new(0, 0),
                Figure::bezier(true, vec![BezierNode::corner(0.0, 0.0)]),
            ))
            .unwrap()
            .with_shape(RoiShape::new(
                Coord3D::new(0, 1),
                Figure::mask(0.0, 0.0, 4.0, 4.0),
            ))
            .unwrap();
        let source = component(vec![roi]);
        let opts = SerializeOptions {
            skip_unimplemented: true,
        };

        let mut sink: Vec<RoiRecord> = Vec::new();
        let report = serialize_into(&source, &image(), &opts, &mut sink).unwrap();
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].shapes.len(), 1);
        assert_eq!(sink[0].shapes[0].geometry.kind_name(), "polygon");

        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.input, SerializeCounts { rois: 1, shapes: 2 });
        assert_eq!(report.output, SerializeCounts { rois: 1, shapes: 1 });
        assert_eq!(report.issues[0].coord, Coord3D::new(0, 1));
    }

    #[test]
    fn test_empty_source() {
        let source = RoiComponent::new();
        let out = serialize(&source, &image(), &SerializeOptions::default()).unwrap();
        assert!(out.records.is_empty());
        assert_eq!(out.report, SerializeReport::new());
    }
}
