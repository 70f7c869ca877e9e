mod proptest_helpers;

use proptest::prelude::*;
use proptest_helpers::{arb_component, proptest_config};
use roiserial::model::{FigureKind, ImageRef, ShapeGeometry, ShapeSource};
use roiserial::serialize::{serialize, SerializeOptions};

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn output_is_sorted_and_complete(source in arb_component(5)) {
        let out = serialize(&source, &ImageRef::new(1u64), &SerializeOptions::default()).unwrap();

        prop_assert_eq!(out.records.len(), source.len());
        prop_assert!(out.report.is_complete());
        prop_assert_eq!(out.report.output.shapes, source.shape_count());

        for record in &out.records {
            let planes: Vec<(i32, i32)> = record.shapes.iter().map(|s| (s.z, s.t)).collect();
            let mut sorted = planes.clone();
            sorted.sort();
            prop_assert_eq!(planes, sorted);
        }
    }

    #[test]
    fn ids_follow_client_flags(source in arb_component(5)) {
        let out = serialize(&source, &ImageRef::new(1u64), &SerializeOptions::default()).unwrap();

        for (roi, record) in source.roi_map().values().zip(&out.records) {
            prop_assert_eq!(record.client_side, roi.is_client_side());
            if roi.is_client_side() {
                prop_assert_eq!(record.id, None);
            } else {
                prop_assert_eq!(record.id, Some(roi.id()));
            }

            for (shape, shape_record) in roi.shapes().values().zip(&record.shapes) {
                let expected = if shape.figure.client_object { None } else { shape.id };
                prop_assert_eq!(shape_record.id, expected);
                prop_assert_eq!(shape_record.dirty, shape.dirty);
            }
        }
    }

    #[test]
    fn kinds_match_figures(source in arb_component(3)) {
        let out = serialize(&source, &ImageRef::new(1u64), &SerializeOptions::default()).unwrap();

        for (roi, record) in source.roi_map().values().zip(&out.records) {
            for (shape, shape_record) in roi.shapes().values().zip(&record.shapes) {
                let expected = match &shape.figure.kind {
                    FigureKind::Ellipse(_) => "ellipse",
                    FigureKind::Point { .. } => "point",
                    FigureKind::Rectangle(_) => "rectangle",
                    FigureKind::Text { .. } => "text",
                    FigureKind::Bezier { closed: true, .. } => "polygon",
                    FigureKind::Bezier { closed: false, .. } | FigureKind::Line { .. } => "polyline",
                    other => unreachable!("generated unsupported figure {other:?}"),
                };
                prop_assert_eq!(shape_record.geometry.kind_name(), expected);

                if let ShapeGeometry::Polygon(path) | ShapeGeometry::Polyline(path) =
                    &shape_record.geometry
                {
                    prop_assert_eq!(path.points.len(), path.control_in.len());
                    prop_assert_eq!(path.points.len(), path.control_out.len());
                    prop_assert_eq!(path.points.len(), path.masks.len());
                }
            }
        }
    }
}
