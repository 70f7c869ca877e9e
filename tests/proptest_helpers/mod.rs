#![allow(dead_code)]

use std::collections::BTreeSet;

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};
use roiserial::geom::{AffineTransform, BezierNode, Point2D};
use roiserial::model::{Coord3D, Figure, Roi, RoiComponent, RoiShape};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Finite coefficients, biased towards the values that select special forms.
pub fn arb_coefficient() -> BoxedStrategy<f64> {
    prop_oneof![
        3 => Just(0.0),
        3 => Just(1.0),
        2 => (-1000i32..=1000).prop_map(f64::from),
        2 => (-1.0e6f64..1.0e6),
        1 => prop::num::f64::NORMAL,
    ]
    .boxed()
}

pub fn arb_transform() -> BoxedStrategy<AffineTransform> {
    prop::array::uniform6(arb_coefficient())
        .prop_map(AffineTransform::from)
        .boxed()
}

pub fn arb_point() -> BoxedStrategy<Point2D> {
    (-4096.0f64..4096.0, -4096.0f64..4096.0)
        .prop_map(|(x, y)| Point2D::new(x, y))
        .boxed()
}

pub fn arb_node() -> BoxedStrategy<BezierNode> {
    (arb_point(), arb_point(), arb_point(), 0i32..=3)
        .prop_map(|(p, c_in, c_out, mask)| BezierNode::new(p, c_in, c_out, mask))
        .boxed()
}

/// Figures of every supported kind; no masks, nothing unsupported.
pub fn arb_supported_figure() -> BoxedStrategy<Figure> {
    let kind = prop_oneof![
        (arb_point(), 0.0f64..500.0, 0.0f64..500.0)
            .prop_map(|(c, rx, ry)| Figure::ellipse(c.x, c.y, rx, ry)),
        arb_point().prop_map(|c| Figure::point(c.x, c.y)),
        (arb_point(), 0.0f64..500.0, 0.0f64..500.0)
            .prop_map(|(o, w, h)| Figure::rectangle(o.x, o.y, w, h)),
        (arb_point(), "[a-z ]{0,12}").prop_map(|(o, text)| Figure::text(o.x, o.y, text)),
        (any::<bool>(), prop::collection::vec(arb_node(), 0..8))
            .prop_map(|(closed, nodes)| Figure::bezier(closed, nodes)),
        prop::collection::vec(arb_node(), 0..8).prop_map(Figure::line),
    ];

    (kind, prop::option::of(arb_transform()), any::<bool>())
        .prop_map(|(mut figure, transform, client_object)| {
            figure.transform = transform;
            figure.client_object = client_object;
            figure
        })
        .boxed()
}

pub fn arb_shape(coord: Coord3D) -> BoxedStrategy<RoiShape> {
    (
        arb_supported_figure(),
        prop::option::of(1u64..1_000_000),
        any::<bool>(),
        prop::option::of("[a-z]{1,8}"),
    )
        .prop_map(move |(figure, id, dirty, text)| {
            let mut shape = RoiShape::new(coord, figure);
            shape.id = id.map(Into::into);
            shape.dirty = dirty;
            shape.text = text;
            shape
        })
        .boxed()
}

/// A ROI with distinct planes, shapes added in the generated (unsorted) order.
pub fn arb_roi(id: u64) -> BoxedStrategy<Roi> {
    (
        any::<bool>(),
        prop::collection::btree_set((0i32..4, 0i32..4), 0..6),
    )
        .prop_flat_map(move |(client_side, planes)| {
            let shapes: Vec<BoxedStrategy<RoiShape>> = planes
                .into_iter()
                .map(|(z, t)| arb_shape(Coord3D::new(z, t)))
                .collect();
            (Just(client_side), shapes.prop_shuffle())
        })
        .prop_map(move |(client_side, shapes)| {
            let mut roi = Roi::new(id, client_side);
            for shape in shapes {
                roi.add_shape(shape).expect("planes are distinct");
            }
            roi
        })
        .boxed()
}

pub fn arb_component(max_rois: usize) -> BoxedStrategy<RoiComponent> {
    prop::collection::btree_set(1u64..10_000, 0..=max_rois)
        .prop_flat_map(|ids: BTreeSet<u64>| {
            let rois: Vec<BoxedStrategy<Roi>> = ids.into_iter().map(arb_roi).collect();
            rois
        })
        .prop_map(|rois| {
            let mut component = RoiComponent::new();
            for roi in rois {
                component.add_roi(roi).expect("ids are distinct");
            }
            component
        })
        .boxed()
}
