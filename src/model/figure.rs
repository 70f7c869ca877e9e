//! Client-side figures: the polymorphic geometry a ROI shape wraps.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::geom::{AffineTransform, BezierNode, Ellipse, Point2D, Rect};

/// A drawn figure together with its transform and origin flag.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    /// The geometry, one of a closed set of figure kinds.
    pub kind: FigureKind,

    /// Optional transform applied on top of the stored geometry.
    pub transform: Option<AffineTransform>,

    /// True if the figure was authored on the client and has never been
    /// saved, so the server has not allocated an identifier for it.
    pub client_object: bool,
}

/// The closed set of figure kinds a ROI shape can hold.
///
/// `Unsupported` is the explicit branch for figure kinds this crate does not
/// know; it is produced when reading a document with an unrecognised `type`
/// and is rejected during classification. Its other fields are kept as read
/// so the document can be written back unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FigureKind {
    /// A Bezier path; `closed` decides between polygon and polyline output.
    Bezier {
        #[serde(default)]
        closed: bool,
        nodes: Vec<BezierNode>,
    },
    Ellipse(Ellipse),
    /// A line or multi-segment line; always open.
    Line { nodes: Vec<BezierNode> },
    /// A bitmap mask, described by the frame it covers.
    Mask(Rect),
    Point { center: Point2D },
    Rectangle(Rect),
    Text { x: f64, y: f64, text: String },
    #[serde(skip)]
    Unsupported {
        name: String,
        attributes: Map<String, Value>,
    },
}

impl FigureKind {
    /// Names of the kinds this crate can read, as written in the `type` tag.
    pub const KNOWN_NAMES: [&'static str; 7] = [
        "bezier",
        "ellipse",
        "line",
        "mask",
        "point",
        "rectangle",
        "text",
    ];

    /// Returns the name of this kind, as written in the `type` tag.
    pub fn name(&self) -> &str {
        match self {
            FigureKind::Bezier { .. } => "bezier",
            FigureKind::Ellipse(_) => "ellipse",
            FigureKind::Line { .. } => "line",
            FigureKind::Mask(_) => "mask",
            FigureKind::Point { .. } => "point",
            FigureKind::Rectangle(_) => "rectangle",
            FigureKind::Text { .. } => "text",
            FigureKind::Unsupported { name, .. } => name,
        }
    }

    /// An unknown kind carrying no fields besides its name.
    pub fn unsupported(name: impl Into<String>) -> Self {
        FigureKind::Unsupported {
            name: name.into(),
            attributes: Map::new(),
        }
    }
}

impl Figure {
    /// Creates a server-side figure without a transform.
    pub fn new(kind: FigureKind) -> Self {
        Self {
            kind,
            transform: None,
            client_object: false,
        }
    }

    /// Shorthand for a rectangle figure.
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(FigureKind::Rectangle(Rect::new(x, y, width, height)))
    }

    /// Shorthand for an ellipse figure.
    pub fn ellipse(cx: f64, cy: f64, radius_x: f64, radius_y: f64) -> Self {
        Self::new(FigureKind::Ellipse(Ellipse::new(
            Point2D::new(cx, cy),
            radius_x,
            radius_y,
        )))
    }

    /// Shorthand for a point figure.
    pub fn point(x: f64, y: f64) -> Self {
        Self::new(FigureKind::Point {
            center: Point2D::new(x, y),
        })
    }

    /// Shorthand for a text figure.
    pub fn text(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self::new(FigureKind::Text {
            x,
            y,
            text: text.into(),
        })
    }

    /// Shorthand for a Bezier path figure.
    pub fn bezier(closed: bool, nodes: Vec<BezierNode>) -> Self {
        Self::new(FigureKind::Bezier { closed, nodes })
    }

    /// Shorthand for a line figure.
    pub fn line(nodes: Vec<BezierNode>) -> Self {
        Self::new(FigureKind::Line { nodes })
    }

    /// Shorthand for a mask figure.
    pub fn mask(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(FigureKind::Mask(Rect::new(x, y, width, height)))
    }

    /// Sets the transform of this figure.
    pub fn with_transform(mut self, transform: AffineTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Marks this figure as client-authored.
    pub fn client_authored(mut self) -> Self {
        self.client_object = true;
        self
    }
}

/// Keys owned by [`Figure`] itself rather than by its kind.
const FIGURE_KEYS: [&str; 3] = ["type", "transform", "client_object"];

// Known kinds write their own fields next to the `type` tag; unknown kinds
// write back the fields they were read with.
impl Serialize for Figure {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = match &self.kind {
            FigureKind::Unsupported { name, attributes } => {
                let mut map = attributes.clone();
                map.insert("type".to_string(), Value::String(name.clone()));
                map
            }
            kind => match serde_json::to_value(kind).map_err(S::Error::custom)? {
                Value::Object(map) => map,
                other => {
                    return Err(S::Error::custom(format!(
                        "figure kind {} is not a JSON object: {other}",
                        kind.name()
                    )))
                }
            },
        };

        if let Some(transform) = &self.transform {
            let value = serde_json::to_value(transform).map_err(S::Error::custom)?;
            map.insert("transform".to_string(), value);
        }
        map.insert(
            "client_object".to_string(),
            Value::Bool(self.client_object),
        );

        map.serialize(serializer)
    }
}

// An unknown `type` must still produce a figure so the classifier can report
// it by name, so the tag is inspected before the kind is decoded.
impl<'de> Deserialize<'de> for Figure {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct FigureData {
            #[serde(rename = "type")]
            kind: String,
            #[serde(default)]
            transform: Option<AffineTransform>,
            #[serde(default)]
            client_object: bool,
        }

        let value = serde_json::Value::deserialize(deserializer)?;
        let data = FigureData::deserialize(&value).map_err(D::Error::custom)?;

        let kind = if FigureKind::KNOWN_NAMES.contains(&data.kind.as_str()) {
            FigureKind::deserialize(value).map_err(D::Error::custom)?
        } else {
            let mut attributes = match value {
                Value::Object(map) => map,
                _ => Map::new(),
            };
            for key in FIGURE_KEYS {
                attributes.remove(key);
            }
            FigureKind::Unsupported {
                name: data.kind,
                attributes,
            }
        };

        Ok(Figure {
            kind,
            transform: data.transform,
            client_object: data.client_object,
        })
    }
}
