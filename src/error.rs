use std::path::PathBuf;
use thiserror::Error;

use crate::geom::RoiId;
use crate::model::Coord3D;

/// The main error type for roiserial operations.
#[derive(Debug, Error)]
pub enum RoiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse ROI JSON from {path}: {source}")]
    InputJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write ROI records to {path}: {source}")]
    OutputJsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("ROI {roi} appears more than once")]
    DuplicateRoi { roi: RoiId },

    #[error("ROI {roi} holds more than one shape at {coord}")]
    DuplicateCoordinate { roi: RoiId, coord: Coord3D },

    #[error("ROIShape not supported: {name}")]
    UnsupportedFigure { name: String },

    #[error("Cannot encode transform: coefficient {coefficient} is {value}")]
    Encoding {
        coefficient: &'static str,
        value: f64,
    },

    #[error("No encoding implemented for {kind} shape in ROI {roi} at {coord}")]
    UnimplementedShape {
        kind: &'static str,
        roi: RoiId,
        coord: Coord3D,
    },
}
