//! Destinations for finished ROI records.

use std::path::PathBuf;

use crate::error::RoiError;
use crate::model::io_json;
use crate::model::RoiRecord;

/// Accepts the records of one completed serialize pass.
///
/// A sink is handed the whole output at once, after the pass succeeded; it
/// never sees a partial result.
pub trait RecordSink {
    /// Takes ownership of the records.
    fn accept(&mut self, records: Vec<RoiRecord>) -> Result<(), RoiError>;
}

impl RecordSink for Vec<RoiRecord> {
    fn accept(&mut self, records: Vec<RoiRecord>) -> Result<(), RoiError> {
        self.extend(records);
        Ok(())
    }
}

/// Writes records to a JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    /// Creates a sink writing to `path`. Nothing is written until a pass
    /// completes.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSink for JsonFileSink {
    fn accept(&mut self, records: Vec<RoiRecord>) -> Result<(), RoiError> {
        io_json::write_records(&self.path, &records)
    }
}
