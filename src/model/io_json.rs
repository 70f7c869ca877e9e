//! JSON reading and writing for ROI documents and canonical records.
//!
//! Documents (the client-side input) and records (the canonical output) are
//! both plain serde types; this module only adds file handling and maps
//! failures into [`RoiError`].

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use super::record::RoiRecord;
use super::roi::RoiDocument;
use crate::error::RoiError;

/// Reads a ROI document from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_document(path: &Path) -> Result<RoiDocument, RoiError> {
    let file = File::open(path).map_err(RoiError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| RoiError::InputJsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a ROI document to a JSON file.
pub fn write_document(path: &Path, document: &RoiDocument) -> Result<(), RoiError> {
    let file = File::create(path).map_err(RoiError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, document).map_err(|source| RoiError::OutputJsonWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes canonical records to a JSON file as a pretty-printed array.
pub fn write_records(path: &Path, records: &[RoiRecord]) -> Result<(), RoiError> {
    let file = File::create(path).map_err(RoiError::Io)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, records).map_err(|source| {
        RoiError::OutputJsonWrite {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Reads a ROI document from a JSON string.
pub fn from_json_str(json: &str) -> Result<RoiDocument, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads a ROI document from JSON bytes.
pub fn from_json_slice(bytes: &[u8]) -> Result<RoiDocument, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Renders canonical records as a pretty-printed JSON array.
pub fn records_to_json_string(records: &[RoiRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Parses canonical records from a JSON array.
pub fn records_from_json_str(json: &str) -> Result<Vec<RoiRecord>, serde_json::Error> {
    serde_json::from_str(json)
}
