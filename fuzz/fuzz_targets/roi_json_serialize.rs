//! Fuzz target for ROI document parsing and serialization.
//!
//! Arbitrary bytes are parsed as a ROI document; anything that parses is
//! serialized with masks skipped, so classification and transform encoding
//! see whatever figures the parser let through.
//!
//! Run with:
//!   cargo +nightly fuzz run roi_json_serialize

#![no_main]

use libfuzzer_sys::fuzz_target;
use roiserial::model::io_json::from_json_slice;
use roiserial::serialize::{serialize, SerializeOptions};

fuzz_target!(|data: &[u8]| {
    // 10MB is generous for a ROI document
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(document) = from_json_slice(data) else {
        return;
    };

    let opts = SerializeOptions {
        skip_unimplemented: true,
    };
    let _ = serialize(&document.rois, &document.image, &opts);
});
