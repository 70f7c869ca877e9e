//! Fuzz target for transform encoding.
//!
//! Every 48-byte input is read as six little-endian f64 coefficients,
//! NaN and infinities included. Encoding must either fail cleanly or
//! produce a form that parses back to the same coefficients.
//!
//! Run with:
//!   cargo +nightly fuzz run transform_encode

#![no_main]

use libfuzzer_sys::fuzz_target;
use roiserial::geom::AffineTransform;
use roiserial::transform::encode;

fuzz_target!(|data: &[u8]| {
    if data.len() != 48 {
        return;
    }

    let mut coefficients = [0.0f64; 6];
    for (value, chunk) in coefficients.iter_mut().zip(data.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *value = f64::from_le_bytes(bytes);
    }

    let t = AffineTransform::from(coefficients);
    if let Ok(encoded) = encode(&t) {
        assert!(t.is_finite());
        if let Some(args) = encoded
            .strip_prefix("matrix(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let parsed: Vec<f64> = args.split(' ').filter_map(|n| n.parse().ok()).collect();
            assert_eq!(parsed.len(), 6);
            for (p, c) in parsed.iter().zip(t.coefficients()) {
                assert_eq!(*p, c);
            }
        }
    }
});
