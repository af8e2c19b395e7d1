//! qr_payload - QR data payload decoding for platform scanners
//!
//! Camera frameworks that detect QR symbols usually hand back two things: a
//! text value and the error-corrected data codewords of the symbol. The text
//! value is lossy for binary payloads, so this crate walks the segment
//! headers in the codewords and recovers the exact bytes that were encoded.
//!
//! Decoding is total: any byte sequence is accepted, and malformed or
//! truncated input yields a best-effort result rather than an error.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven tunables
pub mod config;
/// Bitstream and segment decoding
pub mod decoder;
/// Detection input and barcode result records
pub mod models;
/// Detection debouncing
pub mod scan;
/// Hex and segment-encoding helpers for tools and tests
pub mod tools;

pub use decoder::{Halt, Mode, PayloadReport, decode, decode_with_report};
pub use models::{Barcode, Detection};
pub use scan::ScanSession;

use rayon::prelude::*;

/// Decode many codeword buffers. Output order matches input order.
///
/// Batches at or above `QR_BATCH_PARALLEL_MIN` (default 64) are spread over
/// the rayon thread pool; smaller ones are decoded inline.
pub fn decode_batch<B: AsRef<[u8]> + Sync>(buffers: &[B]) -> Vec<Vec<u8>> {
    if buffers.len() >= config::batch_parallel_min() {
        log::debug!("decoding batch of {} buffers in parallel", buffers.len());
        buffers.par_iter().map(|b| decode(b.as_ref())).collect()
    } else {
        buffers.iter().map(|b| decode(b.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::SegmentWriter;

    #[test]
    fn test_decode_batch_preserves_order() {
        let buffers: Vec<Vec<u8>> = (0..200u32)
            .map(|i| {
                let mut writer = SegmentWriter::new();
                writer.numeric(&i.to_string()).unwrap().terminator();
                writer.to_codewords()
            })
            .collect();

        let decoded = decode_batch(&buffers);
        assert_eq!(decoded.len(), 200);
        for (i, bytes) in decoded.iter().enumerate() {
            assert_eq!(bytes, i.to_string().as_bytes());
        }
    }

    #[test]
    fn test_decode_batch_small_and_empty() {
        let empty: [&[u8]; 0] = [];
        assert!(decode_batch(&empty).is_empty());

        let buffers: [&[u8]; 2] = [&[], &[0x40, 0x14, 0x10]];
        assert_eq!(decode_batch(&buffers), vec![Vec::new(), b"A".to_vec()]);
    }
}
