//! Byte mode decoder (Mode 0100) for 8-bit data

use crate::decoder::bit_reader::BitReader;

/// Raw 8-bit values, one output byte each
pub struct ByteDecoder;

impl ByteDecoder {
    /// Copy up to `character_count` raw bytes into `out`. Stops early when
    /// fewer than 8 bits remain. Returns the number of bytes appended.
    pub fn decode(reader: &mut BitReader<'_>, character_count: usize, out: &mut Vec<u8>) -> usize {
        let mut written = 0;

        for _ in 0..character_count {
            if reader.remaining() < 8 {
                log::debug!(
                    "byte segment truncated: {} of {} bytes read",
                    written,
                    character_count
                );
                break;
            }
            out.push(reader.read_bits(8) as u8);
            written += 1;
        }

        written
    }
}
