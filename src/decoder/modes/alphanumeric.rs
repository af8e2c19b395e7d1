//! Alphanumeric mode decoder (Mode 0010)
//! Alphanumeric character set: 0-9, A-Z, space, $%*+-./:

use crate::decoder::bit_reader::BitReader;

const ALPHANUMERIC_TABLE: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Look up a table index, rejecting anything past the 45 defined symbols.
pub fn alphanumeric_char(index: u16) -> Option<u8> {
    ALPHANUMERIC_TABLE.get(index as usize).copied()
}

/// Inverse of [`alphanumeric_char`].
pub fn alphanumeric_index(ch: u8) -> Option<u16> {
    ALPHANUMERIC_TABLE
        .iter()
        .position(|&c| c == ch)
        .map(|idx| idx as u16)
}

/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericDecoder;

impl AlphanumericDecoder {
    /// Decode `character_count` characters into `out`, silently dropping
    /// indices outside the table. Returns the number of bytes appended.
    ///
    /// Pairs past the end of the buffer read as zero and decode as '0'.
    pub fn decode(reader: &mut BitReader<'_>, character_count: usize, out: &mut Vec<u8>) -> usize {
        let start = out.len();
        let mut chars_remaining = character_count;

        while chars_remaining > 0 {
            if chars_remaining >= 2 {
                let value = reader.read_bits(11);
                out.extend(alphanumeric_char(value / 45));
                out.extend(alphanumeric_char(value % 45));
                chars_remaining -= 2;
            } else {
                let value = reader.read_bits(6);
                out.extend(alphanumeric_char(value));
                chars_remaining -= 1;
            }
        }

        if reader.remaining() == 0 {
            log::trace!(
                "alphanumeric segment of {} characters reached end of buffer",
                character_count
            );
        }

        out.len() - start
    }
}
