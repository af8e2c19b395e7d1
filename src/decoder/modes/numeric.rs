//! Numeric mode decoder (Mode 0001)

use crate::decoder::bit_reader::BitReader;

/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
pub struct NumericDecoder;

impl NumericDecoder {
    /// Decode `character_count` digits as ASCII into `out`.
    /// Returns the number of bytes appended.
    ///
    /// Groups past the end of the buffer read as zero, so the full declared
    /// count is always produced.
    pub fn decode(reader: &mut BitReader<'_>, character_count: usize, out: &mut Vec<u8>) -> usize {
        let start = out.len();
        let mut chars_remaining = character_count;

        while chars_remaining > 0 {
            let group_size = chars_remaining.min(3);
            let bits_needed = match group_size {
                3 => 10,
                2 => 7,
                _ => 4,
            };

            let value = reader.read_bits(bits_needed);

            match group_size {
                3 => {
                    push_digit(out, value / 100);
                    push_digit(out, (value / 10) % 10);
                    push_digit(out, value % 10);
                }
                2 => {
                    push_digit(out, value / 10);
                    push_digit(out, value % 10);
                }
                _ => push_digit(out, value),
            }

            chars_remaining -= group_size;
        }

        if reader.remaining() == 0 {
            log::trace!("numeric segment of {} digits reached end of buffer", character_count);
        }

        out.len() - start
    }
}

// Out-of-range groups (e.g. 1023) are not rejected; the digit lands past '9'.
fn push_digit(out: &mut Vec<u8>, digit: u16) {
    out.push(b'0' + digit as u8);
}
