//! Helpers shared by the `qrtool` binary, benches and tests: hex codeword
//! parsing and a small segment encoder for building codeword buffers.

use thiserror::Error;

use crate::decoder::modes::alphanumeric::alphanumeric_index;
use crate::decoder::modes::kanji::KANJI_CHAR_BITS;
use crate::decoder::segment::{MODE_INDICATOR_BITS, Mode};

/// Failures of the hex and segment-encoding helpers
#[derive(Debug, Error)]
pub enum ToolError {
    /// Input was not valid hex
    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),
    /// Character outside the mode's character set
    #[error("{0:?} cannot be encoded in {1:?} mode")]
    Unencodable(char, Mode),
    /// Segment longer than its character count field can express
    #[error("{len} characters exceed the {max} allowed in a {mode:?} segment")]
    SegmentTooLong {
        /// Segment mode
        mode: Mode,
        /// Requested character count
        len: usize,
        /// Largest count the field holds
        max: usize,
    },
    /// Reading an input file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parse hex digits into bytes. Whitespace is ignored.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, ToolError> {
    let digits: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(hex::decode(digits)?)
}

/// Lower-case hex, two digits per byte, no separators.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Bit-level writer producing codeword buffers segment by segment, using the
/// version 1-9 character count widths.
#[derive(Debug, Default, Clone)]
pub struct SegmentWriter {
    bits: Vec<bool>,
}

impl SegmentWriter {
    /// Empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bits written so far
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when nothing has been written
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Append the low `width` bits of `value`, most significant first.
    pub fn raw(&mut self, value: u32, width: usize) -> &mut Self {
        for i in (0..width).rev() {
            self.bits.push((value >> i) & 1 != 0);
        }
        self
    }

    fn header(&mut self, mode: Mode, len: usize) -> Result<(), ToolError> {
        let width = mode.char_count_bits();
        let max = (1usize << width) - 1;
        if len > max {
            return Err(ToolError::SegmentTooLong { mode, len, max });
        }
        self.raw(mode.bits() as u32, MODE_INDICATOR_BITS);
        self.raw(len as u32, width);
        Ok(())
    }

    /// Numeric segment. Fails on anything but ASCII digits.
    pub fn numeric(&mut self, digits: &str) -> Result<&mut Self, ToolError> {
        let mut values = Vec::with_capacity(digits.len());
        for ch in digits.chars() {
            let digit = ch
                .to_digit(10)
                .ok_or(ToolError::Unencodable(ch, Mode::Numeric))?;
            values.push(digit);
        }

        self.header(Mode::Numeric, values.len())?;
        for group in values.chunks(3) {
            let value = group.iter().fold(0, |acc, d| acc * 10 + d);
            let width = match group.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            self.raw(value, width);
        }
        Ok(self)
    }

    /// Alphanumeric segment. Fails on characters outside the 45-symbol set.
    pub fn alphanumeric(&mut self, text: &str) -> Result<&mut Self, ToolError> {
        let mut indices = Vec::with_capacity(text.len());
        for ch in text.chars() {
            let idx = u8::try_from(ch)
                .ok()
                .and_then(alphanumeric_index)
                .ok_or(ToolError::Unencodable(ch, Mode::Alphanumeric))?;
            indices.push(idx as u32);
        }

        self.header(Mode::Alphanumeric, indices.len())?;
        for pair in indices.chunks(2) {
            match *pair {
                [first, second] => {
                    self.raw(first * 45 + second, 11);
                }
                [single] => {
                    self.raw(single, 6);
                }
                _ => {}
            }
        }
        Ok(self)
    }

    /// Byte segment of at most 255 bytes
    pub fn bytes(&mut self, data: &[u8]) -> Result<&mut Self, ToolError> {
        self.header(Mode::Byte, data.len())?;
        for &byte in data {
            self.raw(byte as u32, 8);
        }
        Ok(self)
    }

    /// Kanji segment of `count` characters whose 13-bit values are all zero.
    pub fn kanji_placeholder(&mut self, count: usize) -> Result<&mut Self, ToolError> {
        self.header(Mode::Kanji, count)?;
        for _ in 0..count {
            self.raw(0, KANJI_CHAR_BITS);
        }
        Ok(self)
    }

    /// The 0000 end-of-data marker
    pub fn terminator(&mut self) -> &mut Self {
        self.raw(Mode::Terminator.bits() as u32, MODE_INDICATOR_BITS)
    }

    /// Pack into codewords, zero-padding the last one.
    pub fn to_codewords(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, &bit)| acc | ((bit as u8) << (7 - i)))
            })
            .collect()
    }
}
