//! Segment headers and the segment loop.
//!
//! The loop is a two-state machine: it keeps running segments until it
//! reaches the single terminal state [`Halt`], which records which of the
//! three exits was taken. Every step reads at least the 4-bit mode
//! indicator, so the cursor strictly advances and the loop is bounded by the
//! buffer length.

use crate::decoder::bit_reader::BitReader;
use crate::decoder::modes::{
    alphanumeric::AlphanumericDecoder, byte::ByteDecoder, kanji::KanjiSkipper,
    numeric::NumericDecoder,
};

/// Width of the mode indicator in bits
pub const MODE_INDICATOR_BITS: usize = 4;

/// Segment mode, from the 4-bit mode indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// 0000
    Terminator,
    /// 0001
    Numeric,
    /// 0010
    Alphanumeric,
    /// 0100
    Byte,
    /// 1000
    Kanji,
    /// Anything else (ECI, structured append, FNC1, or corrupt bits)
    Unsupported(u8),
}

impl Mode {
    /// Classify a 4-bit mode indicator (upper bits are ignored)
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x0F {
            0b0000 => Mode::Terminator,
            0b0001 => Mode::Numeric,
            0b0010 => Mode::Alphanumeric,
            0b0100 => Mode::Byte,
            0b1000 => Mode::Kanji,
            other => Mode::Unsupported(other),
        }
    }

    /// The 4-bit mode indicator
    pub fn bits(&self) -> u8 {
        match self {
            Mode::Terminator => 0b0000,
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
            Mode::Kanji => 0b1000,
            Mode::Unsupported(bits) => *bits & 0x0F,
        }
    }

    /// Character count field width. Only the version 1-9 widths are used;
    /// larger symbols are not supported.
    pub fn char_count_bits(&self) -> usize {
        match self {
            Mode::Numeric => 10,
            Mode::Alphanumeric => 9,
            Mode::Byte | Mode::Kanji => 8,
            Mode::Terminator | Mode::Unsupported(_) => 0,
        }
    }
}

/// Why the segment loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// Explicit 0000 mode indicator
    Terminator,
    /// A mode indicator this decoder cannot interpret
    UnsupportedMode(u8),
    /// Fewer than four bits left for the next mode indicator
    Exhausted,
}

enum LoopState {
    Running,
    Halted(Halt),
}

/// Drives segments over one codeword buffer, appending their payloads to `out`.
pub(crate) struct SegmentLoop<'a> {
    reader: BitReader<'a>,
    segments: usize,
}

impl<'a> SegmentLoop<'a> {
    pub(crate) fn new(codewords: &'a [u8]) -> Self {
        Self {
            reader: BitReader::new(codewords),
            segments: 0,
        }
    }

    /// Run to completion. Returns the halt reason.
    pub(crate) fn run(&mut self, out: &mut Vec<u8>) -> Halt {
        let mut state = LoopState::Running;
        loop {
            match state {
                LoopState::Running => state = self.step(out),
                LoopState::Halted(halt) => return halt,
            }
        }
    }

    pub(crate) fn segments(&self) -> usize {
        self.segments
    }

    pub(crate) fn bits_consumed(&self) -> usize {
        self.reader.index()
    }

    fn step(&mut self, out: &mut Vec<u8>) -> LoopState {
        if self.reader.remaining() < MODE_INDICATOR_BITS {
            return LoopState::Halted(Halt::Exhausted);
        }

        let mode = Mode::from_bits(self.reader.read_bits(MODE_INDICATOR_BITS) as u8);
        match mode {
            Mode::Terminator => return LoopState::Halted(Halt::Terminator),
            Mode::Unsupported(bits) => {
                log::debug!(
                    "unsupported mode indicator {:04b} at bit {}",
                    bits,
                    self.reader.index() - MODE_INDICATOR_BITS
                );
                return LoopState::Halted(Halt::UnsupportedMode(bits));
            }
            Mode::Numeric => {
                let count = self.read_count(mode);
                NumericDecoder::decode(&mut self.reader, count, out);
            }
            Mode::Alphanumeric => {
                let count = self.read_count(mode);
                AlphanumericDecoder::decode(&mut self.reader, count, out);
            }
            Mode::Byte => {
                let count = self.read_count(mode);
                ByteDecoder::decode(&mut self.reader, count, out);
            }
            Mode::Kanji => {
                let count = self.read_count(mode);
                log::trace!("skipping {} kanji characters", count);
                KanjiSkipper::skip(&mut self.reader, count);
            }
        }

        self.segments += 1;
        LoopState::Running
    }

    fn read_count(&mut self, mode: Mode) -> usize {
        self.reader.read_bits(mode.char_count_bits()) as usize
    }
}
