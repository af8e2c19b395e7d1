//! QR payload decoding
//!
//! Turns error-corrected data codewords back into the bytes that were
//! encoded, by walking the segment headers in the bitstream.

/// MSB-first bit cursor over the codeword buffer
pub mod bit_reader;
/// Per-mode segment decoders (numeric, alphanumeric, byte, kanji)
pub mod modes;
/// Public decode entry points
pub mod payload;
/// Mode indicators and the segment loop
pub mod segment;

pub use payload::{PayloadReport, decode, decode_with_report};
pub use segment::{Halt, Mode};
