//! QR code data mode decoders
//!
//! - Numeric: digits (0-9)
//! - Alphanumeric: upper-case letters, digits and nine symbols
//! - Byte: raw 8-bit data
//! - Kanji: skipped, no output

pub mod alphanumeric;
pub mod byte;
pub mod kanji;
pub mod numeric;
