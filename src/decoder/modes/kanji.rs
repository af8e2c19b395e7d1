//! Kanji mode (Mode 1000)
//!
//! Characters are 13 bits each. They are skipped rather than converted, so a
//! Kanji segment contributes nothing to the decoded bytes.

use crate::decoder::bit_reader::BitReader;

/// Bits per Kanji character
pub const KANJI_CHAR_BITS: usize = 13;

/// Advances past Kanji payloads without decoding them
pub struct KanjiSkipper;

impl KanjiSkipper {
    /// Move the cursor past `character_count` characters.
    pub fn skip(reader: &mut BitReader<'_>, character_count: usize) {
        reader.advance(character_count * KANJI_CHAR_BITS);
    }
}
