/// MSB-first bit cursor over a codeword buffer
///
/// Reads never fail: a read that runs off the end of the buffer returns the
/// bits it managed to collect. The cursor only moves forward and never passes
/// `8 * codewords.len()`.
pub struct BitReader<'a> {
    codewords: &'a [u8],
    idx: usize,
}

impl<'a> BitReader<'a> {
    /// Cursor at bit 0 of `codewords`
    pub fn new(codewords: &'a [u8]) -> Self {
        Self { codewords, idx: 0 }
    }

    /// Total number of bits in the buffer
    pub fn len(&self) -> usize {
        self.codewords.len() * 8
    }

    /// True for a zero-length buffer
    pub fn is_empty(&self) -> bool {
        self.codewords.is_empty()
    }

    /// Bits left after the cursor
    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.idx)
    }

    /// Current bit offset from the start of the buffer
    pub fn index(&self) -> usize {
        self.idx
    }

    /// Skip `n` bits without reading them, stopping at the end of the buffer.
    pub fn advance(&mut self, n: usize) {
        self.idx = self.idx.saturating_add(n).min(self.len());
    }

    /// Read up to `n` bits (n <= 16) into an unsigned value, first bit most
    /// significant. Near the end of the buffer the field comes back short.
    pub fn read_bits(&mut self, n: usize) -> u16 {
        debug_assert!(n <= 16);
        let take = n.min(self.remaining());
        let mut val = 0u16;
        for _ in 0..take {
            let byte = self.codewords[self.idx / 8];
            let bit = (byte >> (7 - (self.idx % 8))) & 1;
            val = (val << 1) | bit as u16;
            self.idx += 1;
        }
        val
    }
}
