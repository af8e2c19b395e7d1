use crate::decoder::segment::{Halt, SegmentLoop};

/// Outcome of decoding one codeword buffer, with the bookkeeping needed to
/// tell a clean terminator apart from a cut-off or corrupt stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadReport {
    /// Concatenated segment payloads, in stream order
    pub data: Vec<u8>,
    /// Why decoding stopped
    pub halt: Halt,
    /// Number of segments whose header was read (terminator excluded)
    pub segments: usize,
    /// Final cursor position in bits
    pub bits_consumed: usize,
}

impl PayloadReport {
    /// True when the stream ended on a terminator or simply ran out of bits.
    pub fn is_clean(&self) -> bool {
        !matches!(self.halt, Halt::UnsupportedMode(_))
    }
}

/// Decode the data bytes carried by error-corrected QR codewords.
///
/// Never fails. Fields cut off by the end of the buffer read short, and
/// decoding stops at the next mode indicator that does not fit or is not
/// understood.
pub fn decode(codewords: &[u8]) -> Vec<u8> {
    if codewords.is_empty() {
        return Vec::new();
    }
    decode_with_report(codewords).data
}

/// Same as [`decode`], also reporting how the segment loop ended.
pub fn decode_with_report(codewords: &[u8]) -> PayloadReport {
    let mut data = Vec::with_capacity(codewords.len());
    let mut segments = SegmentLoop::new(codewords);
    let halt = segments.run(&mut data);

    log::debug!(
        "decoded {} bytes from {} codewords ({} segments, halt={:?})",
        data.len(),
        codewords.len(),
        segments.segments(),
        halt
    );

    PayloadReport {
        data,
        halt,
        segments: segments.segments(),
        bits_consumed: segments.bits_consumed(),
    }
}
