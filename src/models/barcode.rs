use crate::decoder::payload::decode;

/// One symbol reported by the platform scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Text value produced by the vision framework (may be empty)
    pub value: String,
    /// Format label, passed through untouched
    pub format: String,
    /// Error-corrected data codewords; only present for QR symbols whose
    /// descriptor exposed them
    pub qr_codewords: Option<Vec<u8>>,
}

impl Detection {
    /// A symbol that carries only a text value
    pub fn text(value: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            format: format.into(),
            qr_codewords: None,
        }
    }

    /// A QR symbol with its codeword payload
    pub fn qr(value: impl Into<String>, format: impl Into<String>, codewords: Vec<u8>) -> Self {
        Self {
            value: value.into(),
            format: format.into(),
            qr_codewords: Some(codewords),
        }
    }

    /// Key used to count repeated sightings: the value, or the format when
    /// the value is empty.
    pub fn key(&self) -> &str {
        if self.value.is_empty() {
            &self.format
        } else {
            &self.value
        }
    }
}

/// Result record delivered to the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    /// Decoded text value
    pub data: String,
    /// Format label
    pub format: String,
    /// Raw payload bytes
    pub raw_bytes: Vec<u8>,
}

impl Barcode {
    /// Assemble a result record
    pub fn new(data: String, format: String, raw_bytes: Vec<u8>) -> Self {
        Self {
            data,
            format,
            raw_bytes,
        }
    }

    /// Build the result for a detection. QR codewords go through the payload
    /// decoder; every other symbol uses the UTF-8 bytes of its text value.
    pub fn from_detection(detection: &Detection) -> Self {
        let raw_bytes = match &detection.qr_codewords {
            Some(codewords) => decode(codewords),
            None => detection.value.as_bytes().to_vec(),
        };
        Self::new(detection.value.clone(), detection.format.clone(), raw_bytes)
    }
}
