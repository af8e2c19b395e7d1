//! Debouncing of scanner detections into delivered barcodes.
//!
//! Platform scanners report the same symbol on many consecutive frames and
//! occasionally misread one frame. A [`ScanSession`] only delivers a symbol
//! once it has been seen a configured number of times, then completes.

use std::collections::HashMap;

use crate::config;
use crate::models::{Barcode, Detection};

type BarcodeFilter = Box<dyn Fn(&Barcode) -> bool + Send + Sync>;

/// Counts sightings per symbol and delivers the first confirmed barcode
pub struct ScanSession {
    formats: Vec<String>,
    confirmations: usize,
    filter: Option<BarcodeFilter>,
    sightings: HashMap<String, usize>,
    finished: bool,
}

impl ScanSession {
    /// Session accepting the given format labels (empty = every format),
    /// with the confirmation count taken from `QR_SCAN_CONFIRMATIONS`.
    pub fn new<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_confirmations(formats, config::scan_confirmations())
    }

    /// Session with an explicit confirmation count (at least 1).
    pub fn with_confirmations<I, S>(formats: I, confirmations: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            formats: formats.into_iter().map(Into::into).collect(),
            confirmations: confirmations.max(1),
            filter: None,
            sightings: HashMap::new(),
            finished: false,
        }
    }

    /// Only deliver barcodes for which `filter` returns true.
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Barcode) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Sightings required before delivery
    pub fn confirmations(&self) -> usize {
        self.confirmations
    }

    /// True once a barcode has been delivered
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Start a fresh scan, forgetting all sightings.
    pub fn reset(&mut self) {
        self.sightings.clear();
        self.finished = false;
    }

    fn is_requested(&self, format: &str) -> bool {
        self.formats.is_empty() || self.formats.iter().any(|f| f == format)
    }

    /// Feed one frame's worth of detections. Returns the first barcode that
    /// reaches the confirmation count and passes the filter.
    pub fn process(&mut self, detections: &[Detection]) -> Option<Barcode> {
        detections.iter().find_map(|d| self.observe(d))
    }

    /// Feed a single detection.
    pub fn observe(&mut self, detection: &Detection) -> Option<Barcode> {
        if self.finished || !self.is_requested(&detection.format) {
            return None;
        }

        let seen = self
            .sightings
            .entry(detection.key().to_string())
            .or_insert(0);
        *seen += 1;
        if *seen < self.confirmations {
            return None;
        }

        let barcode = Barcode::from_detection(detection);
        if let Some(filter) = &self.filter {
            if !filter(&barcode) {
                log::trace!("barcode rejected by filter: {:?}", barcode.data);
                return None;
            }
        }

        log::debug!(
            "delivering {} barcode ({} raw bytes)",
            barcode.format,
            barcode.raw_bytes.len()
        );
        self.sightings.clear();
        self.finished = true;
        Some(barcode)
    }
}

impl std::fmt::Debug for ScanSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanSession")
            .field("formats", &self.formats)
            .field("confirmations", &self.confirmations)
            .field("has_filter", &self.filter.is_some())
            .field("sightings", &self.sightings)
            .field("finished", &self.finished)
            .finish()
    }
}
