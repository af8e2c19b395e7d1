use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

/// Sightings required before a scan session emits a barcode
pub const DEFAULT_SCAN_CONFIRMATIONS: usize = 2;

/// Batch size at which [`decode_batch`](crate::decode_batch) switches to rayon
pub const DEFAULT_BATCH_PARALLEL_MIN: usize = 64;

static SCAN_CONFIRMATIONS: OnceLock<usize> = OnceLock::new();

pub(crate) fn scan_confirmations() -> usize {
    *SCAN_CONFIRMATIONS.get_or_init(|| {
        parse_env_usize("QR_SCAN_CONFIRMATIONS", DEFAULT_SCAN_CONFIRMATIONS).clamp(1, 16)
    })
}

static BATCH_PARALLEL_MIN: OnceLock<usize> = OnceLock::new();

pub(crate) fn batch_parallel_min() -> usize {
    *BATCH_PARALLEL_MIN.get_or_init(|| {
        parse_env_usize("QR_BATCH_PARALLEL_MIN", DEFAULT_BATCH_PARALLEL_MIN).max(1)
    })
}
