//! Flat f64 wire codec.
//!
//! Payloads are contiguous IEEE-754 64-bit floats in native byte order
//! with no length prefix; the sample count is the byte count divided by
//! eight. Trailing bytes that do not fill a full sample are truncated.

/// Size of one encoded sample in bytes.
pub const SAMPLE_BYTES: usize = std::mem::size_of::<f64>();

pub fn encode_f64s(samples: &[f64]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * SAMPLE_BYTES);
    for sample in samples {
        bytes.extend_from_slice(&sample.to_ne_bytes());
    }
    bytes
}

pub fn decode_f64s(bytes: &[u8]) -> Vec<f64> {
    let count = bytes.len() / SAMPLE_BYTES;
    if bytes.len() % SAMPLE_BYTES != 0 {
        log::debug!(
            "payload of {} bytes is not a multiple of {SAMPLE_BYTES}; truncating",
            bytes.len()
        );
    }
    let mut samples = Vec::with_capacity(count);
    for chunk in bytes.chunks_exact(SAMPLE_BYTES) {
        let raw: [u8; SAMPLE_BYTES] = chunk.try_into().unwrap_or_default();
        samples.push(f64::from_ne_bytes(raw));
    }
    samples
}
