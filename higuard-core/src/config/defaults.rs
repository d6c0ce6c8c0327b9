//! Default values for [`ClientConfig`](super::ClientConfig) fields.

/// Dedup window and sweep period, in milliseconds.
pub const DEFAULT_MAX_AGE_MS: u64 = 20_000;

/// Reserved duplicate-sampling knob.
pub const DEFAULT_SAMPLING_RATE: u32 = 2;
