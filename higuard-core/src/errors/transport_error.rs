/// Transport construction errors.
///
/// Only building a transport can fail. Once built, every dispatch outcome
/// (non-2xx status, network failure) is folded into the returned
/// classification instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("invalid dashboard base URL: {url:?}")]
    InvalidBaseUrl { url: String },

    #[error("failed to build HTTP client: {reason}")]
    BuildFailed { reason: String },
}
