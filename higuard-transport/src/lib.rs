//! HTTP transport for the Higuard error dashboard.
//!
//! One POST per error, outcome folded into a success/error classification
//! instead of surfaced as a fault. No retries, no batching; timeout behavior
//! lives entirely in this layer.

pub mod http;
pub mod protocol;

pub use http::{Credentials, Dispatch, HttpTransport, Transport};
pub use protocol::{ErrorRequest, TagPayload};
