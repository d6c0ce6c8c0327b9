//! Error taxonomy for the SDK.
//!
//! Each failure domain has its own enum; [`HiguardError`] aggregates them for
//! APIs that can fail in more than one way. In-flight transport failures are
//! deliberately NOT errors — they are classified into a success/error pair at
//! the transport boundary so `send_error` never throws for a bad response.

mod client_error;
mod config_error;
mod transport_error;

pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use transport_error::TransportError;

/// Top-level SDK error.
#[derive(Debug, thiserror::Error)]
pub enum HiguardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Convenience alias used across the workspace.
pub type HiguardResult<T> = Result<T, HiguardError>;
