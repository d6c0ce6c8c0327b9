//! Optional process-global client.
//!
//! The instance form ([`DashboardClient`]) is primary: construct one and
//! thread it through your own code. Hosts that prefer a static accessor can
//! [`initialize`] once and use the free functions below. Touching the
//! accessor before `initialize` is a programming error and fails with
//! [`ClientError::NotInitialized`].

use std::sync::OnceLock;

use higuard_core::errors::ClientError;
use higuard_core::{ClientConfig, ConfigOverride, ErrorEvent, HiguardResult};
use higuard_transport::Credentials;

use crate::client::{DashboardClient, SendOutcome};

static GLOBAL: OnceLock<DashboardClient> = OnceLock::new();

/// Install the process-global client. Fails if called twice.
pub fn initialize(
    credentials: Credentials,
    base_url: impl Into<String>,
    config: Option<ClientConfig>,
) -> HiguardResult<()> {
    let client = match config {
        Some(config) => DashboardClient::with_config(credentials, base_url, config)?,
        None => DashboardClient::new(credentials, base_url)?,
    };
    GLOBAL
        .set(client)
        .map_err(|_| ClientError::AlreadyInitialized)?;
    Ok(())
}

/// The global client, if initialized.
pub fn client() -> Result<&'static DashboardClient, ClientError> {
    GLOBAL.get().ok_or(ClientError::NotInitialized)
}

/// Report an error through the global client.
pub fn send_error(event: ErrorEvent) -> HiguardResult<SendOutcome> {
    Ok(client()?.send_error(event))
}

/// Apply a config override to the global client.
pub fn override_configs(overrides: &ConfigOverride) -> HiguardResult<()> {
    client()?.override_configs(overrides)?;
    Ok(())
}
