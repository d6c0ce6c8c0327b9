//! Client configuration with validated mutation.
//!
//! # Examples
//!
//! ```
//! use higuard_core::config::ClientConfig;
//!
//! let config = ClientConfig::default();
//! assert!(!config.verbose);
//! assert_eq!(config.max_age_ms(), 20_000);
//! ```

pub mod defaults;

pub use defaults::{DEFAULT_MAX_AGE_MS, DEFAULT_SAMPLING_RATE};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Runtime environment of the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Browser-like host; user-agent enrichment is attempted.
    #[default]
    Web,
    /// Server-side host; browser-only enrichment is skipped.
    Node,
}

/// Tunables owned by one client instance.
///
/// Numeric fields are private so every mutation goes through a validated
/// setter; a rejected value fails the mutation and leaves the prior value
/// intact. A config obtained from deserialization is re-validated at client
/// construction via [`ClientConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Emit diagnostic `tracing` events for suppressed and dispatched errors.
    /// Gates logging only, never behavior.
    pub verbose: bool,
    /// Reserved: advisory cap on duplicate sends per minute. Validated but
    /// not consulted by the dedup path.
    sampling_rate: u32,
    /// Dedup window and sweep period, in milliseconds. Strictly positive.
    max_age_ms: u64,
    /// Host environment. Browser-only enrichment is attempted only for
    /// [`Environment::Web`].
    pub environment: Environment,
    /// Attach a parsed user-agent breakdown as extra tags (web only).
    pub include_opinionated_tags: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            sampling_rate: DEFAULT_SAMPLING_RATE,
            max_age_ms: DEFAULT_MAX_AGE_MS,
            environment: Environment::default(),
            include_opinionated_tags: false,
        }
    }
}

impl ClientConfig {
    /// Dedup window in milliseconds.
    pub fn max_age_ms(&self) -> u64 {
        self.max_age_ms
    }

    /// Set the dedup window. Rejects zero.
    pub fn set_max_age_ms(&mut self, max_age_ms: u64) -> Result<(), ConfigError> {
        if max_age_ms == 0 {
            return Err(ConfigError::NotPositive {
                field: "max_age_ms",
                value: max_age_ms,
            });
        }
        self.max_age_ms = max_age_ms;
        Ok(())
    }

    /// Reserved sampling rate.
    pub fn sampling_rate(&self) -> u32 {
        self.sampling_rate
    }

    /// Set the reserved sampling rate. Rejects zero.
    pub fn set_sampling_rate(&mut self, sampling_rate: u32) -> Result<(), ConfigError> {
        if sampling_rate == 0 {
            return Err(ConfigError::NotPositive {
                field: "sampling_rate",
                value: sampling_rate as u64,
            });
        }
        self.sampling_rate = sampling_rate;
        Ok(())
    }

    /// Check every field against its validity rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_age_ms == 0 {
            return Err(ConfigError::NotPositive {
                field: "max_age_ms",
                value: 0,
            });
        }
        if self.sampling_rate == 0 {
            return Err(ConfigError::NotPositive {
                field: "sampling_rate",
                value: 0,
            });
        }
        Ok(())
    }

    /// Merge a partial override, field by field, through the validated
    /// setters.
    ///
    /// Partial-application semantics: fields are applied in declaration
    /// order and the first invalid field aborts with its error; fields
    /// applied before the failure stay applied.
    pub fn apply_override(&mut self, overrides: &ConfigOverride) -> Result<(), ConfigError> {
        if let Some(verbose) = overrides.verbose {
            self.verbose = verbose;
        }
        if let Some(sampling_rate) = overrides.sampling_rate {
            self.set_sampling_rate(sampling_rate)?;
        }
        if let Some(max_age_ms) = overrides.max_age_ms {
            self.set_max_age_ms(max_age_ms)?;
        }
        if let Some(environment) = overrides.environment {
            self.environment = environment;
        }
        if let Some(include) = overrides.include_opinionated_tags {
            self.include_opinionated_tags = include;
        }
        Ok(())
    }
}

/// Partial configuration for [`ClientConfig::apply_override`].
///
/// Every field is optional; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverride {
    pub verbose: Option<bool>,
    pub sampling_rate: Option<u32>,
    pub max_age_ms: Option<u64>,
    pub environment: Option<Environment>,
    pub include_opinionated_tags: Option<bool>,
}

impl ConfigOverride {
    /// Whether the override carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.verbose.is_none()
            && self.sampling_rate.is_none()
            && self.max_age_ms.is_none()
            && self.environment.is_none()
            && self.include_opinionated_tags.is_none()
    }
}
