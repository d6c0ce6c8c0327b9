//! # higuard-core
//!
//! Foundation crate for the Higuard error-reporting SDK.
//! Defines the event model, configuration, errors, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod event;

// Re-export the most commonly used types at the crate root.
pub use config::{ClientConfig, ConfigOverride, Environment};
pub use errors::{HiguardError, HiguardResult};
pub use event::{ErrorEvent, Tag};
