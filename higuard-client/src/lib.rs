//! # higuard-client
//!
//! The Higuard dashboard client: per-error orchestration (duplicate check →
//! enrichment → dispatch → outcome), a periodic tracker sweep with an
//! explicit lifecycle, and an optional process-global accessor.
//!
//! # Examples
//!
//! ```no_run
//! use higuard_client::{Credentials, DashboardClient, ErrorEvent, Tag};
//!
//! # fn main() -> higuard_core::HiguardResult<()> {
//! let client = DashboardClient::new(
//!     Credentials::new("my-client-id", "my-client-secret"),
//!     "https://dashboard.example.com/api/v1",
//! )?;
//!
//! let outcome = client.send_error(
//!     ErrorEvent::new("Payment gateway timeout")
//!         .with_user_affected("user-42")
//!         .with_tag(Tag::new("statusCode", "504")),
//! );
//! assert!(outcome.is_success || outcome.is_error);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod global;
pub mod logging;
pub mod sweeper;

pub use client::{DashboardClient, SendOutcome, SendStatus};
pub use sweeper::PruneSweeper;

// Re-exports so hosts only need this crate in the common case.
pub use higuard_core::{ClientConfig, ConfigOverride, Environment, ErrorEvent, Tag};
pub use higuard_transport::Credentials;
