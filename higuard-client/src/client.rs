//! `DashboardClient` — per-error orchestration: duplicate check, enrichment,
//! dispatch, outcome classification.

use std::fmt;
use std::sync::{Arc, Mutex, RwLock};

use chrono::{DateTime, Utc};

use higuard_core::constants::{LINE_NOT_FOUND, PATH_NOT_FOUND, STACK_NOT_FOUND};
use higuard_core::errors::ConfigError;
use higuard_core::{ClientConfig, ConfigOverride, Environment, ErrorEvent, HiguardResult, Tag};
use higuard_enrich::{opinionated_tags, parse_first_frame, parse_user_agent};
use higuard_tracker::{DuplicateTracker, Occurrence};
use higuard_transport::{
    Credentials, Dispatch, ErrorRequest, HttpTransport, TagPayload, Transport,
};

use crate::sweeper::PruneSweeper;

/// How one `send_error` call concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendStatus {
    /// Dispatched and acknowledged with a success status.
    Delivered,
    /// Suppressed as a duplicate inside the dedup window; no network call.
    Suppressed,
    /// Dispatched but rejected (non-2xx) or the network call failed.
    Failed,
}

/// Outcome of one `send_error` call.
///
/// `is_error`/`is_success` mirror the transport classification for caller
/// convenience; `status` keeps a suppressed duplicate distinguishable from a
/// genuine transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendOutcome {
    pub status: SendStatus,
    pub is_error: bool,
    pub is_success: bool,
}

impl SendOutcome {
    fn suppressed() -> Self {
        Self {
            status: SendStatus::Suppressed,
            is_error: true,
            is_success: false,
        }
    }

    fn from_dispatch(dispatch: Dispatch) -> Self {
        let status = if dispatch.is_success {
            SendStatus::Delivered
        } else {
            SendStatus::Failed
        };
        Self {
            status,
            is_error: dispatch.is_error,
            is_success: dispatch.is_success,
        }
    }

    /// Whether the event was suppressed rather than dispatched.
    pub fn is_suppressed(&self) -> bool {
        self.status == SendStatus::Suppressed
    }
}

/// One dashboard client: owns its configuration, its duplicate tracker, and
/// the transport. Nothing else reads or mutates the tracker.
///
/// Dropping the client stops the background sweep.
pub struct DashboardClient {
    config: RwLock<ClientConfig>,
    tracker: Arc<DuplicateTracker>,
    transport: Box<dyn Transport>,
    sweeper: Mutex<Option<PruneSweeper>>,
}

impl DashboardClient {
    /// Create a client with the default configuration.
    pub fn new(credentials: Credentials, base_url: impl Into<String>) -> HiguardResult<Self> {
        Self::with_config(credentials, base_url, ClientConfig::default())
    }

    /// Create a client with an explicit configuration.
    pub fn with_config(
        credentials: Credentials,
        base_url: impl Into<String>,
        config: ClientConfig,
    ) -> HiguardResult<Self> {
        config.validate()?;
        let transport = HttpTransport::new(base_url, credentials)?;
        Ok(Self::assemble(Box::new(transport), config))
    }

    /// Create a client over a custom [`Transport`] (alternate backends,
    /// tests).
    pub fn with_transport(
        transport: Box<dyn Transport>,
        config: ClientConfig,
    ) -> HiguardResult<Self> {
        config.validate()?;
        Ok(Self::assemble(transport, config))
    }

    fn assemble(transport: Box<dyn Transport>, config: ClientConfig) -> Self {
        let tracker = Arc::new(DuplicateTracker::new(config.max_age_ms()));
        let sweeper = PruneSweeper::start(Arc::clone(&tracker), config.max_age_ms());
        Self {
            config: RwLock::new(config),
            tracker,
            transport,
            sweeper: Mutex::new(Some(sweeper)),
        }
    }

    /// Report an error, deduplicated at the current wall clock.
    ///
    /// Never fails: a transport problem comes back as a classified outcome,
    /// and a duplicate comes back as [`SendStatus::Suppressed`].
    pub fn send_error(&self, event: ErrorEvent) -> SendOutcome {
        self.send_error_at(event, Utc::now())
    }

    /// Report an error with an explicit timestamp.
    ///
    /// The clock is a parameter so deterministic callers can drive the dedup
    /// window themselves.
    pub fn send_error_at(&self, event: ErrorEvent, now: DateTime<Utc>) -> SendOutcome {
        let now_ms = now.timestamp_millis();
        let config = self
            .config
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();

        // Atomic check-then-record: a fresh occurrence is recorded at
        // decision time, so a failed send still counts as "this error just
        // happened" and concurrent first occurrences cannot double-send.
        match self.tracker.observe(&event.message, now_ms) {
            Occurrence::Duplicate => {
                if config.verbose {
                    tracing::debug!(message = %event.message, "higuard: duplicate suppressed");
                }
                SendOutcome::suppressed()
            }
            Occurrence::Fresh => {
                let request = build_request(event, &config);
                let dispatch = self.transport.post_error(&request);
                if config.verbose {
                    if dispatch.is_success {
                        tracing::info!(message = %request.message, "higuard: error delivered");
                    } else {
                        tracing::warn!(message = %request.message, "higuard: dispatch failed");
                    }
                }
                SendOutcome::from_dispatch(dispatch)
            }
        }
    }

    /// Merge a partial override through the validated setters.
    ///
    /// Fields are applied one at a time; the first invalid field aborts with
    /// its error and fields applied before it stay applied. A `max_age_ms`
    /// change also retunes the tracker window and restarts the sweeper on
    /// the new period.
    pub fn override_configs(&self, overrides: &ConfigOverride) -> Result<(), ConfigError> {
        let mut config = self
            .config
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous_max_age = config.max_age_ms();
        let result = config.apply_override(overrides);
        let new_max_age = config.max_age_ms();
        drop(config);

        if new_max_age != previous_max_age {
            self.tracker.set_max_age_ms(new_max_age);
            self.restart_sweeper(new_max_age);
        }
        result
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> ClientConfig {
        self.config
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of distinct messages currently tracked (diagnostics).
    pub fn tracked_messages(&self) -> usize {
        self.tracker.tracked_messages()
    }

    /// Stop the background sweep and join its thread. Idempotent; also runs
    /// on drop. Explicit shutdown is for hosts that want to release the
    /// recurring task at a controlled point.
    pub fn shutdown(&self) {
        let mut slot = self
            .sweeper
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(mut sweeper) = slot.take() {
            sweeper.stop();
        }
    }

    fn restart_sweeper(&self, period_ms: u64) {
        let mut slot = self
            .sweeper
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(sweeper) = slot.as_mut() {
            sweeper.stop();
        }
        *slot = Some(PruneSweeper::start(Arc::clone(&self.tracker), period_ms));
    }
}

impl Drop for DashboardClient {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl fmt::Debug for DashboardClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardClient")
            .field("config", &self.config)
            .field("tracked_messages", &self.tracker.tracked_messages())
            .finish_non_exhaustive()
    }
}

/// Build the wire payload for one fresh error.
fn build_request(event: ErrorEvent, config: &ClientConfig) -> ErrorRequest {
    let stack_trace = event
        .stack_trace
        .unwrap_or_else(|| STACK_NOT_FOUND.to_string());
    let (path, line) = match parse_first_frame(&stack_trace) {
        Some(frame) => (frame.path, frame.line),
        None => (PATH_NOT_FOUND.to_string(), LINE_NOT_FOUND),
    };

    let mut tags: Vec<TagPayload> = event.tags.iter().map(TagPayload::from).collect();
    if let Some(user_agent) = event.user_agent.as_deref() {
        tags.push(TagPayload::from(&Tag::new("userAgent", user_agent)));
        if config.environment == Environment::Web && config.include_opinionated_tags {
            let info = parse_user_agent(user_agent);
            tags.extend(opinionated_tags(&info).iter().map(TagPayload::from));
        }
    }

    ErrorRequest {
        message: event.message,
        stack_trace: Some(stack_trace),
        path: Some(path),
        line,
        user_affected: event.user_affected,
        tags,
    }
}
