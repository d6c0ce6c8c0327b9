//! Blocking HTTP dispatch with success/error classification.

use std::time::Duration;

use higuard_core::constants::{CLIENT_ID_PARAM, ERRORS_ENDPOINT};
use higuard_core::errors::TransportError;
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;

use crate::protocol::ErrorRequest;

/// Per-request timeout. The client never waits on anything longer than this.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Credentials identifying one dashboard project.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Appended to the ingest URL as the `client_id` query parameter.
    pub client_id: String,
    /// Sent verbatim in the `Authorization` header.
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

/// Classification of one dispatch attempt.
///
/// Non-2xx statuses and network-level failures both classify as error;
/// [`Transport::post_error`] never propagates a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub is_error: bool,
    pub is_success: bool,
}

impl Dispatch {
    pub fn success() -> Self {
        Self {
            is_error: false,
            is_success: true,
        }
    }

    pub fn error() -> Self {
        Self {
            is_error: true,
            is_success: false,
        }
    }

    /// Classify an HTTP status: any 2xx is success, everything else error.
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_success() {
            Self::success()
        } else {
            Self::error()
        }
    }
}

/// Transport seam consumed by the client.
///
/// Implementations perform exactly one network call per invocation and fold
/// every failure mode into the returned [`Dispatch`].
pub trait Transport: Send + Sync {
    fn post_error(&self, request: &ErrorRequest) -> Dispatch;
}

/// Blocking reqwest transport targeting `{base_url}/errors`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    base_url: String,
    credentials: Credentials,
}

impl HttpTransport {
    /// Create a transport for the given dashboard base URL (e.g.
    /// `https://dashboard.example.com/api/v1`).
    pub fn new(
        base_url: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self, TransportError> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(TransportError::InvalidBaseUrl { url: base_url });
        }
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| TransportError::BuildFailed {
                reason: err.to_string(),
            })?;
        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// Full URL of the error-ingest endpoint, without the query string.
    pub fn errors_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), ERRORS_ENDPOINT)
    }
}

impl Transport for HttpTransport {
    fn post_error(&self, request: &ErrorRequest) -> Dispatch {
        let result = self
            .http
            .post(self.errors_url())
            .query(&[(CLIENT_ID_PARAM, self.credentials.client_id.as_str())])
            .header(AUTHORIZATION, self.credentials.client_secret.as_str())
            .json(request)
            .send();

        match result {
            Ok(response) => {
                let dispatch = Dispatch::from_status(response.status());
                if dispatch.is_error {
                    tracing::warn!(
                        status = %response.status(),
                        message = %request.message,
                        "higuard: dashboard rejected error report"
                    );
                }
                dispatch
            }
            Err(err) => {
                tracing::warn!(message = %request.message, "higuard: dispatch failed: {err}");
                Dispatch::error()
            }
        }
    }
}
