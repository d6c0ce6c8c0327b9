/// Higuard SDK version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sentinel stack trace sent when an error carries none.
pub const STACK_NOT_FOUND: &str = "Error stack not found";

/// Sentinel path sent when no frame could be extracted from a stack trace.
pub const PATH_NOT_FOUND: &str = "Error path not found";

/// Sentinel line number paired with [`PATH_NOT_FOUND`].
pub const LINE_NOT_FOUND: u32 = 0;

/// Path component of the dashboard's error-ingest endpoint.
pub const ERRORS_ENDPOINT: &str = "/errors";

/// Query parameter carrying the client identifier.
pub const CLIENT_ID_PARAM: &str = "client_id";
