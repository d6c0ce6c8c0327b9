//! Lifecycle of the optional process-global accessor. Sequenced inside one
//! test because the `OnceLock` persists for the whole test binary.

use higuard_client::{global, ConfigOverride, Credentials, ErrorEvent};
use higuard_core::errors::ClientError;
use higuard_core::HiguardError;

#[test]
fn global_accessor_lifecycle() {
    // Before initialize: misuse, reported synchronously.
    assert_eq!(global::client().unwrap_err(), ClientError::NotInitialized);
    assert!(matches!(
        global::send_error(ErrorEvent::new("Foo")),
        Err(HiguardError::Client(ClientError::NotInitialized))
    ));

    // Port 9 (discard) refuses connections, so sends fail fast and no test
    // traffic leaves the machine.
    global::initialize(
        Credentials::new("client-id", "client-secret"),
        "http://127.0.0.1:9",
        None,
    )
    .unwrap();

    // Second initialize is rejected.
    assert!(matches!(
        global::initialize(
            Credentials::new("client-id", "client-secret"),
            "http://127.0.0.1:9",
            None,
        ),
        Err(HiguardError::Client(ClientError::AlreadyInitialized))
    ));

    // The accessor now resolves, and overrides flow through it.
    let client = global::client().unwrap();
    global::override_configs(&ConfigOverride {
        verbose: Some(true),
        ..ConfigOverride::default()
    })
    .unwrap();
    assert!(client.config().verbose);

    // A send through the global client classifies the refused connection as
    // a transport failure instead of faulting.
    let outcome = global::send_error(ErrorEvent::new("Foo")).unwrap();
    assert!(outcome.is_error);
    assert!(!outcome.is_success);
}
