/// Client lifecycle misuse errors.
///
/// These indicate a programming error in the host application, not a runtime
/// condition, so they surface synchronously.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("global client not initialized: call initialize() first")]
    NotInitialized,

    #[error("global client already initialized")]
    AlreadyInitialized,
}
