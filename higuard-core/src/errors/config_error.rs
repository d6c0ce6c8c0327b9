/// Configuration validation errors.
///
/// A rejected mutation leaves the prior value intact.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be strictly positive, got {value}")]
    NotPositive { field: &'static str, value: u64 },
}
