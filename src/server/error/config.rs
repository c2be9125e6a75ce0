use thiserror::Error;

/// Malformed environment configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the offending variable.
        var: String,
        /// Why the value was rejected.
        reason: String,
    },
}
