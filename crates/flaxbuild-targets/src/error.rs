//! Error types for target enumeration parsing.

/// Errors that can occur while parsing target identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetError {
    /// Unrecognized platform name.
    #[error("unknown target platform '{name}' (expected one of: {expected})")]
    UnknownPlatform {
        /// The name that failed to parse.
        name: String,
        /// Comma separated list of accepted names.
        expected: String,
    },

    /// Unrecognized architecture name.
    #[error("unknown target architecture '{name}' (expected one of: {expected})")]
    UnknownArchitecture {
        /// The name that failed to parse.
        name: String,
        /// Comma separated list of accepted names.
        expected: String,
    },

    /// Unrecognized configuration name.
    #[error("unknown target configuration '{name}' (expected one of: {expected})")]
    UnknownConfiguration {
        /// The name that failed to parse.
        name: String,
        /// Comma separated list of accepted names.
        expected: String,
    },
}

/// Result type for target operations.
pub type Result<T> = std::result::Result<T, TargetError>;
