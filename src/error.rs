//! Error types for separator configuration

use thiserror::Error;

/// The error type for building a separator configuration
///
/// Path and nesting operations themselves never fail; every error here is
/// raised while resolving [`Separators`](crate::Separators).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Directory separator is neither `/` nor `\`
    #[error("Invalid directory separator: {separator:?} - expected '/' or '\\'")]
    InvalidDirectorySeparator { separator: char },

    /// Two separator roles were given the same character
    #[error("Separators for {first} and {second} are both {separator:?}")]
    ConflictingSeparators {
        first: &'static str,
        second: &'static str,
        separator: char,
    },

    /// Character cannot serve the given role
    #[error("Reserved character {separator:?} cannot be used as {role}")]
    ReservedSeparator { role: &'static str, separator: char },

    /// Environment override is not a single character
    #[error("Invalid value for {variable}: {value:?} - expected exactly one character")]
    InvalidValue { variable: String, value: String },

    /// Process-wide configuration was already resolved
    #[error("Process-wide separators are already initialized")]
    AlreadyInitialized,
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
