//! Error types for Dealgate

use thiserror::Error;

/// The main error type for Dealgate operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealgateError {
    /// Entity kind string outside the closed set of editable entities.
    #[error("Invalid entity kind '{0}'")]
    InvalidEntityKind(String),

    /// Role string with no canonical spelling or alias.
    #[error("Unknown role '{0}'")]
    UnknownRole(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for Dealgate operations
pub type Result<T> = std::result::Result<T, DealgateError>;
