//! Glide error types

use thiserror::Error;

/// Errors raised while loading or validating carousel configuration
///
/// The pointer event path never fails; only setup-time configuration does.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration values are out of range
    #[error("Invalid carousel configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file is not valid TOML
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Glide operations
pub type Result<T> = std::result::Result<T, Error>;
