//! Error types for the devdash application.
//!
//! A single shared error enum covers transport, storage, and configuration
//! failures across all crates, with automatic conversion from common error
//! types via the `From` trait.

use thiserror::Error;

/// A shared error type for the entire devdash application.
#[derive(Error, Debug, Clone)]
pub enum DevdashError {
    /// The remote API answered with a non-2xx status.
    /// `message` carries the server-supplied error text when available.
    #[error("Request failed ({status}): {message}")]
    Transport { status: u16, message: String },

    /// The request never completed (connection refused, timeout, DNS).
    #[error("Network error: {0}")]
    Network(String),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DevdashError {
    /// Creates a Transport error from a status code and server message.
    pub fn transport(status: u16, message: impl Into<String>) -> Self {
        Self::Transport {
            status,
            message: message.into(),
        }
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the text to show the user for this failure.
    ///
    /// The server's own message is shown verbatim for transport failures;
    /// every other failure falls back to the caller-supplied generic text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Transport { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<std::io::Error> for DevdashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for DevdashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for DevdashError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for DevdashError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, DevdashError>`.
pub type Result<T> = std::result::Result<T, DevdashError>;
