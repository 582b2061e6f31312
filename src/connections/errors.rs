use std::fmt::{self, Display};

/// A central error enum for client-related errors.
#[derive(Debug)]
pub enum ClientError {
    /// Construction-time validation failure; the message names the field.
    ConfigError(String),
    /// The project client could not be built; carries the cause's description.
    ConnectionError(String),
    /// The credential capability failed to produce a token.
    CredentialError(String),
    /// A handle was requested before a successful `connect()`.
    NotConnected,
}

/// Convert from std::io::Error.
/// Without this, `?` won't work when loading a stored profile.
impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> ClientError {
        ClientError::ConfigError(err.to_string())
    }
}

impl Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ClientError::ConnectionError(msg) => {
                write!(f, "Failed to connect to AI Foundry: {}", msg)
            }
            ClientError::CredentialError(msg) => write!(f, "Credential error: {}", msg),
            ClientError::NotConnected => {
                write!(f, "Not connected to AI Foundry. Call connect() first.")
            }
        }
    }
}

impl std::error::Error for ClientError {}
