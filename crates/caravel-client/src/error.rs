//! Error types for platform client operations.

use std::io;
use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Primary error type for platform client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Caller supplied an argument that failed validation.
    #[error("{message}")]
    InvalidArgument {
        /// Human-readable description of the rejected argument.
        message: String,
    },
    /// The requested resource does not exist on the platform.
    #[error("{kind} not found with id: {id}")]
    NotFound {
        /// Resource kind (catalog, user, role, lock).
        kind: &'static str,
        /// Path-like resource id that was requested.
        id: String,
    },
    /// Connection profile could not be assembled.
    #[error("{message}")]
    Config {
        /// Description of the missing or malformed setting.
        message: String,
    },
    /// Login was rejected by the platform.
    #[error("login failed with status {status}")]
    LoginFailed {
        /// HTTP status returned by the login endpoint.
        status: StatusCode,
    },
    /// Login succeeded but the response carried no session location header.
    #[error("login response did not include a session location header")]
    MissingSessionLocation,
    /// The HTTP request could not be sent or its body could not be read.
    #[error("request to {operation} failed")]
    Transport {
        /// Request path or operation identifier.
        operation: String,
        /// Source transport error.
        source: reqwest::Error,
    },
    /// The platform answered with an unexpected status code.
    #[error("request to {operation} failed with status {status}")]
    UnexpectedStatus {
        /// Request path or operation identifier.
        operation: String,
        /// HTTP status returned by the platform.
        status: StatusCode,
        /// Response body text when available.
        body: String,
    },
    /// Internal locks did not clear within the allowed time.
    #[error("timed out waiting for internal locks to clear")]
    LockTimeout {
        /// Total time spent polling the lock endpoint.
        waited: Duration,
    },
    /// A list query expression could not be parsed.
    #[error("invalid query expression: {message}")]
    Query {
        /// Parser diagnostic for the rejected expression.
        message: String,
    },
    /// File system operation failed.
    #[error("failed to {operation}")]
    Io {
        /// Operation identifier.
        operation: String,
        /// Source IO error.
        source: io::Error,
    },
}

impl ClientError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Convenience alias for platform client results.
pub type ClientResult<T> = Result<T, ClientError>;
