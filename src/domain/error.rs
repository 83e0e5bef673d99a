//! Error types for Lisk Service requests.
//!
//! Every failure a request can hit ends up in [`ServiceError`]. The reporting
//! layer treats them all as "request failed" and only uses the display
//! message; library callers can still match on the variant.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for Lisk Service client operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Transport-level failure (DNS, connect, TLS, timeout, body read).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("Request failed with status code {status}")]
    Status {
        /// HTTP status code returned by the service.
        status: u16,
        /// Raw response body, kept for debug logging.
        body: String,
    },

    /// The response body could not be decoded as JSON.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),

    /// A configuration value was present but unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ServiceError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new status error from a code and the response body.
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Create a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// HTTP status code, when the failure came from the service itself.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result alias for Lisk Service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

// ============================================================================
// Tests
// ============================================================================
