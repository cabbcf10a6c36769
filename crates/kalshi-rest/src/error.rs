//! Error types for REST API operations

use kalshi_auth::AuthError;

/// Errors that can occur during REST API operations
///
/// Every variant is returned to the caller as-is; the client never retries.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Key loading or request signing failed
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The exchange answered with a non-2xx status
    #[error("HTTP error {status}: {reason}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Reason phrase for the status
        reason: String,
    },

    /// Network-level failure (connection refused/reset, DNS, TLS)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Successful response body was not valid JSON
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl RestError {
    /// Map a reqwest failure, separating timeouts from other transport errors
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err)
        }
    }

    /// HTTP status of the response, if the exchange answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error happened below HTTP (no response was received)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout)
    }

    /// Check if repeating the same call can never succeed
    ///
    /// Signing and key failures need a corrected credential, and a body
    /// that fails to encode will fail the same way again.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Auth(_) | Self::Encode(_))
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
