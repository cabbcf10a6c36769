//! Error types for authentication operations

/// Errors that can occur while loading keys or signing requests
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Key material is missing, malformed, or not an RSA key usable for PSS
    #[error("Failed to load private key: {0}")]
    KeyLoad(String),

    /// The signing primitive rejected the operation
    #[error("RSA-PSS signing failed: {0}")]
    Signing(#[source] rsa::signature::Error),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
