//! Per-request header signing
//!
//! Kalshi signature algorithm:
//! 1. Take the wall-clock time in milliseconds at signing time
//! 2. Strip the query string from the request path
//! 3. message = timestamp + METHOD + "/trade-api/v2" + path
//! 4. RSA-PSS sign with SHA-256, MGF1(SHA-256), salt length 32
//! 5. Base64 encode the signature

use std::fmt;
use std::sync::Arc;

use kalshi_types::{Clock, Method};
use tracing::trace;

use crate::credentials::Credential;
use crate::error::AuthResult;

/// Path prefix signed into every canonical message
pub const API_PATH_PREFIX: &str = "/trade-api/v2";

/// Header carrying the API key id
pub const ACCESS_KEY_HEADER: &str = "KALSHI-ACCESS-KEY";
/// Header carrying the base64 signature
pub const ACCESS_SIGNATURE_HEADER: &str = "KALSHI-ACCESS-SIGNATURE";
/// Header carrying the signing timestamp in milliseconds
pub const ACCESS_TIMESTAMP_HEADER: &str = "KALSHI-ACCESS-TIMESTAMP";

/// Build the canonical message for a request
///
/// Anything after the first `?` in `path` is ignored.
pub fn canonical_message(timestamp_ms: u64, method: Method, path: &str) -> String {
    let path = path.split_once('?').map_or(path, |(path, _)| path);
    format!("{}{}{}{}", timestamp_ms, method.as_str(), API_PATH_PREFIX, path)
}

/// Authentication headers for a single request
///
/// Regenerated for every call since the timestamp is part of the signed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// API key id
    pub key_id: String,
    /// Base64-encoded RSA-PSS signature
    pub signature: String,
    /// Signing time, milliseconds since the Unix epoch, as a decimal string
    pub timestamp: String,
}

impl SignedHeaders {
    /// Header name/value pairs in the order they are sent
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (ACCESS_KEY_HEADER, self.key_id.as_str()),
            (ACCESS_SIGNATURE_HEADER, self.signature.as_str()),
            (ACCESS_TIMESTAMP_HEADER, self.timestamp.as_str()),
        ]
        .into_iter()
    }
}

/// Signs outbound requests with a shared [`Credential`]
#[derive(Clone)]
pub struct RequestSigner {
    credential: Arc<Credential>,
    clock: Arc<dyn Clock>,
}

impl RequestSigner {
    /// Create a new request signer
    pub fn new(credential: Arc<Credential>, clock: Arc<dyn Clock>) -> Self {
        Self { credential, clock }
    }

    /// Get the API key id
    pub fn key_id(&self) -> &str {
        self.credential.key_id()
    }

    /// Sign a request using the clock's current wall-clock time
    pub fn sign(&self, method: Method, path: &str) -> AuthResult<SignedHeaders> {
        self.sign_at(method, path, self.clock.unix_millis())
    }

    /// Sign a request as of `timestamp_ms`
    pub fn sign_at(&self, method: Method, path: &str, timestamp_ms: u64) -> AuthResult<SignedHeaders> {
        let message = canonical_message(timestamp_ms, method, path);
        trace!(%method, timestamp_ms, "Signing request");

        let signature = self.credential.sign(message.as_bytes())?;

        Ok(SignedHeaders {
            key_id: self.credential.key_id().to_string(),
            signature,
            timestamp: timestamp_ms.to_string(),
        })
    }
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("credential", &self.credential)
            .field("clock", &self.clock)
            .finish()
    }
}
