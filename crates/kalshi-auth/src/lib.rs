//! Credentials and request signing for the Kalshi trade API
//!
//! Every authenticated request carries three headers derived from an
//! RSA-PSS signature over `timestamp + METHOD + /trade-api/v2 + path`.
//! This crate owns the key material and produces those headers.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use kalshi_auth::{Credential, RequestSigner};
//! use kalshi_types::{Method, SystemClock};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credential = Credential::from_pem_file("my-key-id", "kalshi.pem")?;
//!     let signer = RequestSigner::new(Arc::new(credential), Arc::new(SystemClock::new()));
//!
//!     let headers = signer.sign(Method::Get, "/portfolio/balance")?;
//!     println!("{} signed at {}", headers.key_id, headers.timestamp);
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::Credential;
pub use error::{AuthError, AuthResult};
pub use signer::{
    canonical_message, RequestSigner, SignedHeaders, ACCESS_KEY_HEADER, ACCESS_SIGNATURE_HEADER,
    ACCESS_TIMESTAMP_HEADER, API_PATH_PREFIX,
};
