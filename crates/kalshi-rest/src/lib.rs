//! REST API client for the Kalshi trade API v2
//!
//! This crate provides an authenticated client for Kalshi's exchange,
//! market, and portfolio endpoints.
//!
//! # Request pipeline
//!
//! Every call goes through the same steps:
//!
//! 1. Build the path and query string ([`QueryBuilder`])
//! 2. Wait for the client-side rate limiter (default: 100 ms between requests)
//! 3. Sign `timestamp + METHOD + /trade-api/v2 + path` with RSA-PSS
//! 4. Send through an [`HttpTransport`] (reqwest by default)
//! 5. Classify the response: 2xx bodies are returned as JSON, anything
//!    else becomes [`RestError::Http`]
//!
//! The client never retries. Retry policy belongs to the caller, who gets
//! the status, reason, or failure kind on [`RestError`].
//!
//! # Example
//!
//! ```no_run
//! use kalshi_auth::Credential;
//! use kalshi_rest::ExchangeClient;
//! use kalshi_rest::types::{Action, CreateOrderRequest, Side};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credential = Credential::from_pem_file("my-key-id", "kalshi.pem")?;
//!     let client = ExchangeClient::new(credential)?;
//!
//!     let balance = client.get_balance().await?;
//!     println!("Balance: {}", balance);
//!
//!     let order = CreateOrderRequest::limit("KXBTC-TEST", "my-order-1", Side::Yes, Action::Buy, 10, 45);
//!     let created = client.create_order(&order).await?;
//!     println!("Created: {}", created);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod query;
pub mod response;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, ExchangeClient, KALSHI_DEMO_URL, KALSHI_PROD_URL};
pub use error::{RestError, RestResult};
pub use query::QueryBuilder;
pub use response::classify;
pub use transport::{HttpTransport, RawResponse, ReqwestTransport, TransportRequest};

pub use kalshi_auth::{AuthError, Credential, SignedHeaders};
pub use kalshi_types::{Clock, ManualClock, Method, RateLimiter, SystemClock};
