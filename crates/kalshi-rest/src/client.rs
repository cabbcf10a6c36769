//! Main REST client implementation

use std::sync::Arc;
use std::time::Duration;

use kalshi_auth::{Credential, RequestSigner};
use kalshi_types::{Clock, Method, RateLimiter, SystemClock, DEFAULT_MIN_INTERVAL};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{RestError, RestResult};
use crate::response::classify;
use crate::transport::{HttpTransport, ReqwestTransport, TransportRequest};

/// Production trade API host, including the `/trade-api/v2` prefix
pub const KALSHI_PROD_URL: &str = "https://api.elections.kalshi.com/trade-api/v2";

/// Demo trade API host, including the `/trade-api/v2` prefix
pub const KALSHI_DEMO_URL: &str = "https://demo-api.kalshi.co/trade-api/v2";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_USER_AGENT: &str = concat!("kalshi-rest/", env!("CARGO_PKG_VERSION"));

/// Kalshi trade API client
///
/// Every call is rate limited, signed, sent, and classified; see the
/// endpoint methods for the operation catalog. The client is `Send + Sync`
/// and can be shared across tasks behind an `Arc`; the rate limit then
/// applies across all of them.
///
/// # Example
///
/// ```no_run
/// use kalshi_auth::Credential;
/// use kalshi_rest::{ClientConfig, ExchangeClient};
/// use kalshi_rest::types::MarketsParams;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credential = Credential::from_pem_file("my-key-id", "kalshi.pem")?;
///     let client = ExchangeClient::with_config(credential, ClientConfig::demo())?;
///
///     let status = client.get_exchange_status().await?;
///     let markets = client
///         .get_markets(&MarketsParams {
///             limit: Some(5),
///             ..Default::default()
///         })
///         .await?;
///
///     println!("{} / {}", status, markets);
///     Ok(())
/// }
/// ```
pub struct ExchangeClient {
    config: ClientConfig,
    signer: RequestSigner,
    limiter: RateLimiter,
    transport: Arc<dyn HttpTransport>,
}

impl ExchangeClient {
    /// Create a client for the production API
    pub fn new(credential: impl Into<Arc<Credential>>) -> RestResult<Self> {
        Self::with_config(credential, ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(
        credential: impl Into<Arc<Credential>>,
        config: ClientConfig,
    ) -> RestResult<Self> {
        let transport = ReqwestTransport::with_user_agent(
            config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT),
        )?;

        Ok(Self::from_parts(
            credential,
            config,
            Arc::new(transport),
            Arc::new(SystemClock::new()),
        ))
    }

    /// Assemble a client from explicit parts
    ///
    /// The clock drives both the rate limiter and the signing timestamp.
    pub fn from_parts(
        credential: impl Into<Arc<Credential>>,
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let credential = credential.into();
        let limiter = RateLimiter::new(clock.clone(), config.min_interval);
        let signer = RequestSigner::new(credential, clock);

        info!(host = %config.host, key_id = signer.key_id(), "Created Kalshi REST client");

        Self {
            config,
            signer,
            limiter,
            transport,
        }
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// API key id requests are signed with
    pub fn key_id(&self) -> &str {
        self.signer.key_id()
    }

    /// Rate limiter shared by every call on this client
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Make an authenticated GET request
    pub(crate) async fn get(&self, path: &str) -> RestResult<Value> {
        self.send(Method::Get, path, None).await
    }

    /// Make an authenticated POST request with an optional JSON body
    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> RestResult<Value> {
        let body = body.map(encode_body).transpose()?;
        self.send(Method::Post, path, body).await
    }

    /// Make an authenticated DELETE request with an optional JSON body
    pub(crate) async fn delete<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> RestResult<Value> {
        let body = body.map(encode_body).transpose()?;
        self.send(Method::Delete, path, body).await
    }

    /// Rate limit, sign, send, classify
    async fn send(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> RestResult<Value> {
        self.limiter.acquire().await;

        let signed = self.signer.sign(method, path)?;
        let request = TransportRequest {
            method,
            url: format!("{}{}", self.config.host, path),
            signed,
            body,
            timeout: Some(self.config.timeout),
        };

        debug!(%method, path, "Making authenticated request");

        let response = self.transport.send(request).await?;
        classify(response)
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> RestResult<Vec<u8>> {
    serde_json::to_vec(body).map_err(RestError::Encode)
}

impl std::fmt::Debug for ExchangeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeClient")
            .field("host", &self.config.host)
            .field("key_id", &self.key_id())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API host including the `/trade-api/v2` prefix
    pub host: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Minimum spacing between two requests
    pub min_interval: Duration,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: KALSHI_PROD_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            min_interval: DEFAULT_MIN_INTERVAL,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration pointing at the demo environment
    pub fn demo() -> Self {
        Self::default().with_host(KALSHI_DEMO_URL)
    }

    /// Set host
    ///
    /// The host must end with the `/trade-api/v2` prefix, since that
    /// prefix is always part of the signed message.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into().trim_end_matches('/').to_string();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set minimum interval between requests
    pub fn with_min_interval(mut self, min_interval: Duration) -> Self {
        self.min_interval = min_interval;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
