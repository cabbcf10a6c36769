//! HTTP transport boundary
//!
//! The transport performs the network call and hands back the raw status
//! and body. It does not retry and does not interpret status codes.

use std::time::Duration;

use async_trait::async_trait;
use kalshi_auth::SignedHeaders;
use kalshi_types::Method;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::error::{RestError, RestResult};

/// A fully signed request ready to be sent
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including any query string
    pub url: String,
    /// Authentication headers for this request
    pub signed: SignedHeaders,
    /// JSON body, if any
    pub body: Option<Vec<u8>>,
    /// Deadline for the whole request
    pub timeout: Option<Duration>,
}

/// Status line and body of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Reason phrase, when the transport knows one
    pub reason: Option<String>,
    /// Raw body bytes
    pub body: Vec<u8>,
}

/// Network boundary used by [`ExchangeClient`](crate::ExchangeClient)
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request and return whatever the server answered
    ///
    /// Only failures below HTTP (timeouts, connection errors) are errors here.
    async fn send(&self, request: TransportRequest) -> RestResult<RawResponse>;
}

/// [`HttpTransport`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Wrap an existing reqwest client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a reqwest client with the given user agent
    pub fn with_user_agent(user_agent: &str) -> RestResult<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(RestError::Transport)?;
        Ok(Self::new(client))
    }
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> RestResult<RawResponse> {
        let mut builder = self
            .client
            .request(http_method(request.method), &request.url)
            .header(CONTENT_TYPE, "application/json");

        for (name, value) in request.signed.iter() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(RestError::from_transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(RestError::from_transport)?;

        Ok(RawResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_owned),
            body: body.to_vec(),
        })
    }
}
