//! Common test utilities and fixtures for integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use kalshi_rest::{
    ClientConfig, Clock, Credential, ExchangeClient, HttpTransport, ManualClock, RawResponse,
    RestResult, TransportRequest,
};
use parking_lot::Mutex;
use rsa::pss::Signature;
use rsa::signature::Verifier;

/// Unencrypted 2048-bit RSA key in PKCS#8 PEM
pub const RSA_PKCS8: &str = include_str!("../../../../testdata/rsa_pkcs8.pem");

/// Wall clock reading of every [`ManualClock`] at monotonic zero
pub const EPOCH_MS: u64 = 1_700_000_000_000;

pub const KEY_ID: &str = "test-key-id";

pub fn credential() -> Arc<Credential> {
    Arc::new(Credential::from_pem(KEY_ID, RSA_PKCS8).expect("fixture key loads"))
}

/// Check a request's signature against the message it should cover
pub fn signature_verifies(credential: &Credential, message: &str, signature_b64: &str) -> bool {
    let bytes = BASE64.decode(signature_b64).expect("signature is base64");
    let signature = Signature::try_from(bytes.as_slice()).expect("signature has key length");
    credential
        .verifying_key()
        .verify(message.as_bytes(), &signature)
        .is_ok()
}

/// A request as seen by [`RecordingTransport`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub request: TransportRequest,
    /// Monotonic clock reading at dispatch
    pub dispatched_at: Duration,
}

impl RecordedRequest {
    /// URL with the test host stripped
    pub fn path(&self) -> &str {
        self.request
            .url
            .strip_prefix(TEST_HOST)
            .expect("request went to the test host")
    }

    pub fn body_json(&self) -> serde_json::Value {
        let body = self.request.body.as_ref().expect("request has a body");
        serde_json::from_slice(body).expect("body is JSON")
    }
}

pub const TEST_HOST: &str = "https://kalshi.test/trade-api/v2";

/// Transport that records requests and replays queued responses
///
/// Without queued responses every request gets `200 {}`.
pub struct RecordingTransport {
    clock: Arc<ManualClock>,
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<RestResult<RawResponse>>>,
}

impl RecordingTransport {
    pub fn new(clock: Arc<ManualClock>) -> Self {
        Self {
            clock,
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        }
    }

    pub fn push_response(&self, response: RestResult<RawResponse>) {
        self.responses.lock().push_back(response);
    }

    pub fn push_json(&self, status: u16, reason: &str, body: &str) {
        self.push_response(Ok(RawResponse {
            status,
            reason: Some(reason.to_string()),
            body: body.as_bytes().to_vec(),
        }));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    pub fn last(&self) -> RecordedRequest {
        self.requests
            .lock()
            .last()
            .cloned()
            .expect("at least one request was sent")
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: TransportRequest) -> RestResult<RawResponse> {
        self.requests.lock().push(RecordedRequest {
            request,
            dispatched_at: self.clock.now(),
        });

        self.responses.lock().pop_front().unwrap_or_else(|| {
            Ok(RawResponse {
                status: 200,
                reason: Some("OK".to_string()),
                body: b"{}".to_vec(),
            })
        })
    }
}

/// Client wired to a [`RecordingTransport`] and a [`ManualClock`]
pub struct Harness {
    pub clock: Arc<ManualClock>,
    pub transport: Arc<RecordingTransport>,
    pub credential: Arc<Credential>,
    pub client: ExchangeClient,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_min_interval(Duration::from_millis(100))
    }

    pub fn with_min_interval(min_interval: Duration) -> Self {
        let clock = Arc::new(ManualClock::new(EPOCH_MS));
        let transport = Arc::new(RecordingTransport::new(clock.clone()));
        let credential = credential();
        let config = ClientConfig::new()
            .with_host(TEST_HOST)
            .with_min_interval(min_interval);

        let client = ExchangeClient::from_parts(
            credential.clone(),
            config,
            transport.clone(),
            clock.clone(),
        );

        Self {
            clock,
            transport,
            credential,
            client,
        }
    }
}
