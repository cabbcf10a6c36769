//! Exchange and session endpoints

use serde_json::Value;
use tracing::instrument;

use super::EXCHANGE_URL;
use crate::client::ExchangeClient;
use crate::error::RestResult;

impl ExchangeClient {
    /// Get the exchange status (trading active, maintenance, ...)
    #[instrument(skip(self))]
    pub async fn get_exchange_status(&self) -> RestResult<Value> {
        self.get(&format!("{}/status", EXCHANGE_URL)).await
    }

    /// End the current API session
    #[instrument(skip(self))]
    pub async fn logout(&self) -> RestResult<Value> {
        self.post::<Value>("/logout", None).await
    }
}
