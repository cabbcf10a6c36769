//! Market, event, and series endpoints

use serde_json::Value;
use tracing::instrument;

use super::{EVENTS_URL, MARKETS_URL, SERIES_URL};
use crate::client::ExchangeClient;
use crate::error::RestResult;
use crate::query::QueryBuilder;
use crate::types::{MarketHistoryParams, MarketsParams, TradesParams};

fn market_url(ticker: &str) -> String {
    format!("{}/{}", MARKETS_URL, ticker)
}

impl ExchangeClient {
    /// List markets
    #[instrument(skip(self))]
    pub async fn get_markets(&self, params: &MarketsParams) -> RestResult<Value> {
        self.get(&format!("{}{}", MARKETS_URL, params.to_query())).await
    }

    /// Get a single market
    ///
    /// # Arguments
    /// * `ticker` - Market ticker
    #[instrument(skip(self))]
    pub async fn get_market(&self, ticker: &str) -> RestResult<Value> {
        self.get(&market_url(ticker)).await
    }

    /// Get a single event
    #[instrument(skip(self))]
    pub async fn get_event(&self, event_ticker: &str) -> RestResult<Value> {
        self.get(&format!("{}/{}", EVENTS_URL, event_ticker)).await
    }

    /// Get a single series
    #[instrument(skip(self))]
    pub async fn get_series(&self, series_ticker: &str) -> RestResult<Value> {
        self.get(&format!("{}/{}", SERIES_URL, series_ticker)).await
    }

    /// Get the price history of a market
    #[instrument(skip(self))]
    pub async fn get_market_history(
        &self,
        ticker: &str,
        params: &MarketHistoryParams,
    ) -> RestResult<Value> {
        self.get(&format!("{}/history{}", market_url(ticker), params.to_query()))
            .await
    }

    /// Get the orderbook of a market
    ///
    /// # Arguments
    /// * `ticker` - Market ticker
    /// * `depth` - Number of price levels per side (optional)
    #[instrument(skip(self))]
    pub async fn get_orderbook(&self, ticker: &str, depth: Option<u32>) -> RestResult<Value> {
        let query = QueryBuilder::new().param("depth", depth).build();
        self.get(&format!("{}/orderbook{}", market_url(ticker), query))
            .await
    }

    /// List public trades
    #[instrument(skip(self))]
    pub async fn get_trades(&self, params: &TradesParams) -> RestResult<Value> {
        self.get(&format!("{}/trades{}", MARKETS_URL, params.to_query()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_url() {
        assert_eq!(market_url("ABC"), "/markets/ABC");
    }
}
