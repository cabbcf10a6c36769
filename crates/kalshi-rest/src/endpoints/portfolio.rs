//! Portfolio endpoints: balance, orders, fills, positions, settlements

use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use super::PORTFOLIO_URL;
use crate::client::ExchangeClient;
use crate::error::RestResult;
use crate::types::{
    CreateOrderRequest, FillsParams, OrdersParams, PositionsParams, SettlementsParams,
};

#[derive(Serialize)]
struct BatchCreateBody<'a> {
    orders: &'a [CreateOrderRequest],
}

#[derive(Serialize)]
struct BatchCancelBody<'a> {
    ids: Vec<&'a str>,
}

#[derive(Serialize)]
struct DecreaseBody {
    reduce_by: u32,
}

fn orders_url() -> String {
    format!("{}/orders", PORTFOLIO_URL)
}

fn order_url(order_id: &str) -> String {
    format!("{}/orders/{}", PORTFOLIO_URL, order_id)
}

fn batched_orders_url() -> String {
    format!("{}/orders/batched", PORTFOLIO_URL)
}

impl ExchangeClient {
    /// Get the account balance
    #[instrument(skip(self))]
    pub async fn get_balance(&self) -> RestResult<Value> {
        self.get(&format!("{}/balance", PORTFOLIO_URL)).await
    }

    /// Place a new order
    #[instrument(skip(self, order), fields(ticker = %order.ticker, side = ?order.side, action = ?order.action))]
    pub async fn create_order(&self, order: &CreateOrderRequest) -> RestResult<Value> {
        self.post(&orders_url(), Some(order)).await
    }

    /// Place several orders in one request
    ///
    /// Sent as `{"orders": [...]}`.
    #[instrument(skip(self, orders), fields(count = orders.len()))]
    pub async fn batch_create_orders(&self, orders: &[CreateOrderRequest]) -> RestResult<Value> {
        self.post(&batched_orders_url(), Some(&BatchCreateBody { orders }))
            .await
    }

    /// Reduce the remaining size of a resting order
    #[instrument(skip(self))]
    pub async fn decrease_order(&self, order_id: &str, reduce_by: u32) -> RestResult<Value> {
        let path = format!("{}/decrease", order_url(order_id));
        self.post(&path, Some(&DecreaseBody { reduce_by })).await
    }

    /// Cancel an order
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<Value> {
        let path = format!("{}/cancel", order_url(order_id));
        self.delete::<Value>(&path, None).await
    }

    /// Cancel several orders in one request
    ///
    /// Sent as `{"ids": [...]}`.
    #[instrument(skip(self, order_ids), fields(count = order_ids.len()))]
    pub async fn batch_cancel_orders<S: AsRef<str>>(&self, order_ids: &[S]) -> RestResult<Value> {
        let body = BatchCancelBody {
            ids: order_ids.iter().map(AsRef::as_ref).collect(),
        };
        self.delete(&batched_orders_url(), Some(&body)).await
    }

    /// List fills
    #[instrument(skip(self))]
    pub async fn get_fills(&self, params: &FillsParams) -> RestResult<Value> {
        self.get(&format!("{}/fills{}", PORTFOLIO_URL, params.to_query()))
            .await
    }

    /// List orders
    #[instrument(skip(self))]
    pub async fn get_orders(&self, params: &OrdersParams) -> RestResult<Value> {
        self.get(&format!("{}{}", orders_url(), params.to_query()))
            .await
    }

    /// Get a single order
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: &str) -> RestResult<Value> {
        self.get(&order_url(order_id)).await
    }

    /// List market positions
    #[instrument(skip(self))]
    pub async fn get_positions(&self, params: &PositionsParams) -> RestResult<Value> {
        self.get(&format!("{}/positions{}", PORTFOLIO_URL, params.to_query()))
            .await
    }

    /// List settlements
    #[instrument(skip(self))]
    pub async fn get_portfolio_settlements(&self, params: &SettlementsParams) -> RestResult<Value> {
        self.get(&format!("{}/settlements{}", PORTFOLIO_URL, params.to_query()))
            .await
    }
}
