//! Request parameter types for the Kalshi trade API
//!
//! List endpoints take a parameter struct whose fields are all optional;
//! build one with struct-update syntax and only the fields you need:
//!
//! ```
//! use kalshi_rest::types::MarketsParams;
//!
//! let params = MarketsParams {
//!     limit: Some(10),
//!     status: Some("open".to_string()),
//!     ..Default::default()
//! };
//! assert_eq!(params.to_query(), "?limit=10&status=open");
//! ```
//!
//! Field order is query order.

use serde::{Deserialize, Serialize};

use crate::query::{append_param, QueryBuilder};

// ============================================================================
// Market Query Parameters
// ============================================================================

/// Filters for `GET /markets`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketsParams {
    /// Page size
    pub limit: Option<u32>,
    /// Pagination cursor from a previous page
    pub cursor: Option<String>,
    /// Restrict to one event
    pub event_ticker: Option<String>,
    /// Restrict to one series
    pub series_ticker: Option<String>,
    /// Markets closing at or before this Unix timestamp
    pub max_close_ts: Option<i64>,
    /// Markets closing at or after this Unix timestamp
    pub min_close_ts: Option<i64>,
    /// Market status (e.g. "open", "closed", "settled")
    pub status: Option<String>,
    /// Comma-separated list of market tickers
    pub tickers: Option<String>,
}

impl MarketsParams {
    /// Render as a query string
    pub fn to_query(&self) -> String {
        QueryBuilder::new()
            .param("limit", self.limit)
            .param("cursor", self.cursor.as_deref())
            .param("event_ticker", self.event_ticker.as_deref())
            .param("series_ticker", self.series_ticker.as_deref())
            .param("max_close_ts", self.max_close_ts)
            .param("min_close_ts", self.min_close_ts)
            .param("status", self.status.as_deref())
            .param("tickers", self.tickers.as_deref())
            .build()
    }
}

/// Filters for `GET /markets/{ticker}/history`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketHistoryParams {
    /// Maximum number of history points to return
    pub limit: Option<u32>,
    /// Pagination cursor from a previous response
    pub cursor: Option<String>,
    /// Points at or before this Unix timestamp
    pub max_ts: Option<i64>,
    /// Points at or after this Unix timestamp
    pub min_ts: Option<i64>,
}

impl MarketHistoryParams {
    /// Render as a query string
    pub fn to_query(&self) -> String {
        QueryBuilder::new()
            .param("limit", self.limit)
            .param("cursor", self.cursor.as_deref())
            .param("max_ts", self.max_ts)
            .param("min_ts", self.min_ts)
            .build()
    }
}

/// Filters for `GET /markets/trades`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradesParams {
    /// Market ticker, always rendered last
    pub ticker: Option<String>,
    /// Maximum number of trades to return
    pub limit: Option<u32>,
    /// Pagination cursor from a previous response
    pub cursor: Option<String>,
    /// Trades at or before this Unix timestamp
    pub max_ts: Option<i64>,
    /// Trades at or after this Unix timestamp
    pub min_ts: Option<i64>,
}

impl TradesParams {
    /// Render as a query string
    ///
    /// The ticker is appended after the other parameters rather than in
    /// field order, matching what the trades endpoint has always received.
    pub fn to_query(&self) -> String {
        let mut query = QueryBuilder::new()
            .param("limit", self.limit)
            .param("cursor", self.cursor.as_deref())
            .param("max_ts", self.max_ts)
            .param("min_ts", self.min_ts)
            .build();

        if let Some(ticker) = &self.ticker {
            append_param(&mut query, "ticker", ticker);
        }

        query
    }
}

// ============================================================================
// Portfolio Query Parameters
// ============================================================================

/// Filters for `GET /portfolio/fills`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillsParams {
    /// Only fills in this market
    pub ticker: Option<String>,
    /// Only fills of this order
    pub order_id: Option<String>,
    /// Fills at or after this Unix timestamp
    pub min_ts: Option<i64>,
    /// Fills at or before this Unix timestamp
    pub max_ts: Option<i64>,
    /// Maximum number of fills to return
    pub limit: Option<u32>,
    /// Pagination cursor from a previous response
    pub cursor: Option<String>,
}

impl FillsParams {
    /// Render as a query string
    pub fn to_query(&self) -> String {
        QueryBuilder::new()
            .param("ticker", self.ticker.as_deref())
            .param("order_id", self.order_id.as_deref())
            .param("min_ts", self.min_ts)
            .param("max_ts", self.max_ts)
            .param("limit", self.limit)
            .param("cursor", self.cursor.as_deref())
            .build()
    }
}

/// Filters for `GET /portfolio/orders`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrdersParams {
    /// Only orders in this market
    pub ticker: Option<String>,
    /// Only orders in markets of this event
    pub event_ticker: Option<String>,
    /// Orders created at or after this Unix timestamp
    pub min_ts: Option<i64>,
    /// Orders created at or before this Unix timestamp
    pub max_ts: Option<i64>,
    /// Maximum number of orders to return
    pub limit: Option<u32>,
    /// Pagination cursor from a previous response
    pub cursor: Option<String>,
}

impl OrdersParams {
    /// Render as a query string
    pub fn to_query(&self) -> String {
        QueryBuilder::new()
            .param("ticker", self.ticker.as_deref())
            .param("event_ticker", self.event_ticker.as_deref())
            .param("min_ts", self.min_ts)
            .param("max_ts", self.max_ts)
            .param("limit", self.limit)
            .param("cursor", self.cursor.as_deref())
            .build()
    }
}

/// Filters for `GET /portfolio/positions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionsParams {
    /// Maximum number of positions to return
    pub limit: Option<u32>,
    /// Pagination cursor from a previous response
    pub cursor: Option<String>,
    /// "all", "settled", or "unsettled"
    pub settlement_status: Option<String>,
    /// Only positions in this market
    pub ticker: Option<String>,
    /// Only positions in markets of this event
    pub event_ticker: Option<String>,
}

impl PositionsParams {
    /// Render as a query string
    pub fn to_query(&self) -> String {
        QueryBuilder::new()
            .param("limit", self.limit)
            .param("cursor", self.cursor.as_deref())
            .param("settlement_status", self.settlement_status.as_deref())
            .param("ticker", self.ticker.as_deref())
            .param("event_ticker", self.event_ticker.as_deref())
            .build()
    }
}

/// Filters for `GET /portfolio/settlements`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettlementsParams {
    /// Maximum number of settlements to return
    pub limit: Option<u32>,
    /// Pagination cursor from a previous response
    pub cursor: Option<String>,
}

impl SettlementsParams {
    /// Render as a query string
    pub fn to_query(&self) -> String {
        QueryBuilder::new()
            .param("limit", self.limit)
            .param("cursor", self.cursor.as_deref())
            .build()
    }
}

// ============================================================================
// Order Types
// ============================================================================

/// Contract side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Contract pays out if the market resolves yes
    Yes,
    /// Contract pays out if the market resolves no
    No,
}

/// Order action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Open or add to a position
    Buy,
    /// Reduce or close a position
    Sell,
}

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Fill against resting liquidity at any price
    Market,
    /// Fill only at the given price or better
    Limit,
}

/// Body of `POST /portfolio/orders`
///
/// Fields left as `None` are omitted from the JSON. Prices are in cents;
/// no range checks are applied client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Market ticker
    pub ticker: String,
    /// Caller-chosen idempotency id
    pub client_order_id: String,
    /// Contract side
    pub side: Side,
    /// Buy or sell
    pub action: Action,
    /// Number of contracts
    pub count: u32,
    /// Sent as `"type"`, the field name the order endpoint reads, not `"order_type"`
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Limit price in cents for a yes order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yes_price: Option<u32>,
    /// Limit price in cents for a no order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_price: Option<u32>,
    /// Unix timestamp after which the order is cancelled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_ts: Option<i64>,
    /// Smallest position a sell may leave behind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_position_floor: Option<u32>,
    /// Spending cap in cents for a buy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_max_cost: Option<u32>,
}

impl CreateOrderRequest {
    /// Create an order with only the required fields set
    pub fn new(
        ticker: impl Into<String>,
        client_order_id: impl Into<String>,
        side: Side,
        action: Action,
        count: u32,
        order_type: OrderType,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            client_order_id: client_order_id.into(),
            side,
            action,
            count,
            order_type,
            yes_price: None,
            no_price: None,
            expiration_ts: None,
            sell_position_floor: None,
            buy_max_cost: None,
        }
    }

    /// Limit order at `price` cents on `side`
    pub fn limit(
        ticker: impl Into<String>,
        client_order_id: impl Into<String>,
        side: Side,
        action: Action,
        count: u32,
        price: u32,
    ) -> Self {
        let mut order = Self::new(ticker, client_order_id, side, action, count, OrderType::Limit);
        match side {
            Side::Yes => order.yes_price = Some(price),
            Side::No => order.no_price = Some(price),
        }
        order
    }

    /// Set the expiration timestamp
    pub fn with_expiration_ts(mut self, expiration_ts: i64) -> Self {
        self.expiration_ts = Some(expiration_ts);
        self
    }

    /// Cap the total cost of a market buy, in cents
    pub fn with_buy_max_cost(mut self, buy_max_cost: u32) -> Self {
        self.buy_max_cost = Some(buy_max_cost);
        self
    }

    /// Do not sell below this position size
    pub fn with_sell_position_floor(mut self, floor: u32) -> Self {
        self.sell_position_floor = Some(floor);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_markets_query() {
        let params = MarketsParams {
            limit: Some(10),
            status: Some("open".to_string()),
            ..Default::default()
        };
        assert_eq!(params.to_query(), "?limit=10&status=open");
        assert_eq!(MarketsParams::default().to_query(), "");
    }

    #[test]
    fn test_markets_query_field_order() {
        let params = MarketsParams {
            tickers: Some("A,B".to_string()),
            min_close_ts: Some(1),
            max_close_ts: Some(2),
            event_ticker: Some("EV".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.to_query(),
            "?event_ticker=EV&max_close_ts=2&min_close_ts=1&tickers=A,B"
        );
    }

    #[test]
    fn test_trades_ticker_only() {
        let params = TradesParams {
            ticker: Some("ABC".to_string()),
            ..Default::default()
        };
        assert_eq!(params.to_query(), "?ticker=ABC");
    }

    #[test]
    fn test_trades_ticker_after_limit() {
        let params = TradesParams {
            ticker: Some("ABC".to_string()),
            limit: Some(5),
            ..Default::default()
        };
        assert_eq!(params.to_query(), "?limit=5&ticker=ABC");
    }

    #[test]
    fn test_trades_without_ticker() {
        let params = TradesParams {
            cursor: Some("abc123".to_string()),
            min_ts: Some(1_700_000_000),
            ..Default::default()
        };
        assert_eq!(params.to_query(), "?cursor=abc123&min_ts=1700000000");
        assert_eq!(TradesParams::default().to_query(), "");
    }

    #[test]
    fn test_portfolio_queries() {
        let fills = FillsParams {
            order_id: Some("o-1".to_string()),
            limit: Some(100),
            ..Default::default()
        };
        assert_eq!(fills.to_query(), "?order_id=o-1&limit=100");

        let positions = PositionsParams {
            settlement_status: Some("unsettled".to_string()),
            event_ticker: Some("EV".to_string()),
            ..Default::default()
        };
        assert_eq!(positions.to_query(), "?settlement_status=unsettled&event_ticker=EV");

        let settlements = SettlementsParams {
            cursor: Some("next".to_string()),
            ..Default::default()
        };
        assert_eq!(settlements.to_query(), "?cursor=next");
    }

    #[test]
    fn test_order_request_omits_absent_fields() {
        let order = CreateOrderRequest::limit("ABC", "client-1", Side::Yes, Action::Buy, 10, 45);
        let value = serde_json::to_value(&order).unwrap();

        assert_eq!(
            value,
            json!({
                "ticker": "ABC",
                "client_order_id": "client-1",
                "side": "yes",
                "action": "buy",
                "count": 10,
                "type": "limit",
                "yes_price": 45
            })
        );
    }

    #[test]
    fn test_no_side_limit_sets_no_price() {
        let order = CreateOrderRequest::limit("ABC", "c", Side::No, Action::Sell, 1, 30)
            .with_expiration_ts(1_700_000_000);
        assert_eq!(order.no_price, Some(30));
        assert_eq!(order.yes_price, None);
        assert_eq!(order.expiration_ts, Some(1_700_000_000));
    }

    #[test]
    fn test_order_type_wire_name() {
        let order = CreateOrderRequest::new("ABC", "c", Side::Yes, Action::Buy, 1, OrderType::Market);
        let value = serde_json::to_value(&order).unwrap();

        assert_eq!(value["type"], "market");
        assert!(value.get("order_type").is_none());

        let parsed: CreateOrderRequest = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.order_type, OrderType::Market);
    }
}
