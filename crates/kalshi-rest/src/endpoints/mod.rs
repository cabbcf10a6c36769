//! API endpoint implementations
//!
//! Each module adds one group of operations to
//! [`ExchangeClient`](crate::ExchangeClient). Paths are relative to the
//! configured host and are built by plain concatenation.

pub mod exchange;
pub mod market;
pub mod portfolio;

const EXCHANGE_URL: &str = "/exchange";
const MARKETS_URL: &str = "/markets";
const EVENTS_URL: &str = "/events";
const SERIES_URL: &str = "/series";
const PORTFOLIO_URL: &str = "/portfolio";
