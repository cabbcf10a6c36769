//! Demo 2: Portfolio Snapshot
//!
//! Showcases: portfolio endpoints sharing one rate limiter across tasks
//!
//! Run: KALSHI_API_KEY=... KALSHI_KEY_FILE=kalshi.pem cargo run --bin portfolio_snapshot

use colored::*;
use kalshi_auth::Credential;
use kalshi_rest::types::{FillsParams, OrdersParams, PositionsParams};
use kalshi_rest::{ClientConfig, ExchangeClient};
use serde_json::Value;
use std::env;
use std::sync::Arc;
use std::time::Instant;

fn count(value: &Value, key: &str) -> usize {
    value[key].as_array().map_or(0, Vec::len)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("warn").init();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  KALSHI PORTFOLIO SNAPSHOT".cyan().bold());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let key_id = env::var("KALSHI_API_KEY")?;
    let key_file = env::var("KALSHI_KEY_FILE")?;
    let credential = Credential::from_pem_file(key_id, key_file)?;

    let config = match env::var("KALSHI_ENV").as_deref() {
        Ok("demo") => ClientConfig::demo(),
        _ => ClientConfig::default(),
    };
    let client = Arc::new(ExchangeClient::with_config(credential, config)?);

    let start = Instant::now();

    // Four concurrent calls still leave the client 100 ms apart
    let balance = tokio::spawn({
        let client = Arc::clone(&client);
        async move { client.get_balance().await }
    });
    let positions = tokio::spawn({
        let client = Arc::clone(&client);
        async move { client.get_positions(&PositionsParams::default()).await }
    });
    let orders = tokio::spawn({
        let client = Arc::clone(&client);
        async move {
            client
                .get_orders(&OrdersParams {
                    limit: Some(100),
                    ..Default::default()
                })
                .await
        }
    });
    let fills = tokio::spawn({
        let client = Arc::clone(&client);
        async move {
            client
                .get_fills(&FillsParams {
                    limit: Some(100),
                    ..Default::default()
                })
                .await
        }
    });

    let balance = balance.await??;
    let positions = positions.await??;
    let orders = orders.await??;
    let fills = fills.await??;

    let cents = balance["balance"].as_i64().unwrap_or_default();
    println!("  Balance:          {}", format!("${:.2}", cents as f64 / 100.0).green().bold());
    println!("  Market positions: {}", count(&positions, "market_positions"));
    println!("  Event positions:  {}", count(&positions, "event_positions"));
    println!("  Orders:           {}", count(&orders, "orders"));
    println!("  Recent fills:     {}", count(&fills, "fills"));
    println!();
    println!(
        "{} Fetched in {:?} ({} requests, rate limited)",
        "✓".green(),
        start.elapsed(),
        4
    );

    Ok(())
}
