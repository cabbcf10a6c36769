//! Demo 1: Exchange Status and Market Scan
//!
//! Showcases: signed requests, query parameters, HTTP error passthrough
//!
//! Run: KALSHI_API_KEY=... KALSHI_KEY_FILE=kalshi.pem cargo run --bin exchange_status
//!
//! Set KALSHI_ENV=demo to talk to the demo environment.

use colored::*;
use kalshi_auth::Credential;
use kalshi_rest::types::MarketsParams;
use kalshi_rest::{ClientConfig, ExchangeClient, RestError};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  KALSHI EXCHANGE STATUS".cyan().bold());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let key_id = env::var("KALSHI_API_KEY")?;
    let key_file = env::var("KALSHI_KEY_FILE")?;
    let credential = Credential::from_pem_file(key_id, key_file)?;

    let config = match env::var("KALSHI_ENV").as_deref() {
        Ok("demo") => ClientConfig::demo(),
        _ => ClientConfig::default(),
    };
    println!("{} Host: {}\n", "✓".green(), config.host);

    let client = ExchangeClient::with_config(credential, config)?;

    let status = client.get_exchange_status().await?;
    let flag = |key: &str| match status[key].as_bool() {
        Some(true) => "yes".green(),
        Some(false) => "no".red(),
        None => "-".white(),
    };
    println!("  Exchange active: {}", flag("exchange_active"));
    println!("  Trading active:  {}", flag("trading_active"));
    println!();

    let params = MarketsParams {
        limit: Some(10),
        status: Some("open".to_string()),
        ..Default::default()
    };
    let markets = client.get_markets(&params).await?;

    println!(
        "  {:<36} {:>8} {:>8} {:>10}",
        "TICKER".white().bold(),
        "YES BID".white().bold(),
        "YES ASK".white().bold(),
        "VOLUME".white().bold()
    );
    println!("  {}", "─".repeat(66));

    for market in markets["markets"].as_array().into_iter().flatten() {
        println!(
            "  {:<36} {:>8} {:>8} {:>10}",
            market["ticker"].as_str().unwrap_or("-").cyan(),
            market["yes_bid"],
            market["yes_ask"],
            market["volume"]
        );
    }
    println!();

    // Unknown tickers come back as plain HTTP failures
    match client.get_market("DOES-NOT-EXIST").await {
        Err(RestError::Http { status, reason }) => {
            println!("{} Lookup of unknown ticker: {} {}", "!".yellow(), status, reason);
        }
        Err(e) => println!("{} Unexpected error: {}", "✗".red(), e),
        Ok(_) => println!("{} Unknown ticker unexpectedly found", "?".yellow()),
    }

    Ok(())
}
