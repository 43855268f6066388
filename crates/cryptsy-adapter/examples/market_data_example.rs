/*
[INPUT]:  Market identifier (e.g., 3 = LTC/BTC)
[OUTPUT]: Market data and order book snapshots
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use cryptsy_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Query market data (no authentication required)
///
/// Public endpoints ignore the credentials, so placeholders are fine.
#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    println!("=== Cryptsy Market Data Example ===\n");

    let client = match CryptsyClient::new(Credentials::new("", "")) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (no auth required for public endpoints)\n");

    let market_id = 3;

    println!("Querying market data (v2)...");
    match client.market_data(true).await {
        Ok(data) => println!("✓ Markets: {}", data["return"]["markets"].as_object().map_or(0, |m| m.len())),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying market {}...", market_id);
    match client.single_market_data(market_id).await {
        Ok(data) => println!("✓ Market: {}", data),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying order book for market {}...", market_id);
    match client.order_book_data(Some(market_id)).await {
        Ok(data) => println!("✓ Order book: {}", data),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
