/*
[INPUT]:  API key/secret from the environment and order parameters
[OUTPUT]: Account info, fee estimate and order placement results
[POS]:    Examples - signed trading operations
[UPDATE]: When trading API changes
*/

use cryptsy_adapter::*;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Example: Trading operations (requires API key + HMAC-SHA512 body signature)
///
/// Set CRYPTSY_API_KEY and CRYPTSY_API_SECRET. Set CRYPTSY_PLACE_ORDER=1 to
/// actually submit the sample order.
#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    println!("=== Cryptsy Trading Example ===\n");

    let (Ok(key), Ok(secret)) = (
        std::env::var("CRYPTSY_API_KEY"),
        std::env::var("CRYPTSY_API_SECRET"),
    ) else {
        eprintln!("CRYPTSY_API_KEY and CRYPTSY_API_SECRET must be set");
        return;
    };

    let client = match CryptsyClient::new(Credentials::new(key, secret)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    println!("\nQuerying account info...");
    match client.info().await {
        Ok(info) => match ApiEnvelope::from_value(&info) {
            Some(envelope) if envelope.is_success() => {
                println!("✓ Info: {:?}", envelope.payload)
            }
            Some(envelope) => println!("✗ Exchange error: {:?}", envelope.error),
            None => println!("? Unexpected response: {}", info),
        },
        Err(e) => println!("✗ Error: {}", e),
    }

    let market_id = 3;
    let quantity = Decimal::from_str("0.1").unwrap_or_default();
    let price = Decimal::from_str("0.00001").unwrap_or_default();

    println!("\nCalculating fees for a buy of {} @ {}...", quantity, price);
    match client.calculate_fees(OrderType::Buy, quantity, price).await {
        Ok(fees) => println!("✓ Fees: {}", fees),
        Err(e) => println!("✗ Error: {}", e),
    }

    if std::env::var("CRYPTSY_PLACE_ORDER").as_deref() == Ok("1") {
        println!("\nPlacing buy order on market {}...", market_id);
        match client.buy(market_id, quantity, price).await {
            Ok(order) => println!("✓ Order: {}", order),
            Err(e) => println!("✗ Error: {}", e),
        }
    }

    println!("\n✓ Trading example complete");
}
