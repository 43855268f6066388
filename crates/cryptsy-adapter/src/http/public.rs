/*
[INPUT]:  Optional market identifiers
[OUTPUT]: Market data and order book snapshots as raw JSON
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing method names
*/

use serde_json::Value;

use crate::http::{CryptsyClient, Result};

impl CryptsyClient {
    /// General market data for all markets
    ///
    /// GET ?method=marketdata, or ?method=marketdatav2 when `v2` is set
    pub async fn market_data(&self, v2: bool) -> Result<Value> {
        let method = if v2 { "marketdatav2" } else { "marketdata" };
        self.public_api_query(method, None).await
    }

    /// General market data for one market
    ///
    /// GET ?method=singlemarketdata&marketid={market_id}
    pub async fn single_market_data(&self, market_id: u64) -> Result<Value> {
        self.public_api_query("singlemarketdata", Some(market_id)).await
    }

    /// Order book for all markets, or a single one
    ///
    /// GET ?method=orderdata | ?method=singleorderdata&marketid={market_id}
    pub async fn order_book_data(&self, market_id: Option<u64>) -> Result<Value> {
        match market_id {
            Some(id) => self.public_api_query("singleorderdata", Some(id)).await,
            None => self.public_api_query("orderdata", None).await,
        }
    }
}
