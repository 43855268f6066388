/*
[INPUT]:  Market identifiers
[OUTPUT]: Market listings, trades, orders and depth as raw JSON
[POS]:    HTTP layer - signed market data endpoints
[UPDATE]: When adding new market endpoints or changing method names
*/

// ### Market Endpoints

use serde_json::Value;

use crate::http::{CryptsyClient, Result};
use crate::types::{MarketRequest, NoParams};

impl CryptsyClient {
    /// Active markets with 24h volume and trade prices
    ///
    /// POST method=getmarkets
    pub async fn markets(&self) -> Result<Value> {
        self.private_api_query("getmarkets", &NoParams {}).await
    }

    /// Last 1000 trades for a market, newest first
    ///
    /// POST method=markettrades&marketid={market_id}
    pub async fn market_trades(&self, market_id: u64) -> Result<Value> {
        let req = MarketRequest { marketid: market_id };
        self.private_api_query("markettrades", &req).await
    }

    /// Open sell and buy orders for a market
    ///
    /// POST method=marketorders&marketid={market_id}
    pub async fn market_orders(&self, market_id: u64) -> Result<Value> {
        let req = MarketRequest { marketid: market_id };
        self.private_api_query("marketorders", &req).await
    }

    /// Aggregated `[price, quantity]` levels for both sides of a market
    ///
    /// POST method=depth&marketid={market_id}
    pub async fn depth(&self, market_id: u64) -> Result<Value> {
        let req = MarketRequest { marketid: market_id };
        self.private_api_query("depth", &req).await
    }
}
