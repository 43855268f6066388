/*
[INPUT]:  Optional market filters and currency identifiers
[OUTPUT]: Account data (balances, transactions, own trades/orders, addresses)
[POS]:    HTTP layer - user data endpoints (require signed requests)
[UPDATE]: When adding new user endpoints or changing query parameters
*/

// ### User Endpoints

use serde_json::Value;
use tracing::debug;

use crate::http::{CryptsyClient, Result};
use crate::types::{
    DEFAULT_TRADE_LIMIT, MarketRequest, MyTradesRequest, NewAddressRequest, NoParams,
};

impl CryptsyClient {
    /// Balances, held amounts, open order count and server time
    ///
    /// POST method=getinfo
    pub async fn info(&self) -> Result<Value> {
        self.private_api_query("getinfo", &NoParams {}).await
    }

    /// Deposits and withdrawals on the account
    ///
    /// POST method=mytransactions
    pub async fn my_transactions(&self) -> Result<Value> {
        self.private_api_query("mytransactions", &NoParams {}).await
    }

    /// Own trades, across all markets or for one market
    ///
    /// POST method=allmytrades | method=mytrades&marketid={market_id}&limit={limit}
    ///
    /// `limit` only applies to the single-market form and defaults to 200.
    pub async fn my_trades(&self, market_id: Option<u64>, limit: Option<u32>) -> Result<Value> {
        match market_id {
            Some(id) => {
                let req = MyTradesRequest {
                    marketid: id,
                    limit: limit.unwrap_or(DEFAULT_TRADE_LIMIT),
                };
                self.private_api_query("mytrades", &req).await
            }
            None => self.private_api_query("allmytrades", &NoParams {}).await,
        }
    }

    /// Own open orders, across all markets or for one market
    ///
    /// POST method=allmyorders | method=myorders&marketid={market_id}
    pub async fn my_orders(&self, market_id: Option<u64>) -> Result<Value> {
        match market_id {
            Some(id) => {
                let req = MarketRequest { marketid: id };
                self.private_api_query("myorders", &req).await
            }
            None => self.private_api_query("allmyorders", &NoParams {}).await,
        }
    }

    /// Generate a new deposit address
    ///
    /// POST method=generatenewaddress&currencyid={id} | &currencycode={code}
    ///
    /// The id is used when both are supplied. With neither, no request is
    /// made and `Ok(None)` is returned.
    pub async fn generate_new_address(
        &self,
        currency_id: Option<u64>,
        currency_code: Option<&str>,
    ) -> Result<Option<Value>> {
        let Some(req) = NewAddressRequest::from_parts(currency_id, currency_code) else {
            debug!("generatenewaddress skipped: no currency identifier");
            return Ok(None);
        };

        self.private_api_query("generatenewaddress", &req)
            .await
            .map(Some)
    }
}
