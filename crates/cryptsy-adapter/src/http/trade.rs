/*
[INPUT]:  Order parameters and order/market identifiers
[OUTPUT]: Order creation, cancellation and fee estimates as raw JSON
[POS]:    HTTP layer - trading endpoints (require signed requests)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use rust_decimal::Decimal;
use serde_json::Value;

use crate::http::{CryptsyClient, Result};
use crate::types::{
    CalculateFeesRequest, CancelOrderRequest, CreateOrderRequest, MarketRequest, NoParams,
    OrderType,
};

impl CryptsyClient {
    /// Create a buy or sell order
    ///
    /// POST method=createorder
    /// Prefer [`CryptsyClient::buy`] and [`CryptsyClient::sell`].
    pub async fn create_order(&self, req: &CreateOrderRequest) -> Result<Value> {
        self.private_api_query("createorder", req).await
    }

    /// Buy `quantity` units on a market at `price`
    pub async fn buy(&self, market_id: u64, quantity: Decimal, price: Decimal) -> Result<Value> {
        self.create_order(&CreateOrderRequest {
            marketid: market_id,
            ordertype: OrderType::Buy,
            quantity,
            price,
        })
        .await
    }

    /// Sell `quantity` units on a market at `price`
    pub async fn sell(&self, market_id: u64, quantity: Decimal, price: Decimal) -> Result<Value> {
        self.create_order(&CreateOrderRequest {
            marketid: market_id,
            ordertype: OrderType::Sell,
            quantity,
            price,
        })
        .await
    }

    /// Cancel a single order
    ///
    /// POST method=cancelorder&orderid={order_id}
    pub async fn cancel_order(&self, order_id: u64) -> Result<Value> {
        let req = CancelOrderRequest { orderid: order_id };
        self.private_api_query("cancelorder", &req).await
    }

    /// Cancel all open orders, on one market or everywhere
    ///
    /// POST method=cancelmarketorders&marketid={market_id} | method=cancelallorders
    pub async fn cancel_all_orders(&self, market_id: Option<u64>) -> Result<Value> {
        match market_id {
            Some(id) => {
                let req = MarketRequest { marketid: id };
                self.private_api_query("cancelmarketorders", &req).await
            }
            None => self.private_api_query("cancelallorders", &NoParams {}).await,
        }
    }

    /// Fee and net total for a hypothetical order
    ///
    /// POST method=calculatefees
    pub async fn calculate_fees(
        &self,
        order_type: OrderType,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<Value> {
        let req = CalculateFeesRequest {
            ordertype: order_type,
            quantity,
            price,
        };
        self.private_api_query("calculatefees", &req).await
    }
}
