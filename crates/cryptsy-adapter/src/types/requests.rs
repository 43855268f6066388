/*
[INPUT]:  Endpoint parameter sets and serde requirements
[OUTPUT]: Typed Rust request structs with form serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::Serialize;

use super::enums::OrderType;

/// Default `limit` for the market-scoped trade history
pub const DEFAULT_TRADE_LIMIT: u32 = 200;

/// Private call without caller parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NoParams {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketRequest {
    pub marketid: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MyTradesRequest {
    pub marketid: u64,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateOrderRequest {
    pub marketid: u64,
    pub ordertype: OrderType,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CancelOrderRequest {
    pub orderid: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculateFeesRequest {
    pub ordertype: OrderType,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

/// Deposit address request carrying exactly one currency identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAddressRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    currencyid: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currencycode: Option<String>,
}

impl NewAddressRequest {
    /// Identify the currency by numeric id (3 = BitCoin)
    pub fn by_id(currency_id: u64) -> Self {
        Self {
            currencyid: Some(currency_id),
            currencycode: None,
        }
    }

    /// Identify the currency by ticker code (e.g. `BTC`)
    pub fn by_code(currency_code: impl Into<String>) -> Self {
        Self {
            currencyid: None,
            currencycode: Some(currency_code.into()),
        }
    }

    /// Id wins when both are given; `None` when neither is.
    pub fn from_parts(currency_id: Option<u64>, currency_code: Option<&str>) -> Option<Self> {
        match (currency_id, currency_code) {
            (Some(id), _) => Some(Self::by_id(id)),
            (None, Some(code)) => Some(Self::by_code(code)),
            (None, None) => None,
        }
    }
}
