/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response envelopes with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::serde_helpers::null_as_default;
use super::models::{
    Balance, Order, OrderV2, Ticker, Trade, Transaction, UserTrade, Withdrawal,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickersResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tickers: Vec<Ticker>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trades: Vec<Trade>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderListV2Response {
    #[serde(default, deserialize_with = "null_as_default")]
    pub orders: Vec<OrderV2>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub trades: Vec<UserTrade>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostOrderResponse {
    /// Empty when the exchange acknowledged without an id
    #[serde(default)]
    pub order_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopOrderResponse {
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub balance: Vec<Balance>,
}

impl BalanceResponse {
    /// First balance entry for `asset`
    pub fn asset(&self, asset: &str) -> Option<&Balance> {
        self.balance.iter().find(|entry| entry.asset == asset)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub withdrawals: Vec<Withdrawal>,
}
