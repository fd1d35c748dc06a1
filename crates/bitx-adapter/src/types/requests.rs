/*
[INPUT]:  Endpoint parameters from callers
[OUTPUT]: Url-encodable query and form parameter structs
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When endpoints gain parameters; field order is wire order
*/

use rust_decimal::Decimal;
use serde::Serialize;

use super::enums::{MarketOrderType, OrderState, OrderType, StopDirection, TimeInForce};

/// `pair` only; endpoints fill in the client default
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PairQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TradesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    /// Only trades after this unix millisecond timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListOrdersQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<OrderState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_before: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListOrdersV2Query {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_before: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListTradesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_seq: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_seq: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_desc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Look up a v3 order by exchange id or by client order id
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderV3Query {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
}

impl OrderV3Query {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            client_order_id: None,
        }
    }

    pub fn by_client_order_id(client_order_id: impl Into<String>) -> Self {
        Self {
            id: None,
            client_order_id: Some(client_order_id.into()),
        }
    }
}

/// Optional fields for limit orders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LimitOrderOptions {
    pub pair: Option<String>,
    pub post_only: Option<bool>,
    pub stop_price: Option<Decimal>,
    pub stop_direction: Option<StopDirection>,
    pub base_account_id: Option<u64>,
    pub counter_account_id: Option<u64>,
    pub client_order_id: Option<String>,
    pub time_in_force: Option<TimeInForce>,
}

/// Optional fields for market orders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketOrderOptions {
    pub pair: Option<String>,
    pub base_account_id: Option<u64>,
    pub counter_account_id: Option<u64>,
    pub client_order_id: Option<String>,
}

/// Form body for `POST /api/1/postorder`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimitOrderRequest {
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(with = "rust_decimal::serde::str")]
    pub volume: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub pair: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_only: Option<bool>,
    #[serde(
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub stop_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_direction: Option<StopDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_account_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_account_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
}

impl LimitOrderRequest {
    pub fn new(
        order_type: OrderType,
        volume: Decimal,
        price: Decimal,
        options: LimitOrderOptions,
        default_pair: &str,
    ) -> Self {
        Self {
            order_type,
            volume,
            price,
            pair: options.pair.unwrap_or_else(|| default_pair.to_string()),
            post_only: options.post_only,
            stop_price: options.stop_price,
            stop_direction: options.stop_direction,
            base_account_id: options.base_account_id,
            counter_account_id: options.counter_account_id,
            client_order_id: options.client_order_id,
            time_in_force: options.time_in_force,
        }
    }
}

/// Form body for `POST /api/1/marketorder`.
///
/// Buys spend `counter_volume`, sells spend `base_volume`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketOrderRequest {
    #[serde(rename = "type")]
    pub order_type: MarketOrderType,
    #[serde(
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub counter_volume: Option<Decimal>,
    #[serde(
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_volume: Option<Decimal>,
    pub pair: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_account_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_account_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
}

impl MarketOrderRequest {
    pub fn buy(counter_volume: Decimal, options: MarketOrderOptions, default_pair: &str) -> Self {
        Self::new(MarketOrderType::Buy, Some(counter_volume), None, options, default_pair)
    }

    pub fn sell(base_volume: Decimal, options: MarketOrderOptions, default_pair: &str) -> Self {
        Self::new(MarketOrderType::Sell, None, Some(base_volume), options, default_pair)
    }

    fn new(
        order_type: MarketOrderType,
        counter_volume: Option<Decimal>,
        base_volume: Option<Decimal>,
        options: MarketOrderOptions,
        default_pair: &str,
    ) -> Self {
        Self {
            order_type,
            counter_volume,
            base_volume,
            pair: options.pair.unwrap_or_else(|| default_pair.to_string()),
            base_account_id: options.base_account_id,
            counter_account_id: options.counter_account_id,
            client_order_id: options.client_order_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopOrderRequest {
    pub order_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetQuery {
    pub asset: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundingAddressQuery {
    pub asset: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Paging for `GET /api/1/transactions`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionsQuery {
    pub offset: u64,
    pub limit: u64,
}

impl Default for TransactionsQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct TransactionsRequest {
    pub asset: String,
    pub offset: u64,
    pub limit: u64,
}

/// Optional fields for withdrawal requests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WithdrawalOptions {
    pub beneficiary_id: Option<String>,
}

/// Form body for `POST /api/1/withdrawals/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithdrawalRequest {
    /// Withdrawal method, e.g. `ZAR_EFT`
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_id: Option<String>,
}
