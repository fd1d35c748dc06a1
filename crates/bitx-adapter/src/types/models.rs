/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderKind, OrderSide, OrderState, OrderStatus, OrderType, WithdrawalStatus};

/// Convert a unix millisecond timestamp; zero means "not set" on this API
pub fn millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    if millis == 0 {
        return None;
    }
    DateTime::from_timestamp_millis(millis)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub bid: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub ask: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub last_trade: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub rolling_24_hour_volume: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Ticker {
    pub fn time(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookEntry {
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub price: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub volume: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub asks: Vec<OrderBookEntry>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub bids: Vec<OrderBookEntry>,
}

impl OrderBook {
    /// Lowest ask, if any
    pub fn best_ask(&self) -> Option<&OrderBookEntry> {
        self.asks.first()
    }

    /// Highest bid, if any
    pub fn best_bid(&self) -> Option<&OrderBookEntry> {
        self.bids.first()
    }

    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()?.price - self.best_bid()?.price)
    }
}

/// Public trade from the trades feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub timestamp: i64,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub price: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub volume: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_buy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u64>,
}

impl Trade {
    pub fn time(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.timestamp)
    }
}

/// Fill belonging to a v1 order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderFill {
    pub timestamp: i64,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub price: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub volume: Decimal,
}

/// Order as returned by the v1 endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub creation_timestamp: i64,
    #[serde(default)]
    pub expiration_timestamp: i64,
    #[serde(default)]
    pub completed_timestamp: i64,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub state: OrderState,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub limit_price: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub limit_volume: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub base: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub counter: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub fee_base: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub fee_counter: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub trades: Vec<OrderFill>,
}

impl Order {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.creation_timestamp)
    }

    pub fn is_pending(&self) -> bool {
        self.state == OrderState::Pending
    }
}

/// Order as returned by the v2 and v3 endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderV2 {
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    pub pair: String,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub kind: OrderKind,
    pub status: OrderStatus,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub limit_price: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub limit_volume: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub base: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub counter: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub fee_base: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub fee_counter: Decimal,
    #[serde(default)]
    pub creation_timestamp: i64,
    #[serde(default)]
    pub completed_timestamp: i64,
    #[serde(default)]
    pub expiration_timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<String>,
}

/// Trade on the authenticated user's own orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTrade {
    pub pair: String,
    #[serde(default)]
    pub sequence: u64,
    pub order_id: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub timestamp: i64,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub price: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub volume: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub base: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub counter: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub fee_base: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub fee_counter: Decimal,
    #[serde(default)]
    pub is_buy: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
}

/// Legacy order limits (`/api/1/BTCZAR/getlimits`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub ask_btc_limit: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub bid_zar_limit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeInfo {
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub maker_fee: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub taker_fee: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub thirty_day_volume: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    pub asset: String,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub balance: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub reserved: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub unconfirmed: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Balance {
    /// Balance not reserved by open orders or pending withdrawals
    pub fn available(&self) -> Decimal {
        self.balance - self.reserved
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingAddress {
    pub asset: String,
    pub address: String,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub total_received: Decimal,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub total_unconfirmed: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub description: String,
    pub timestamp: i64,
    #[serde(default)]
    pub txid: String,
    #[serde(default, with = "serde_helpers::decimal_or_zero")]
    pub amount: Decimal,
    #[serde(default)]
    pub address: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub pending: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Withdrawal {
    pub id: String,
    pub status: WithdrawalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(
        default,
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub fee: Option<Decimal>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

pub(crate) mod serde_helpers {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::str::FromStr;

    /// Decimals sent as strings; missing, null or blank values read as zero
    pub mod decimal_or_zero {
        use super::*;
        use serde::Serializer;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value = Value::deserialize(deserializer)?;
            if value.is_null() {
                return Ok(Decimal::ZERO);
            }

            if let Some(raw) = value.as_str() {
                if raw.trim().is_empty() {
                    return Ok(Decimal::ZERO);
                }
                return Decimal::from_str(raw.trim()).map_err(serde::de::Error::custom);
            }

            if value.is_number() {
                let raw = value.to_string();
                return Decimal::from_str(&raw)
                    .or_else(|_| Decimal::from_scientific(&raw))
                    .map_err(serde::de::Error::custom);
            }

            Err(serde::de::Error::custom("invalid decimal value"))
        }

        pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&value.to_string())
        }
    }

    /// The API sends `null` instead of an empty list
    pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}
