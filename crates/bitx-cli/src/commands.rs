/*
[INPUT]:  Parsed subcommand and a configured client
[OUTPUT]: JSON value of the endpoint response
[POS]:    Command layer - maps subcommands onto client calls
[UPDATE]: When adding subcommands or exposing new endpoints
*/

use anyhow::{Context, Result};
use bitx_adapter::{BitxClient, ListOrdersQuery, OrderState, TradesQuery, TransactionsQuery};
use clap::{Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::Value;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ticker for the selected pair
    Ticker,
    /// Tickers for every active pair
    Tickers,
    /// Top of the order book for the selected pair
    OrderBook,
    /// Recent public trades
    Trades {
        /// Unix milliseconds; only trades after this time
        #[arg(long)]
        since: Option<i64>,
    },
    /// Your orders on the selected pair
    Orders {
        #[arg(long, value_enum)]
        state: Option<StateArg>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Account balances
    Balance {
        #[arg(long)]
        asset: Option<String>,
    },
    /// Receive address for an asset
    FundingAddress {
        asset: String,
        #[arg(long)]
        address: Option<String>,
    },
    /// Transaction history for an asset
    Transactions {
        asset: String,
        #[arg(long, default_value_t = 0)]
        offset: u64,
        #[arg(long, default_value_t = 10)]
        limit: u64,
    },
    /// All withdrawals, or one by id
    Withdrawals { id: Option<String> },
    /// Fee rates for the selected pair
    FeeInfo,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateArg {
    Pending,
    Complete,
}

impl From<StateArg> for OrderState {
    fn from(state: StateArg) -> Self {
        match state {
            StateArg::Pending => OrderState::Pending,
            StateArg::Complete => OrderState::Complete,
        }
    }
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Ticker => "ticker",
            Command::Tickers => "tickers",
            Command::OrderBook => "order-book",
            Command::Trades { .. } => "trades",
            Command::Orders { .. } => "orders",
            Command::Balance { .. } => "balance",
            Command::FundingAddress { .. } => "funding-address",
            Command::Transactions { .. } => "transactions",
            Command::Withdrawals { .. } => "withdrawals",
            Command::FeeInfo => "fee-info",
        }
    }
}

/// Run one subcommand against the client
pub async fn run(client: &BitxClient, command: Command) -> Result<Value> {
    let name = command.name();
    let value = match command {
        Command::Ticker => to_json(client.get_ticker(None).await),
        Command::Tickers => to_json(client.get_all_tickers().await),
        Command::OrderBook => to_json(client.get_order_book(None).await),
        Command::Trades { since } => to_json(
            client
                .get_trades(TradesQuery { pair: None, since })
                .await,
        ),
        Command::Orders { state, limit } => to_json(
            client
                .get_order_list(ListOrdersQuery {
                    state: state.map(OrderState::from),
                    limit,
                    ..ListOrdersQuery::default()
                })
                .await,
        ),
        Command::Balance { asset } => to_json(client.get_balance(asset.as_deref()).await),
        Command::FundingAddress { asset, address } => to_json(
            client
                .get_funding_address(&asset, address.as_deref())
                .await,
        ),
        Command::Transactions {
            asset,
            offset,
            limit,
        } => to_json(
            client
                .get_transactions(&asset, TransactionsQuery { offset, limit })
                .await,
        ),
        Command::Withdrawals { id: Some(id) } => to_json(client.get_withdrawal(&id).await),
        Command::Withdrawals { id: None } => to_json(client.get_withdrawals().await),
        Command::FeeInfo => to_json(client.get_fee_info(None).await),
    };
    value.with_context(|| format!("{name} request failed"))
}

fn to_json<T: Serialize>(result: bitx_adapter::Result<T>) -> Result<Value> {
    Ok(serde_json::to_value(result?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitx_adapter::{ClientConfig, Credentials};
    use serde_json::json;
    use tokio_test::assert_ok;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> (MockServer, BitxClient) {
        let server = MockServer::start().await;
        let mut client =
            BitxClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
                .expect("client init");
        client.set_credentials(Credentials::new("keyId", "keySecret"));
        (server, client)
    }

    #[tokio::test]
    async fn ticker_output_keeps_decimal_strings() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/1/ticker"))
            .and(query_param("pair", "XBTZAR"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "timestamp": 1366224386716i64,
                "bid": "924.00",
                "ask": "1050.00",
                "last_trade": "950.00",
                "rolling_24_hour_volume": "12.52"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let value = assert_ok!(run(&client, Command::Ticker).await);
        assert_eq!(value["bid"], "924.00");
        assert_eq!(value["timestamp"], 1366224386716i64);
    }

    #[tokio::test]
    async fn orders_maps_state_filter() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/1/listorders"))
            .and(query_param("state", "COMPLETE"))
            .and(query_param("limit", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": null})))
            .expect(1)
            .mount(&server)
            .await;

        let command = Command::Orders {
            state: Some(StateArg::Complete),
            limit: Some(3),
        };
        let value = assert_ok!(run(&client, command).await);
        assert_eq!(value, json!({"orders": []}));
    }

    #[tokio::test]
    async fn withdrawals_by_id() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/1/withdrawals/1212"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "COMPLETED", "id": "1212"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let command = Command::Withdrawals {
            id: Some("1212".to_string()),
        };
        let value = assert_ok!(run(&client, command).await);
        assert_eq!(value["status"], "COMPLETED");
    }

    #[tokio::test]
    async fn failures_name_the_command() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/1/balance"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&server)
            .await;

        let err = run(&client, Command::Balance { asset: None })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "balance request failed");
        assert!(format!("{err:#}").contains("API error 401: Unauthorized"));
    }
}
