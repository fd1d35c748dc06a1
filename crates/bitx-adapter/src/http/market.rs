/*
[INPUT]:  Currency pair and query parameters
[OUTPUT]: Market data (tickers, order book, recent trades)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{BitxClient, Result};
use crate::types::{OrderBook, PairQuery, Ticker, TickersResponse, TradesQuery, TradesResponse};
use reqwest::Method;

impl BitxClient {
    /// Ticker for a single pair
    ///
    /// GET /api/1/ticker?pair={pair}
    pub async fn get_ticker(&self, pair: Option<&str>) -> Result<Ticker> {
        let query = PairQuery {
            pair: Some(self.pair_or_default(pair)),
        };
        let url = self.url("/api/1/ticker")?;
        self.request(Method::GET, url, Some(&query)).await
    }

    /// Tickers for every active pair
    ///
    /// GET /api/1/tickers
    pub async fn get_all_tickers(&self) -> Result<TickersResponse> {
        let url = self.url("/api/1/tickers")?;
        self.send(Method::GET, url).await
    }

    /// Top of the order book
    ///
    /// GET /api/1/orderbook?pair={pair}
    pub async fn get_order_book(&self, pair: Option<&str>) -> Result<OrderBook> {
        let query = PairQuery {
            pair: Some(self.pair_or_default(pair)),
        };
        let url = self.url("/api/1/orderbook")?;
        self.request(Method::GET, url, Some(&query)).await
    }

    /// Recent public trades
    ///
    /// GET /api/1/trades?pair={pair}&since={since}
    pub async fn get_trades(&self, mut query: TradesQuery) -> Result<TradesResponse> {
        query.pair = Some(self.pair_or_default(query.pair.as_deref()));
        let url = self.url("/api/1/trades")?;
        self.request(Method::GET, url, Some(&query)).await
    }
}
