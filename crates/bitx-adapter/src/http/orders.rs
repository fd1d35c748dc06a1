/*
[INPUT]:  Order parameters and API key credentials
[OUTPUT]: Order listings, order details, placement and cancellation results
[POS]:    HTTP layer - trading endpoints (require auth)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use rust_decimal::Decimal;
use reqwest::Method;

use crate::http::{BitxClient, Result};
use crate::types::{
    FeeInfo, LimitOrderOptions, LimitOrderRequest, Limits, ListOrdersQuery, ListOrdersV2Query,
    ListTradesQuery, MarketOrderOptions, MarketOrderRequest, Order, OrderListResponse,
    OrderListV2Response, OrderType, OrderV2, OrderV3Query, PairQuery, PostOrderResponse,
    StopOrderRequest, StopOrderResponse, TradeListResponse,
};

impl BitxClient {
    /// List orders (v1)
    ///
    /// GET /api/1/listorders?pair={pair}&state={state}
    pub async fn get_order_list(&self, mut query: ListOrdersQuery) -> Result<OrderListResponse> {
        query.pair = Some(self.pair_or_default(query.pair.as_deref()));
        let url = self.url("/api/1/listorders")?;
        self.request(Method::GET, url, Some(&query)).await
    }

    /// List orders (v2)
    ///
    /// GET /api/exchange/2/listorders?pair={pair}&closed={closed}
    pub async fn get_order_list_v2(
        &self,
        mut query: ListOrdersV2Query,
    ) -> Result<OrderListV2Response> {
        query.pair = Some(self.pair_or_default(query.pair.as_deref()));
        let url = self.url("/api/exchange/2/listorders")?;
        self.request(Method::GET, url, Some(&query)).await
    }

    /// List the user's own trades
    ///
    /// GET /api/1/listtrades?pair={pair}
    pub async fn get_trade_list(&self, mut query: ListTradesQuery) -> Result<TradeListResponse> {
        query.pair = Some(self.pair_or_default(query.pair.as_deref()));
        let url = self.url("/api/1/listtrades")?;
        self.request(Method::GET, url, Some(&query)).await
    }

    /// Legacy order limits
    ///
    /// GET /api/1/BTCZAR/getlimits
    #[deprecated(note = "use get_balance instead")]
    pub async fn get_limits(&self) -> Result<Limits> {
        tracing::warn!("BitxClient::get_limits is deprecated, use get_balance instead");
        let url = self.url("/api/1/BTCZAR/getlimits")?;
        self.send(Method::GET, url).await
    }

    /// Fee rates and 30 day volume
    ///
    /// GET /api/1/fee_info?pair={pair}
    pub async fn get_fee_info(&self, pair: Option<&str>) -> Result<FeeInfo> {
        let query = PairQuery {
            pair: Some(self.pair_or_default(pair)),
        };
        let url = self.url("/api/1/fee_info")?;
        self.request(Method::GET, url, Some(&query)).await
    }

    /// Cancel a pending order
    ///
    /// POST /api/1/stoporder
    pub async fn stop_order(&self, order_id: &str) -> Result<StopOrderResponse> {
        let body = StopOrderRequest {
            order_id: order_id.to_string(),
        };
        let url = self.url("/api/1/stoporder")?;
        self.request(Method::POST, url, Some(&body)).await
    }

    /// Place a limit bid
    ///
    /// POST /api/1/postorder (type=BID)
    pub async fn post_buy_order(
        &self,
        volume: Decimal,
        price: Decimal,
        options: LimitOrderOptions,
    ) -> Result<PostOrderResponse> {
        self.post_limit_order(OrderType::Bid, volume, price, options)
            .await
    }

    /// Place a limit ask
    ///
    /// POST /api/1/postorder (type=ASK)
    pub async fn post_sell_order(
        &self,
        volume: Decimal,
        price: Decimal,
        options: LimitOrderOptions,
    ) -> Result<PostOrderResponse> {
        self.post_limit_order(OrderType::Ask, volume, price, options)
            .await
    }

    async fn post_limit_order(
        &self,
        order_type: OrderType,
        volume: Decimal,
        price: Decimal,
        options: LimitOrderOptions,
    ) -> Result<PostOrderResponse> {
        let body = LimitOrderRequest::new(order_type, volume, price, options, self.pair());
        let url = self.url("/api/1/postorder")?;
        self.request(Method::POST, url, Some(&body)).await
    }

    /// Market buy spending `counter_volume` of the counter currency
    ///
    /// POST /api/1/marketorder (type=BUY)
    pub async fn post_market_buy_order(
        &self,
        counter_volume: Decimal,
        options: MarketOrderOptions,
    ) -> Result<PostOrderResponse> {
        let body = MarketOrderRequest::buy(counter_volume, options, self.pair());
        let url = self.url("/api/1/marketorder")?;
        self.request(Method::POST, url, Some(&body)).await
    }

    /// Market sell of `base_volume` of the base currency
    ///
    /// POST /api/1/marketorder (type=SELL)
    pub async fn post_market_sell_order(
        &self,
        base_volume: Decimal,
        options: MarketOrderOptions,
    ) -> Result<PostOrderResponse> {
        let body = MarketOrderRequest::sell(base_volume, options, self.pair());
        let url = self.url("/api/1/marketorder")?;
        self.request(Method::POST, url, Some(&body)).await
    }

    /// GET /api/1/orders/{id}
    pub async fn get_order(&self, id: &str) -> Result<Order> {
        let url = self.url_with_id("/api/1/orders", id)?;
        self.send(Method::GET, url).await
    }

    /// GET /api/exchange/2/orders/{id}
    pub async fn get_order_v2(&self, id: &str) -> Result<OrderV2> {
        let url = self.url_with_id("/api/exchange/2/orders", id)?;
        self.send(Method::GET, url).await
    }

    /// GET /api/exchange/3/order?id={id}&client_order_id={client_order_id}
    pub async fn get_order_v3(&self, query: OrderV3Query) -> Result<OrderV2> {
        let url = self.url("/api/exchange/3/order")?;
        self.request(Method::GET, url, Some(&query)).await
    }
}
