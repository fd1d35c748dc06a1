/*
[INPUT]:  Asset codes and API key credentials
[OUTPUT]: Balances, funding addresses and transaction history
[POS]:    HTTP layer - account endpoints (require auth)
[UPDATE]: When adding new account endpoints or changing response format
*/

use reqwest::Method;

use crate::http::{BitxClient, Result};
use crate::types::{
    AssetQuery, BalanceResponse, FundingAddress, FundingAddressQuery, TransactionsQuery,
    TransactionsRequest, TransactionsResponse,
};

impl BitxClient {
    /// Account balances, optionally filtered to one asset
    ///
    /// GET /api/1/balance?asset={asset}
    pub async fn get_balance(&self, asset: Option<&str>) -> Result<BalanceResponse> {
        let url = self.url("/api/1/balance")?;
        match asset {
            Some(asset) => {
                let query = AssetQuery {
                    asset: asset.to_string(),
                };
                self.request(Method::GET, url, Some(&query)).await
            }
            None => self.send(Method::GET, url).await,
        }
    }

    /// Default receive address for `asset`, or the named one
    ///
    /// GET /api/1/funding_address?asset={asset}&address={address}
    pub async fn get_funding_address(
        &self,
        asset: &str,
        address: Option<&str>,
    ) -> Result<FundingAddress> {
        let query = FundingAddressQuery {
            asset: asset.to_string(),
            address: address.map(str::to_string),
        };
        let url = self.url("/api/1/funding_address")?;
        self.request(Method::GET, url, Some(&query)).await
    }

    /// Allocate a fresh receive address
    ///
    /// POST /api/1/funding_address
    pub async fn create_funding_address(&self, asset: &str) -> Result<FundingAddress> {
        let body = AssetQuery {
            asset: asset.to_string(),
        };
        let url = self.url("/api/1/funding_address")?;
        self.request(Method::POST, url, Some(&body)).await
    }

    /// Page through account transactions (defaults: offset 0, limit 10)
    ///
    /// GET /api/1/transactions?asset={asset}&offset={offset}&limit={limit}
    pub async fn get_transactions(
        &self,
        asset: &str,
        page: TransactionsQuery,
    ) -> Result<TransactionsResponse> {
        let query = TransactionsRequest {
            asset: asset.to_string(),
            offset: page.offset,
            limit: page.limit,
        };
        let url = self.url("/api/1/transactions")?;
        self.request(Method::GET, url, Some(&query)).await
    }
}
