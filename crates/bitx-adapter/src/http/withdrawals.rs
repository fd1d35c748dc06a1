/*
[INPUT]:  Withdrawal ids, methods and amounts plus API key credentials
[OUTPUT]: Withdrawal records
[POS]:    HTTP layer - withdrawal endpoints (require auth)
[UPDATE]: When withdrawal flow or response format changes
*/

use reqwest::Method;
use rust_decimal::Decimal;

use crate::http::{BitxClient, Result};
use crate::types::{Withdrawal, WithdrawalOptions, WithdrawalRequest, WithdrawalsResponse};

const WITHDRAWALS_PATH: &str = "/api/1/withdrawals/";

impl BitxClient {
    /// GET /api/1/withdrawals/
    pub async fn get_withdrawals(&self) -> Result<WithdrawalsResponse> {
        let url = self.url(WITHDRAWALS_PATH)?;
        self.send(Method::GET, url).await
    }

    /// GET /api/1/withdrawals/{id}
    pub async fn get_withdrawal(&self, id: &str) -> Result<Withdrawal> {
        let url = self.url_with_id(WITHDRAWALS_PATH, id)?;
        self.send(Method::GET, url).await
    }

    /// Request a withdrawal using method `kind` (e.g. `ZAR_EFT`)
    ///
    /// POST /api/1/withdrawals/
    pub async fn request_withdrawal(
        &self,
        kind: &str,
        amount: Decimal,
        options: WithdrawalOptions,
    ) -> Result<Withdrawal> {
        let body = WithdrawalRequest {
            kind: kind.to_string(),
            amount,
            beneficiary_id: options.beneficiary_id,
        };
        let url = self.url(WITHDRAWALS_PATH)?;
        self.request(Method::POST, url, Some(&body)).await
    }

    /// Cancel a withdrawal that has not been processed yet
    ///
    /// DELETE /api/1/withdrawals/{id}
    pub async fn cancel_withdrawal(&self, id: &str) -> Result<Withdrawal> {
        let url = self.url_with_id(WITHDRAWALS_PATH, id)?;
        self.send(Method::DELETE, url).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{BitxClient, ClientConfig, Credentials};
    use crate::types::{WithdrawalOptions, WithdrawalStatus};
    use rust_decimal::Decimal;
    use serde_json::json;
    use wiremock::matchers::{body_string, method, path};
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
    async fn test_get_withdrawals() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/1/withdrawals/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "withdrawals": [
                    {"status": "PENDING", "id": "2221"},
                    {"status": "COMPLETED", "id": "1121"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client.get_withdrawals().await.expect("get_withdrawals failed");

        let statuses: Vec<_> = response.withdrawals.iter().map(|w| w.status.clone()).collect();
        assert_eq!(
            statuses,
            vec![WithdrawalStatus::Pending, WithdrawalStatus::Completed]
        );
    }

    #[tokio::test]
    async fn test_get_withdrawal_by_id() {
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

        let withdrawal = client.get_withdrawal("1212").await.expect("get_withdrawal failed");
        assert_eq!(withdrawal.id, "1212");
    }

    #[tokio::test]
    async fn test_get_withdrawal_encodes_id() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/1/withdrawals/12%2F12"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"status": "PENDING", "id": "12/12"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        client.get_withdrawal("12/12").await.expect("get_withdrawal failed");
    }

    #[tokio::test]
    async fn test_request_withdrawal() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/1/withdrawals/"))
            .and(body_string("type=ZAR_EFT&amount=1000"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "PENDING", "id": "1212"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let withdrawal = client
            .request_withdrawal("ZAR_EFT", Decimal::from(1000), WithdrawalOptions::default())
            .await
            .expect("request_withdrawal failed");
        assert_eq!(withdrawal.status, WithdrawalStatus::Pending);
    }

    #[tokio::test]
    async fn test_request_withdrawal_to_beneficiary() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/1/withdrawals/"))
            .and(body_string("type=ZAR_EFT&amount=250.5&beneficiary_id=3466"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "PENDING", "id": "1213"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let options = WithdrawalOptions {
            beneficiary_id: Some("3466".to_string()),
        };
        client
            .request_withdrawal("ZAR_EFT", Decimal::new(2505, 1), options)
            .await
            .expect("request_withdrawal failed");
    }

    #[tokio::test]
    async fn test_cancel_withdrawal() {
        let (server, client) = setup().await;
        Mock::given(method("DELETE"))
            .and(path("/api/1/withdrawals/1212"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "CANCELLED", "id": "1212"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let withdrawal = client
            .cancel_withdrawal("1212")
            .await
            .expect("cancel_withdrawal failed");
        assert_eq!(withdrawal.status, WithdrawalStatus::Cancelled);

        let received = server.received_requests().await.expect("recorded");
        assert!(received[0].url.query().is_none());
        assert!(received[0].body.is_empty());
    }
}
