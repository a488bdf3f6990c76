use crate::app::config::Config;
use crate::models::payment::Payment;
use crate::services::wire::{self, WireError};
use reqwest::header::{HeaderValue, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Client, Request, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, warn};

const API_KEY_HEADER: &str = "apikey";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("invalid api key header value")]
    ApiKey(#[from] reqwest::header::InvalidHeaderValue),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("payment service returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error(transparent)]
    Wire(#[from] WireError),
}

/// Submits payments to the Decidir service.
#[derive(Debug, Clone)]
pub struct PaymentClient {
    client: Client,
    config: Config,
}

impl PaymentClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn build_create_request(&self, payment: &Payment) -> Result<Request, ClientError> {
        let url = self.config.endpoint("payments")?;
        let body = wire::encode(payment)?;
        let api_key = HeaderValue::from_str(&self.config.private_api_key)?;

        let request = self
            .client
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .body(body)
            .build()?;

        Ok(request)
    }

    /// Sends `payment` and returns the service's view of it, including the
    /// assigned `id`.
    pub async fn create_payment(&self, payment: &Payment) -> Result<Payment, ClientError> {
        let request = self.build_create_request(payment)?;
        let site_tx = payment.site_transaction_id.as_deref().unwrap_or("-");

        match payment.amount {
            Some(amount) => info!("Submitting payment {} ({} minor units)", site_tx, amount),
            None => info!("Submitting payment {} (no amount)", site_tx),
        }

        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Failed to reach payment service for {}: {}", site_tx, e);
                return Err(ClientError::Http(e));
            }
        };

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            warn!("Payment {} rejected with {}", site_tx, status);
            return Err(ClientError::Status { status, body });
        }

        let created = wire::decode_slice(&body)?;
        info!("Payment {} accepted with id {}", site_tx, created.id);
        Ok(created)
    }

    pub async fn health_check(&self) -> bool {
        let url = match self.config.endpoint("healthcheck") {
            Ok(url) => url,
            Err(e) => {
                warn!("Invalid health check endpoint: {}", e);
                return false;
            }
        };

        match self
            .client
            .get(url)
            .timeout(Duration::from_millis(self.config.timeout_ms.min(10_000)))
            .send()
            .await
        {
            Ok(response) => {
                let is_healthy = response.status().is_success();
                if is_healthy {
                    info!("Payment service is healthy");
                } else {
                    warn!("Payment service returned status: {}", response.status());
                }
                is_healthy
            }
            Err(e) => {
                warn!("Payment service health check failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, PaymentType};

    fn client(api_url: &str) -> PaymentClient {
        let mut config = Config::new(api_url, "4ae76f00234843d1af5994ed4674fd76");
        config.timeout_ms = 500;
        PaymentClient::new(&config).unwrap()
    }

    fn sample_payment() -> Payment {
        let mut payment = Payment::new();
        payment.site_transaction_id = Some("tx-77".to_string());
        payment.currency = Some(Currency::Usd);
        payment.amount = Some(1999);
        payment.installments = 1;
        payment.payment_type = Some(PaymentType::Single);
        payment
    }

    #[test]
    fn test_create_request_shape() {
        let client = client("https://developers.decidir.com/api/v2");
        let payment = sample_payment();
        let request = client.build_create_request(&payment).unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(
            request.url().as_str(),
            "https://developers.decidir.com/api/v2/payments"
        );
        assert_eq!(
            request.headers()[API_KEY_HEADER],
            "4ae76f00234843d1af5994ed4674fd76"
        );
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(request.headers()[CACHE_CONTROL], "no-cache");

        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(wire::decode_slice(body).unwrap(), payment);
    }

    #[test]
    fn test_bad_endpoint_is_reported() {
        let client = client("::not-a-url::");
        assert!(matches!(
            client.build_create_request(&sample_payment()),
            Err(ClientError::Endpoint(_))
        ));
    }

    #[test]
    fn test_bad_api_key_is_reported() {
        let config = Config::new("http://localhost", "line\nbreak");
        let client = PaymentClient::new(&config).unwrap();
        assert!(matches!(
            client.build_create_request(&sample_payment()),
            Err(ClientError::ApiKey(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_http_error() {
        let client = client("http://127.0.0.1:1/api/v2");
        let result = client.create_payment(&sample_payment()).await;
        assert!(matches!(result, Err(ClientError::Http(_))));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_unhealthy() {
        let client = client("http://127.0.0.1:1/api/v2");
        assert!(!client.health_check().await);
    }
}
