use crate::errors::PaymentError;
use crate::gateways::{CheckoutGateway, CheckoutRequest};

pub struct HesabeGateway {
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[async_trait::async_trait]
impl CheckoutGateway for HesabeGateway {
    fn name(&self) -> &'static str {
        "hesabe"
    }

    async fn checkout(&self, request: CheckoutRequest) -> Result<String, PaymentError> {
        let checkout_url = format!("{}/checkout", request.gateway_url.trim_end_matches('/'));

        let resp = self
            .client
            .post(&checkout_url)
            .header("accessCode", &request.access_code)
            .form(&[("data", request.encrypted_payload.as_str())])
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await;

        match resp {
            Ok(r) if r.status().is_success() => r
                .text()
                .await
                .map_err(|e| PaymentError::GatewayUnreachable(e.to_string())),
            Ok(r) => {
                let status = r.status();
                tracing::warn!(
                    "hesabe checkout returned HTTP {} ({} environment)",
                    status.as_u16(),
                    request.environment.as_str()
                );
                Err(PaymentError::GatewayUnreachable(format!(
                    "checkout endpoint returned HTTP {}",
                    status.as_u16()
                )))
            }
            Err(e) if e.is_timeout() => {
                Err(PaymentError::GatewayUnreachable("gateway timeout".to_string()))
            }
            Err(e) => Err(PaymentError::GatewayUnreachable(e.to_string())),
        }
    }
}
