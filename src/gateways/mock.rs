use crate::crypto;
use crate::errors::PaymentError;
use crate::gateways::{CheckoutGateway, CheckoutRequest};

pub struct MockGateway {
    pub secret_key: String,
    pub iv_key: String,
    pub behavior: String,
}

impl MockGateway {
    fn encrypted(&self, body: &str) -> Result<String, PaymentError> {
        Ok(crypto::encrypt(body, &self.secret_key, &self.iv_key)?)
    }
}

#[async_trait::async_trait]
impl CheckoutGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn checkout(&self, _request: CheckoutRequest) -> Result<String, PaymentError> {
        match self.behavior.as_str() {
            "REJECT" => Ok(
                r#"{"status":false,"code":400,"message":"merchant not allowed"}"#.to_string(),
            ),
            "SERVICE_DOWN" => self.encrypted(
                r#"{"status":false,"message":"account disabled","response":{"data":""}}"#,
            ),
            "EMPTY_TOKEN" => self.encrypted(
                r#"{"status":true,"message":"ok","response":{"data":""}}"#,
            ),
            "UNREACHABLE" => Err(PaymentError::GatewayUnreachable(
                "mock gateway unreachable".to_string(),
            )),
            _ => {
                let body = format!(
                    r#"{{"status":true,"message":"Transaction token generated","response":{{"data":"tok_{}"}}}}"#,
                    uuid::Uuid::new_v4().simple()
                );
                self.encrypted(&body)
            }
        }
    }
}
