use crate::domain::acquirer::Environment;
use crate::errors::PaymentError;

pub mod hesabe;
pub mod mock;

#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub encrypted_payload: String,
    pub gateway_url: String,
    pub access_code: String,
    pub environment: Environment,
}

#[async_trait::async_trait]
pub trait CheckoutGateway: Send + Sync {
    fn name(&self) -> &'static str;

    async fn checkout(&self, request: CheckoutRequest) -> Result<String, PaymentError>;
}
