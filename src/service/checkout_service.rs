use crate::crypto;
use crate::domain::payload::{CheckoutPayload, GatewayEnvelope, TokenResponse};
use crate::domain::transaction::{CheckoutRendering, CreateCheckoutRequest, NewTransaction};
use crate::errors::PaymentError;
use crate::gateways::{CheckoutGateway, CheckoutRequest};
use crate::service::stores::{AcquirerStore, TransactionStore};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct CheckoutService {
    pub acquirers: Arc<dyn AcquirerStore>,
    pub transactions: Arc<dyn TransactionStore>,
    pub gateway: Arc<dyn CheckoutGateway>,
    pub public_base_url: String,
    pub default_currency: String,
    pub fallback_url: String,
}

impl CheckoutService {
    pub async fn process(
        &self,
        req: CreateCheckoutRequest,
    ) -> Result<CheckoutRendering, PaymentError> {
        let acquirer = self
            .acquirers
            .find_by_provider(req.provider)
            .await?
            .filter(|a| a.is_enabled)
            .ok_or(PaymentError::ConfigurationMissing(req.provider))?;

        let tx = self
            .transactions
            .insert(NewTransaction {
                transaction_id: Uuid::new_v4(),
                reference: req.reference.clone(),
                provider: req.provider,
                amount_minor: req.amount_minor,
                currency: req.currency.clone(),
            })
            .await?;

        let currency = tx
            .currency
            .clone()
            .unwrap_or_else(|| self.default_currency.clone());
        let payload = CheckoutPayload::build(
            &acquirer,
            &tx.reference,
            tx.amount_minor,
            &currency,
            &self.public_base_url,
        );
        let plaintext =
            serde_json::to_string(&payload).map_err(|e| PaymentError::Internal(e.into()))?;
        let encrypted = crypto::encrypt(&plaintext, &acquirer.secret_key, &acquirer.iv_key)?;

        let gateway_url = acquirer.form_url().trim_end_matches('/').to_string();
        let raw = self
            .gateway
            .checkout(CheckoutRequest {
                encrypted_payload: encrypted,
                gateway_url: gateway_url.clone(),
                access_code: acquirer.access_code.clone(),
                environment: acquirer.environment,
            })
            .await?;

        if let Ok(envelope) = serde_json::from_str::<GatewayEnvelope>(&raw) {
            if !envelope.status {
                return Err(PaymentError::GatewayRejected(
                    envelope
                        .message
                        .unwrap_or_else(|| "payment method not supported".to_string()),
                ));
            }
        }

        let decrypted = crypto::decrypt(&raw, &acquirer.secret_key, &acquirer.iv_key)?;
        let response: TokenResponse =
            serde_json::from_str(&decrypted).map_err(PaymentError::MalformedFeedback)?;
        if !response.status {
            return Err(PaymentError::ServiceUnavailable);
        }

        let token = response.response.data;
        self.transactions
            .record_checkout_token(tx.transaction_id, &token)
            .await?;

        let api_url = if token.is_empty() {
            self.fallback_url.clone()
        } else {
            format!("{}/payment", gateway_url)
        };

        tracing::info!(
            "hesabe {} checkout prepared for reference {}",
            tx.provider,
            tx.reference
        );

        Ok(CheckoutRendering {
            transaction_id: tx.transaction_id,
            reference: tx.reference,
            api_url,
            token,
        })
    }
}
