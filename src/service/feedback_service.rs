use crate::crypto;
use crate::domain::acquirer::Provider;
use crate::domain::payload::CallbackData;
use crate::domain::transaction::{TransactionOutcome, TransactionStatus};
use crate::errors::PaymentError;
use crate::service::stores::{AcquirerStore, TransactionStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct FeedbackService {
    pub acquirers: Arc<dyn AcquirerStore>,
    pub transactions: Arc<dyn TransactionStore>,
}

impl FeedbackService {
    pub async fn process(
        &self,
        provider: Provider,
        encrypted: &str,
    ) -> Result<TransactionStatus, PaymentError> {
        let acquirer = self
            .acquirers
            .find_by_provider(provider)
            .await?
            .ok_or(PaymentError::ConfigurationMissing(provider))?;

        let plaintext = crypto::decrypt(encrypted, &acquirer.secret_key, &acquirer.iv_key)?;
        let data: CallbackData =
            serde_json::from_str(&plaintext).map_err(PaymentError::MalformedFeedback)?;

        let reference = data.response.order_reference_number.clone();
        tracing::info!("hesabe {} feedback received for reference {}", provider, reference);

        let matches = self.transactions.find_by_reference(&reference).await?;
        let tx = match matches.as_slice() {
            [] => return Err(PaymentError::ReferenceNotFound(reference)),
            [tx] => tx.clone(),
            _ => return Err(PaymentError::AmbiguousReference(reference)),
        };

        self.transactions
            .record_feedback(tx.transaction_id, &plaintext)
            .await?;

        let payment_id = data.response.payment_id.clone();
        if data.status {
            self.transactions
                .apply_status(tx.transaction_id, TransactionOutcome::Done { payment_id })
                .await?;
            Ok(TransactionStatus::Done)
        } else {
            let message = format!(
                "Hesabe: canceled payment with status: {}",
                data.message.as_deref().unwrap_or("unknown")
            );
            self.transactions
                .apply_status(
                    tx.transaction_id,
                    TransactionOutcome::Canceled {
                        payment_id,
                        message,
                    },
                )
                .await?;
            Ok(TransactionStatus::Canceled)
        }
    }
}
