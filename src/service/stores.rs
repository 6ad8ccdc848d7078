use crate::domain::acquirer::{AcquirerConfig, Provider};
use crate::domain::transaction::{NewTransaction, PaymentTransaction, TransactionOutcome};
use anyhow::Result;
use uuid::Uuid;

#[async_trait::async_trait]
pub trait AcquirerStore: Send + Sync {
    async fn find_by_provider(&self, provider: Provider) -> Result<Option<AcquirerConfig>>;
}

#[async_trait::async_trait]
pub trait TransactionStore: Send + Sync {
    async fn insert(&self, tx: NewTransaction) -> Result<PaymentTransaction>;

    async fn find_by_reference(&self, reference: &str) -> Result<Vec<PaymentTransaction>>;

    async fn record_checkout_token(&self, transaction_id: Uuid, token: &str) -> Result<()>;

    async fn record_feedback(&self, transaction_id: Uuid, raw: &str) -> Result<()>;

    async fn apply_status(&self, transaction_id: Uuid, outcome: TransactionOutcome) -> Result<()>;
}
