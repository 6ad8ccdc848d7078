use anyhow::Result;
use chrono::Utc;
use hesabe_gateway::domain::acquirer::{AcquirerConfig, Environment, Provider};
use hesabe_gateway::domain::transaction::{
    NewTransaction, PaymentTransaction, TransactionOutcome, TransactionStatus,
};
use hesabe_gateway::service::stores::{AcquirerStore, TransactionStore};
use std::sync::Mutex;
use uuid::Uuid;

pub const TEST_SECRET_KEY: &str = "0123456789abcdef0123456789abcdef";
pub const TEST_IV_KEY: &str = "abcdef0123456789";

pub fn acquirer(provider: Provider) -> AcquirerConfig {
    AcquirerConfig {
        provider,
        environment: Environment::Test,
        is_enabled: true,
        secret_key: TEST_SECRET_KEY.to_string(),
        iv_key: TEST_IV_KEY.to_string(),
        merchant_code: "842217".to_string(),
        access_code: "access-1".to_string(),
        api_version: "2.0".to_string(),
        production_url: "https://api.hesabe.example".to_string(),
        sandbox_url: "https://sandbox.hesabe.example".to_string(),
    }
}

#[derive(Default)]
pub struct MemAcquirers {
    pub items: Mutex<Vec<AcquirerConfig>>,
}

impl MemAcquirers {
    pub fn with(config: AcquirerConfig) -> Self {
        MemAcquirers {
            items: Mutex::new(vec![config]),
        }
    }
}

#[async_trait::async_trait]
impl AcquirerStore for MemAcquirers {
    async fn find_by_provider(&self, provider: Provider) -> Result<Option<AcquirerConfig>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.provider == provider)
            .cloned())
    }
}

#[derive(Default)]
pub struct MemTransactions {
    pub items: Mutex<Vec<PaymentTransaction>>,
}

impl MemTransactions {
    pub fn seed(&self, reference: &str, provider: Provider, amount_minor: i64) -> Uuid {
        let transaction_id = Uuid::new_v4();
        self.items.lock().unwrap().push(PaymentTransaction {
            transaction_id,
            reference: reference.to_string(),
            provider,
            amount_minor,
            currency: None,
            status: TransactionStatus::Pending,
            checkout_token: None,
            acquirer_reference: None,
            feedback_data: None,
            state_message: None,
            created_at: Utc::now(),
        });
        transaction_id
    }

    pub fn get(&self, transaction_id: Uuid) -> PaymentTransaction {
        self.items
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.transaction_id == transaction_id)
            .cloned()
            .expect("transaction not found")
    }
}

#[async_trait::async_trait]
impl TransactionStore for MemTransactions {
    async fn insert(&self, tx: NewTransaction) -> Result<PaymentTransaction> {
        let stored = PaymentTransaction {
            transaction_id: tx.transaction_id,
            reference: tx.reference,
            provider: tx.provider,
            amount_minor: tx.amount_minor,
            currency: tx.currency,
            status: TransactionStatus::Pending,
            checkout_token: None,
            acquirer_reference: None,
            feedback_data: None,
            state_message: None,
            created_at: Utc::now(),
        };
        self.items.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_by_reference(&self, reference: &str) -> Result<Vec<PaymentTransaction>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.reference == reference)
            .cloned()
            .collect())
    }

    async fn record_checkout_token(&self, transaction_id: Uuid, token: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap();
        if let Some(tx) = items.iter_mut().find(|t| t.transaction_id == transaction_id) {
            tx.checkout_token = Some(token.to_string());
        }
        Ok(())
    }

    async fn record_feedback(&self, transaction_id: Uuid, raw: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap();
        if let Some(tx) = items.iter_mut().find(|t| t.transaction_id == transaction_id) {
            tx.feedback_data = Some(raw.to_string());
        }
        Ok(())
    }

    async fn apply_status(&self, transaction_id: Uuid, outcome: TransactionOutcome) -> Result<()> {
        let mut items = self.items.lock().unwrap();
        if let Some(tx) = items.iter_mut().find(|t| t.transaction_id == transaction_id) {
            match outcome {
                TransactionOutcome::Done { payment_id } => {
                    tx.status = TransactionStatus::Done;
                    tx.acquirer_reference = payment_id;
                    tx.state_message = None;
                }
                TransactionOutcome::Canceled {
                    payment_id,
                    message,
                } => {
                    tx.status = TransactionStatus::Canceled;
                    tx.acquirer_reference = payment_id;
                    tx.state_message = Some(message);
                }
            }
        }
        Ok(())
    }
}
