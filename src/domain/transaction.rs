use crate::domain::acquirer::Provider;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Done,
    Canceled,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Done => "DONE",
            TransactionStatus::Canceled => "CANCELED",
        }
    }

    pub fn parse(value: &str) -> TransactionStatus {
        match value {
            "DONE" => TransactionStatus::Done,
            "CANCELED" => TransactionStatus::Canceled,
            _ => TransactionStatus::Pending,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaymentTransaction {
    pub transaction_id: Uuid,
    pub reference: String,
    pub provider: Provider,
    pub amount_minor: i64,
    pub currency: Option<String>,
    pub status: TransactionStatus,
    pub checkout_token: Option<String>,
    pub acquirer_reference: Option<String>,
    pub feedback_data: Option<String>,
    pub state_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub transaction_id: Uuid,
    pub reference: String,
    pub provider: Provider,
    pub amount_minor: i64,
    pub currency: Option<String>,
}

#[derive(Debug, Clone)]
pub enum TransactionOutcome {
    Done {
        payment_id: Option<String>,
    },
    Canceled {
        payment_id: Option<String>,
        message: String,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCheckoutRequest {
    pub reference: String,
    pub amount_minor: i64,
    pub currency: Option<String>,
    pub provider: Provider,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckoutRendering {
    pub transaction_id: Uuid,
    pub reference: String,
    pub api_url: String,
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionView {
    pub transaction_id: Uuid,
    pub reference: String,
    pub provider: Provider,
    pub amount_minor: i64,
    pub currency: Option<String>,
    pub status: TransactionStatus,
    pub acquirer_reference: Option<String>,
    pub state_message: Option<String>,
}

impl From<&PaymentTransaction> for TransactionView {
    fn from(tx: &PaymentTransaction) -> Self {
        TransactionView {
            transaction_id: tx.transaction_id,
            reference: tx.reference.clone(),
            provider: tx.provider,
            amount_minor: tx.amount_minor,
            currency: tx.currency.clone(),
            status: tx.status,
            acquirer_reference: tx.acquirer_reference.clone(),
            state_message: tx.state_message.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}
