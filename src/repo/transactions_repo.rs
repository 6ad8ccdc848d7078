use crate::domain::acquirer::Provider;
use crate::domain::transaction::{
    NewTransaction, PaymentTransaction, TransactionOutcome, TransactionStatus,
};
use crate::service::stores::TransactionStore;
use anyhow::anyhow;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct TransactionsRepo {
    pub pool: PgPool,
}

fn map_transaction(r: &PgRow) -> anyhow::Result<PaymentTransaction> {
    let provider: String = r.get("provider");
    let status: String = r.get("status");

    Ok(PaymentTransaction {
        transaction_id: r.get("transaction_id"),
        reference: r.get("reference"),
        provider: Provider::parse(&provider)
            .ok_or_else(|| anyhow!("unknown provider tag {provider}"))?,
        amount_minor: r.get("amount_minor"),
        currency: r.get("currency"),
        status: TransactionStatus::parse(&status),
        checkout_token: r.get("checkout_token"),
        acquirer_reference: r.get("acquirer_reference"),
        feedback_data: r.get("feedback_data"),
        state_message: r.get("state_message"),
        created_at: r.get("created_at"),
    })
}

impl TransactionsRepo {
    pub async fn insert(&self, tx: NewTransaction) -> anyhow::Result<PaymentTransaction> {
        let created_at = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO payment_transactions (
                transaction_id, reference, provider, amount_minor, currency, status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(tx.transaction_id)
        .bind(tx.reference.clone())
        .bind(tx.provider.as_str())
        .bind(tx.amount_minor)
        .bind(tx.currency.clone())
        .bind(TransactionStatus::Pending.as_str())
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(PaymentTransaction {
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
            created_at,
        })
    }

    pub async fn find_by_reference(
        &self,
        reference: &str,
    ) -> anyhow::Result<Vec<PaymentTransaction>> {
        let rows = sqlx::query(
            "SELECT transaction_id, reference, provider, amount_minor, currency, status, checkout_token, acquirer_reference, feedback_data, state_message, created_at FROM payment_transactions WHERE reference = $1 ORDER BY created_at ASC",
        )
        .bind(reference)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_transaction).collect()
    }

    pub async fn record_checkout_token(
        &self,
        transaction_id: Uuid,
        token: &str,
    ) -> anyhow::Result<()> {
        sqlx::query(
            "UPDATE payment_transactions SET checkout_token = $2, updated_at = now() WHERE transaction_id = $1",
        )
        .bind(transaction_id)
        .bind(token)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn record_feedback(&self, transaction_id: Uuid, raw: &str) -> anyhow::Result<()> {
        sqlx::query(
            "UPDATE payment_transactions SET feedback_data = $2, updated_at = now() WHERE transaction_id = $1",
        )
        .bind(transaction_id)
        .bind(raw)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn apply_status(
        &self,
        transaction_id: Uuid,
        outcome: TransactionOutcome,
    ) -> anyhow::Result<()> {
        match outcome {
            TransactionOutcome::Done { payment_id } => {
                sqlx::query(
                    "UPDATE payment_transactions SET status = $2, acquirer_reference = $3, state_message = NULL, updated_at = now() WHERE transaction_id = $1",
                )
                .bind(transaction_id)
                .bind(TransactionStatus::Done.as_str())
                .bind(payment_id)
                .execute(&self.pool)
                .await?;
            }
            TransactionOutcome::Canceled {
                payment_id,
                message,
            } => {
                sqlx::query(
                    "UPDATE payment_transactions SET status = $2, acquirer_reference = $3, state_message = $4, updated_at = now() WHERE transaction_id = $1",
                )
                .bind(transaction_id)
                .bind(TransactionStatus::Canceled.as_str())
                .bind(payment_id)
                .bind(message)
                .execute(&self.pool)
                .await?;
            }
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl TransactionStore for TransactionsRepo {
    async fn insert(&self, tx: NewTransaction) -> anyhow::Result<PaymentTransaction> {
        TransactionsRepo::insert(self, tx).await
    }

    async fn find_by_reference(&self, reference: &str) -> anyhow::Result<Vec<PaymentTransaction>> {
        TransactionsRepo::find_by_reference(self, reference).await
    }

    async fn record_checkout_token(&self, transaction_id: Uuid, token: &str) -> anyhow::Result<()> {
        TransactionsRepo::record_checkout_token(self, transaction_id, token).await
    }

    async fn record_feedback(&self, transaction_id: Uuid, raw: &str) -> anyhow::Result<()> {
        TransactionsRepo::record_feedback(self, transaction_id, raw).await
    }

    async fn apply_status(
        &self,
        transaction_id: Uuid,
        outcome: TransactionOutcome,
    ) -> anyhow::Result<()> {
        TransactionsRepo::apply_status(self, transaction_id, outcome).await
    }
}
