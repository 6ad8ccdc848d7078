mod common;

use common::{acquirer, MemAcquirers, MemTransactions, TEST_IV_KEY, TEST_SECRET_KEY};
use hesabe_gateway::crypto;
use hesabe_gateway::domain::acquirer::Provider;
use hesabe_gateway::domain::transaction::TransactionStatus;
use hesabe_gateway::errors::PaymentError;
use hesabe_gateway::service::feedback_service::FeedbackService;
use std::sync::Arc;

fn service(acquirers: Arc<MemAcquirers>, transactions: Arc<MemTransactions>) -> FeedbackService {
    FeedbackService {
        acquirers,
        transactions,
    }
}

fn encrypted_callback(status: bool, reference: &str, payment_id: &str, message: &str) -> String {
    let body = serde_json::json!({
        "status": status,
        "code": if status { 1 } else { 0 },
        "message": message,
        "response": {
            "data": "",
            "paymentId": payment_id,
            "orderReferenceNumber": reference
        }
    })
    .to_string();
    crypto::encrypt(&body, TEST_SECRET_KEY, TEST_IV_KEY).unwrap()
}

#[tokio::test]
async fn success_marks_transaction_done() {
    let acquirers = Arc::new(MemAcquirers::with(acquirer(Provider::HesabeKnet)));
    let transactions = Arc::new(MemTransactions::default());
    let id = transactions.seed("SO001", Provider::HesabeKnet, 10500);
    let svc = service(acquirers, transactions.clone());

    let data = encrypted_callback(true, "SO001", "158163396745", "Transaction Successful");
    let out = svc.process(Provider::HesabeKnet, &data).await.unwrap();

    assert_eq!(out, TransactionStatus::Done);
    let stored = transactions.get(id);
    assert_eq!(stored.status, TransactionStatus::Done);
    assert_eq!(stored.acquirer_reference.as_deref(), Some("158163396745"));
    assert!(stored.feedback_data.unwrap().contains("SO001"));
    assert!(stored.state_message.is_none());
}

#[tokio::test]
async fn failure_marks_transaction_canceled_with_message() {
    let acquirers = Arc::new(MemAcquirers::with(acquirer(Provider::HesabeKnet)));
    let transactions = Arc::new(MemTransactions::default());
    let id = transactions.seed("SO001", Provider::HesabeKnet, 10500);
    let svc = service(acquirers, transactions.clone());

    let data = encrypted_callback(false, "SO001", "158163396746", "CANCELLED");
    let out = svc.process(Provider::HesabeKnet, &data).await.unwrap();

    assert_eq!(out, TransactionStatus::Canceled);
    let stored = transactions.get(id);
    assert_eq!(stored.status, TransactionStatus::Canceled);
    assert!(stored.state_message.unwrap().contains("CANCELLED"));
}

#[tokio::test]
async fn unknown_reference_is_not_found() {
    let acquirers = Arc::new(MemAcquirers::with(acquirer(Provider::HesabeKnet)));
    let transactions = Arc::new(MemTransactions::default());
    transactions.seed("SO001", Provider::HesabeKnet, 10500);
    let svc = service(acquirers, transactions.clone());

    let data = encrypted_callback(true, "SO999", "158163396747", "Transaction Successful");
    let err = svc.process(Provider::HesabeKnet, &data).await.unwrap_err();

    assert!(matches!(err, PaymentError::ReferenceNotFound(ref r) if r == "SO999"));
    let stored = transactions.items.lock().unwrap();
    assert!(stored.iter().all(|t| t.status == TransactionStatus::Pending));
}

#[tokio::test]
async fn duplicate_references_are_ambiguous_and_untouched() {
    let acquirers = Arc::new(MemAcquirers::with(acquirer(Provider::HesabeKnet)));
    let transactions = Arc::new(MemTransactions::default());
    transactions.seed("SO001", Provider::HesabeKnet, 10500);
    transactions.seed("SO001", Provider::HesabeKnet, 10500);
    let svc = service(acquirers, transactions.clone());

    let data = encrypted_callback(true, "SO001", "158163396748", "Transaction Successful");
    let err = svc.process(Provider::HesabeKnet, &data).await.unwrap_err();

    assert!(matches!(err, PaymentError::AmbiguousReference(ref r) if r == "SO001"));
    let stored = transactions.items.lock().unwrap();
    assert!(stored
        .iter()
        .all(|t| t.status == TransactionStatus::Pending && t.feedback_data.is_none()));
}

#[tokio::test]
async fn tampered_payload_fails_before_lookup() {
    let acquirers = Arc::new(MemAcquirers::with(acquirer(Provider::HesabeKnet)));
    let transactions = Arc::new(MemTransactions::default());
    transactions.seed("SO001", Provider::HesabeKnet, 10500);
    let svc = service(acquirers, transactions.clone());

    let body = r#"{"status":true,"response":{"orderReferenceNumber":"SO001"}}"#;
    let data = crypto::encrypt(body, "fedcba9876543210fedcba9876543210", TEST_IV_KEY).unwrap();
    let err = svc.process(Provider::HesabeKnet, &data).await.unwrap_err();

    assert!(matches!(
        err,
        PaymentError::Decryption(_) | PaymentError::MalformedFeedback(_)
    ));
    let stored = transactions.items.lock().unwrap();
    assert!(stored.iter().all(|t| t.feedback_data.is_none()));
}

#[tokio::test]
async fn missing_acquirer_is_configuration_error() {
    let acquirers = Arc::new(MemAcquirers::default());
    let transactions = Arc::new(MemTransactions::default());
    let svc = service(acquirers, transactions);

    let data = encrypted_callback(true, "SO001", "158163396749", "Transaction Successful");
    let err = svc.process(Provider::HesabeMpgs, &data).await.unwrap_err();

    assert!(matches!(err, PaymentError::ConfigurationMissing(_)));
}

#[tokio::test]
async fn later_callback_is_reapplied() {
    let acquirers = Arc::new(MemAcquirers::with(acquirer(Provider::HesabeKnet)));
    let transactions = Arc::new(MemTransactions::default());
    let id = transactions.seed("SO001", Provider::HesabeKnet, 10500);
    let svc = service(acquirers, transactions.clone());

    let done = encrypted_callback(true, "SO001", "158163396750", "Transaction Successful");
    svc.process(Provider::HesabeKnet, &done).await.unwrap();
    assert_eq!(transactions.get(id).status, TransactionStatus::Done);

    let canceled = encrypted_callback(false, "SO001", "158163396750", "CANCELLED");
    svc.process(Provider::HesabeKnet, &canceled).await.unwrap();
    assert_eq!(transactions.get(id).status, TransactionStatus::Canceled);
}
