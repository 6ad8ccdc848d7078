use crate::crypto::CryptoError;
use crate::domain::acquirer::Provider;
use crate::domain::transaction::{ErrorEnvelope, ErrorPayload};
use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("failed to decrypt gateway payload: {0}")]
    Decryption(#[from] CryptoError),
    #[error("gateway payload is not the expected json shape: {0}")]
    MalformedFeedback(#[source] serde_json::Error),
    #[error("merchant does not support this payment method: {0}")]
    GatewayRejected(String),
    #[error("the service is not available for this account")]
    ServiceUnavailable,
    #[error("no transaction found for reference {0}")]
    ReferenceNotFound(String),
    #[error("multiple transactions found for reference {0}")]
    AmbiguousReference(String),
    #[error("no enabled acquirer configured for {0}")]
    ConfigurationMissing(Provider),
    #[error("gateway unreachable: {0}")]
    GatewayUnreachable(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PaymentError {
    pub fn status(&self) -> StatusCode {
        match self {
            PaymentError::Decryption(_) => StatusCode::BAD_REQUEST,
            PaymentError::MalformedFeedback(_) => StatusCode::BAD_REQUEST,
            PaymentError::GatewayRejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PaymentError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            PaymentError::ReferenceNotFound(_) => StatusCode::NOT_FOUND,
            PaymentError::AmbiguousReference(_) => StatusCode::CONFLICT,
            PaymentError::ConfigurationMissing(_) => StatusCode::SERVICE_UNAVAILABLE,
            PaymentError::GatewayUnreachable(_) => StatusCode::BAD_GATEWAY,
            PaymentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PaymentError::Decryption(_) => "DECRYPTION_FAILED",
            PaymentError::MalformedFeedback(_) => "MALFORMED_FEEDBACK",
            PaymentError::GatewayRejected(_) => "GATEWAY_REJECTED",
            PaymentError::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            PaymentError::ReferenceNotFound(_) => "REFERENCE_NOT_FOUND",
            PaymentError::AmbiguousReference(_) => "AMBIGUOUS_REFERENCE",
            PaymentError::ConfigurationMissing(_) => "ACQUIRER_NOT_CONFIGURED",
            PaymentError::GatewayUnreachable(_) => "GATEWAY_UNREACHABLE",
            PaymentError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error: ErrorPayload {
                code: self.code().to_string(),
                message: self.to_string(),
                details: None,
            },
        }
    }
}
