use crate::domain::transaction::{CreateCheckoutRequest, TransactionView};
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

pub async fn create_checkout(
    State(state): State<AppState>,
    Json(req): Json<CreateCheckoutRequest>,
) -> impl IntoResponse {
    match state.checkout_service.process(req).await {
        Ok(resp) => (axum::http::StatusCode::OK, Json(resp)).into_response(),
        Err(e) => (e.status(), Json(e.envelope())).into_response(),
    }
}

pub async fn get_transaction(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> impl IntoResponse {
    match state.transactions_repo.find_by_reference(&reference).await {
        Ok(matches) => match matches.as_slice() {
            [] => (
                axum::http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"error": {"code": "REFERENCE_NOT_FOUND", "message": format!("no transaction found for reference {reference}")}})),
            )
                .into_response(),
            [tx] => (axum::http::StatusCode::OK, Json(TransactionView::from(tx))).into_response(),
            _ => (
                axum::http::StatusCode::CONFLICT,
                Json(serde_json::json!({"error": {"code": "AMBIGUOUS_REFERENCE", "message": format!("multiple transactions found for reference {reference}")}})),
            )
                .into_response(),
        },
        Err(e) => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

pub async fn health() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "ok")
}
