use crate::domain::acquirer::{AcquirerConfig, Environment, Provider};
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct UpsertAcquirerRequest {
    pub environment: Environment,
    pub is_enabled: bool,
    pub secret_key: String,
    pub iv_key: String,
    pub merchant_code: String,
    pub access_code: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default)]
    pub production_url: String,
    #[serde(default)]
    pub sandbox_url: String,
}

fn default_api_version() -> String {
    "2.0".to_string()
}

#[derive(Debug, Serialize)]
pub struct AcquirerView {
    pub provider: Provider,
    pub environment: Environment,
    pub is_enabled: bool,
    pub merchant_code: String,
    pub api_version: String,
    pub production_url: String,
    pub sandbox_url: String,
}

pub async fn list_acquirers(State(state): State<AppState>) -> impl IntoResponse {
    match state.acquirers_repo.list().await {
        Ok(items) => {
            let resp: Vec<AcquirerView> = items
                .into_iter()
                .map(|a| AcquirerView {
                    provider: a.provider,
                    environment: a.environment,
                    is_enabled: a.is_enabled,
                    merchant_code: a.merchant_code,
                    api_version: a.api_version,
                    production_url: a.production_url,
                    sandbox_url: a.sandbox_url,
                })
                .collect();
            (axum::http::StatusCode::OK, Json(resp)).into_response()
        }
        Err(e) => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

pub async fn upsert_acquirer(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Json(req): Json<UpsertAcquirerRequest>,
) -> impl IntoResponse {
    let Some(provider) = Provider::parse(&provider) else {
        return (
            axum::http::StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": {"code": "UNKNOWN_PROVIDER", "message": format!("unknown provider tag {provider}")}})),
        )
            .into_response();
    };

    let config = AcquirerConfig {
        provider,
        environment: req.environment,
        is_enabled: req.is_enabled,
        secret_key: req.secret_key,
        iv_key: req.iv_key,
        merchant_code: req.merchant_code,
        access_code: req.access_code,
        api_version: req.api_version,
        production_url: req.production_url,
        sandbox_url: req.sandbox_url,
    };

    match state.acquirers_repo.upsert(&config).await {
        Ok(()) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({"updated": true})),
        )
            .into_response(),
        Err(e) => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}
