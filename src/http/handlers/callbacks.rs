use crate::domain::acquirer::Provider;
use crate::AppState;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RedirectForm {
    pub form_url: String,
}

pub async fn knet_callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackParams>,
    form: Option<Form<CallbackParams>>,
) -> Response {
    handle_callback(state, Provider::HesabeKnet, query, form).await
}

pub async fn mpgs_callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackParams>,
    form: Option<Form<CallbackParams>>,
) -> Response {
    handle_callback(state, Provider::HesabeMpgs, query, form).await
}

async fn handle_callback(
    state: AppState,
    provider: Provider,
    query: CallbackParams,
    form: Option<Form<CallbackParams>>,
) -> Response {
    let data = form.and_then(|Form(f)| f.data).or(query.data);
    let Some(data) = data else {
        return (
            axum::http::StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": {"code": "MISSING_CALLBACK_DATA", "message": "data field is required"}})),
        )
            .into_response();
    };

    match state.feedback_service.process(provider, &data).await {
        Ok(_) => Redirect::to("/payment/status").into_response(),
        Err(e) => (e.status(), Json(e.envelope())).into_response(),
    }
}

pub async fn hesabe_redirect(Form(form): Form<RedirectForm>) -> impl IntoResponse {
    Redirect::to(&form.form_url)
}
