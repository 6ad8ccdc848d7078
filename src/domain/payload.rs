use crate::domain::acquirer::AcquirerConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
    pub merchant_code: String,
    pub currency: String,
    pub amount: String,
    pub response_url: String,
    pub failure_url: String,
    pub order_reference_number: String,
    pub payment_type: u8,
    pub version: String,
    pub variable2: String,
}

impl CheckoutPayload {
    pub fn build(
        acquirer: &AcquirerConfig,
        reference: &str,
        amount_minor: i64,
        currency: &str,
        public_base_url: &str,
    ) -> CheckoutPayload {
        let amount = format_major_units(amount_minor, currency_exponent(currency));
        let base = public_base_url.trim_end_matches('/');
        let segment = acquirer.provider.route_segment();

        CheckoutPayload {
            merchant_code: acquirer.merchant_code.clone(),
            currency: currency.to_string(),
            amount: amount.clone(),
            response_url: format!("{}/payment/hesabe/{}/return", base, segment),
            failure_url: format!("{}/payment/hesabe/{}/fail", base, segment),
            order_reference_number: reference.to_string(),
            payment_type: acquirer.provider.payment_type(),
            version: acquirer.api_version.clone(),
            variable2: amount,
        }
    }
}

pub fn currency_exponent(code: &str) -> u32 {
    match code {
        "KWD" | "BHD" | "OMR" | "JOD" | "TND" => 3,
        "JPY" | "KRW" | "VND" => 0,
        _ => 2,
    }
}

pub fn format_major_units(amount_minor: i64, exponent: u32) -> String {
    if exponent == 0 {
        return amount_minor.to_string();
    }
    let sign = if amount_minor < 0 { "-" } else { "" };
    let abs = amount_minor.unsigned_abs();
    let scale = 10u64.pow(exponent);
    format!(
        "{}{}.{:0width$}",
        sign,
        abs / scale,
        abs % scale,
        width = exponent as usize
    )
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayEnvelope {
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub response: TokenData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenData {
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackData {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub response: CallbackResponse,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackResponse {
    pub order_reference_number: String,
    #[serde(default)]
    pub payment_id: Option<String>,
}
