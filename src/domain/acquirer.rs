use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    HesabeKnet,
    HesabeMpgs,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::HesabeKnet => "hesabe_knet",
            Provider::HesabeMpgs => "hesabe_mpgs",
        }
    }

    pub fn parse(value: &str) -> Option<Provider> {
        match value {
            "hesabe_knet" => Some(Provider::HesabeKnet),
            "hesabe_mpgs" => Some(Provider::HesabeMpgs),
            _ => None,
        }
    }

    pub fn payment_type(&self) -> u8 {
        match self {
            Provider::HesabeKnet => 1,
            Provider::HesabeMpgs => 2,
        }
    }

    pub fn payment_method(&self) -> &'static str {
        match self {
            Provider::HesabeKnet => "hesabe_knet",
            Provider::HesabeMpgs => "hesabe_mpgs",
        }
    }

    pub fn route_segment(&self) -> &'static str {
        match self {
            Provider::HesabeKnet => "knet",
            Provider::HesabeMpgs => "mpgs",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Test,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }

    pub fn parse(value: &str) -> Option<Environment> {
        match value {
            "test" => Some(Environment::Test),
            "production" => Some(Environment::Production),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AcquirerConfig {
    pub provider: Provider,
    pub environment: Environment,
    pub is_enabled: bool,
    pub secret_key: String,
    pub iv_key: String,
    pub merchant_code: String,
    pub access_code: String,
    pub api_version: String,
    pub production_url: String,
    pub sandbox_url: String,
}

impl AcquirerConfig {
    pub fn form_url(&self) -> &str {
        match self.environment {
            Environment::Test => &self.sandbox_url,
            Environment::Production => &self.production_url,
        }
    }
}
