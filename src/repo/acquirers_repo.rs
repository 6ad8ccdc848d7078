use crate::domain::acquirer::{AcquirerConfig, Environment, Provider};
use crate::service::stores::AcquirerStore;
use anyhow::anyhow;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

#[derive(Clone)]
pub struct AcquirersRepo {
    pub pool: PgPool,
}

fn map_acquirer(r: &PgRow) -> anyhow::Result<AcquirerConfig> {
    let provider: String = r.get("provider");
    let environment: String = r.get("environment");

    Ok(AcquirerConfig {
        provider: Provider::parse(&provider)
            .ok_or_else(|| anyhow!("unknown provider tag {provider}"))?,
        environment: Environment::parse(&environment)
            .ok_or_else(|| anyhow!("unknown environment {environment}"))?,
        is_enabled: r.get("is_enabled"),
        secret_key: r.get("secret_key"),
        iv_key: r.get("iv_key"),
        merchant_code: r.get("merchant_code"),
        access_code: r.get("access_code"),
        api_version: r.get("api_version"),
        production_url: r.get("production_url"),
        sandbox_url: r.get("sandbox_url"),
    })
}

impl AcquirersRepo {
    pub async fn find_by_provider(
        &self,
        provider: Provider,
    ) -> anyhow::Result<Option<AcquirerConfig>> {
        let row = sqlx::query(
            "SELECT provider, environment, is_enabled, secret_key, iv_key, merchant_code, access_code, api_version, production_url, sandbox_url FROM hesabe_acquirers WHERE provider = $1",
        )
        .bind(provider.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_acquirer(&r)).transpose()
    }

    pub async fn list(&self) -> anyhow::Result<Vec<AcquirerConfig>> {
        let rows = sqlx::query(
            "SELECT provider, environment, is_enabled, secret_key, iv_key, merchant_code, access_code, api_version, production_url, sandbox_url FROM hesabe_acquirers ORDER BY provider ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_acquirer).collect()
    }

    pub async fn upsert(&self, config: &AcquirerConfig) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO hesabe_acquirers (
                provider, environment, is_enabled, secret_key, iv_key,
                merchant_code, access_code, api_version, production_url, sandbox_url
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (provider) DO UPDATE SET
                environment = EXCLUDED.environment,
                is_enabled = EXCLUDED.is_enabled,
                secret_key = EXCLUDED.secret_key,
                iv_key = EXCLUDED.iv_key,
                merchant_code = EXCLUDED.merchant_code,
                access_code = EXCLUDED.access_code,
                api_version = EXCLUDED.api_version,
                production_url = EXCLUDED.production_url,
                sandbox_url = EXCLUDED.sandbox_url,
                updated_at = now()
            "#,
        )
        .bind(config.provider.as_str())
        .bind(config.environment.as_str())
        .bind(config.is_enabled)
        .bind(config.secret_key.clone())
        .bind(config.iv_key.clone())
        .bind(config.merchant_code.clone())
        .bind(config.access_code.clone())
        .bind(config.api_version.clone())
        .bind(config.production_url.clone())
        .bind(config.sandbox_url.clone())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl AcquirerStore for AcquirersRepo {
    async fn find_by_provider(&self, provider: Provider) -> anyhow::Result<Option<AcquirerConfig>> {
        AcquirersRepo::find_by_provider(self, provider).await
    }
}
