use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::Router;
use hesabe_gateway::config::AppConfig;
use hesabe_gateway::gateways::hesabe::HesabeGateway;
use hesabe_gateway::repo::acquirers_repo::AcquirersRepo;
use hesabe_gateway::repo::transactions_repo::TransactionsRepo;
use hesabe_gateway::service::checkout_service::CheckoutService;
use hesabe_gateway::service::feedback_service::FeedbackService;
use hesabe_gateway::AppState;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let acquirers_repo = AcquirersRepo { pool: pool.clone() };
    let transactions_repo = TransactionsRepo { pool: pool.clone() };

    let gateway = Arc::new(HesabeGateway {
        timeout_ms: cfg.gateway_timeout_ms,
        client: reqwest::Client::new(),
    });

    let checkout_service = CheckoutService {
        acquirers: Arc::new(acquirers_repo.clone()),
        transactions: Arc::new(transactions_repo.clone()),
        gateway,
        public_base_url: cfg.public_base_url.clone(),
        default_currency: cfg.default_currency.clone(),
        fallback_url: cfg.fallback_url.clone(),
    };

    let feedback_service = FeedbackService {
        acquirers: Arc::new(acquirers_repo.clone()),
        transactions: Arc::new(transactions_repo.clone()),
    };

    let state = AppState {
        checkout_service,
        feedback_service,
        acquirers_repo,
        transactions_repo,
    };

    let admin_key = cfg.internal_api_key.clone();
    let admin_routes = Router::new()
        .route(
            "/admin/acquirers",
            get(hesabe_gateway::http::handlers::acquirers::list_acquirers),
        )
        .route(
            "/admin/acquirers/:provider",
            put(hesabe_gateway::http::handlers::acquirers::upsert_acquirer),
        )
        .layer(from_fn_with_state(
            admin_key,
            hesabe_gateway::http::middleware::admin_auth::require_internal_api_key,
        ));

    let app = Router::new()
        .route("/health", get(hesabe_gateway::http::handlers::payments::health))
        .route(
            "/payments",
            post(hesabe_gateway::http::handlers::payments::create_checkout),
        )
        .route(
            "/payments/:reference",
            get(hesabe_gateway::http::handlers::payments::get_transaction),
        )
        .route(
            "/payment/hesabe",
            post(hesabe_gateway::http::handlers::callbacks::hesabe_redirect),
        )
        .route(
            "/payment/hesabe/knet/return",
            get(hesabe_gateway::http::handlers::callbacks::knet_callback)
                .post(hesabe_gateway::http::handlers::callbacks::knet_callback),
        )
        .route(
            "/payment/hesabe/knet/fail",
            get(hesabe_gateway::http::handlers::callbacks::knet_callback)
                .post(hesabe_gateway::http::handlers::callbacks::knet_callback),
        )
        .route(
            "/payment/hesabe/mpgs/return",
            get(hesabe_gateway::http::handlers::callbacks::mpgs_callback)
                .post(hesabe_gateway::http::handlers::callbacks::mpgs_callback),
        )
        .route(
            "/payment/hesabe/mpgs/fail",
            get(hesabe_gateway::http::handlers::callbacks::mpgs_callback)
                .post(hesabe_gateway::http::handlers::callbacks::mpgs_callback),
        )
        .route("/ops/readiness", get(hesabe_gateway::http::handlers::ops::readiness))
        .route("/ops/liveness", get(hesabe_gateway::http::handlers::ops::liveness))
        .merge(admin_routes)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
