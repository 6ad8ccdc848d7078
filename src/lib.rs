pub mod config;
pub mod crypto;
pub mod errors;
pub mod domain {
    pub mod acquirer;
    pub mod payload;
    pub mod transaction;
}
pub mod gateways;
pub mod http {
    pub mod handlers {
        pub mod acquirers;
        pub mod callbacks;
        pub mod ops;
        pub mod payments;
    }
    pub mod middleware {
        pub mod admin_auth;
    }
}
pub mod repo {
    pub mod acquirers_repo;
    pub mod transactions_repo;
}
pub mod service {
    pub mod checkout_service;
    pub mod feedback_service;
    pub mod stores;
}

#[derive(Clone)]
pub struct AppState {
    pub checkout_service: service::checkout_service::CheckoutService,
    pub feedback_service: service::feedback_service::FeedbackService,
    pub acquirers_repo: repo::acquirers_repo::AcquirersRepo,
    pub transactions_repo: repo::transactions_repo::TransactionsRepo,
}
