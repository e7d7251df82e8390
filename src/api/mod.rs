pub mod account;
pub mod events;
pub mod health;
pub mod pool;

use crate::datasource::ChainSource;
use crate::db::Repository;
use crate::domain::SelfIdentity;
use crate::engine::{BalanceAggregator, EventRecorder, PoolMetadataReader, ThresholdEstimator};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub recorder: Arc<EventRecorder>,
    pub balances: Arc<BalanceAggregator>,
    pub estimator: ThresholdEstimator,
    pub pool: Arc<PoolMetadataReader>,
}

impl AppState {
    pub fn new(
        repo: Arc<Repository>,
        source: Arc<dyn ChainSource>,
        identity: SelfIdentity,
        estimator: ThresholdEstimator,
    ) -> Self {
        Self {
            recorder: Arc::new(EventRecorder::new(repo)),
            balances: Arc::new(BalanceAggregator::new(source.clone(), identity)),
            estimator,
            pool: Arc::new(PoolMetadataReader::new(source)),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/identity", get(account::get_identity))
        .route("/v1/balance", get(account::get_balance))
        .route("/v1/threshold", get(account::get_threshold))
        .route("/v1/pool/metadata", get(pool::get_pool_metadata))
        .route(
            "/v1/withdrawals",
            get(events::list_withdrawals).post(events::record_withdrawal),
        )
        .route("/v1/withdrawals/:key", get(events::get_withdrawal))
        .route(
            "/v1/collected-fees",
            get(events::list_collected_fees).post(events::record_collected_fees),
        )
        .route("/v1/collected-fees/:key", get(events::get_collected_fees))
        .route(
            "/v1/swaps",
            get(events::list_swap_actions).post(events::record_swap),
        )
        .route("/v1/swaps/:key", get(events::get_swap_action))
        .route(
            "/v1/liquidity-actions",
            get(events::list_liquidity_actions).post(events::record_liquidity_action),
        )
        .route(
            "/v1/liquidity-actions/:key",
            get(events::get_liquidity_action),
        )
        .layer(cors)
        .with_state(state)
}
