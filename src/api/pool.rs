use axum::extract::State;
use axum::Json;

use crate::api::AppState;
use crate::domain::PoolMetadata;

/// Pool metadata, or `null` when the pool cannot provide it.
pub async fn get_pool_metadata(State(state): State<AppState>) -> Json<Option<PoolMetadata>> {
    Json(state.pool.pool_metadata().await)
}
