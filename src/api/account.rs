use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::AppState;
use crate::domain::OpticAccount;
use crate::engine::ThresholdEstimate;
use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub address: String,
    pub account_identifier: String,
}

pub async fn get_identity(State(state): State<AppState>) -> Json<IdentityResponse> {
    let identity = state.balances.identity();
    Json(IdentityResponse {
        address: identity.address.to_string(),
        account_identifier: identity.account_id.to_hex().to_string(),
    })
}

pub async fn get_balance(State(state): State<AppState>) -> Result<Json<OpticAccount>, AppError> {
    let account = state.balances.combined_balance().await?;
    Ok(Json(account))
}

pub async fn get_threshold(
    State(state): State<AppState>,
) -> Result<Json<ThresholdEstimate>, AppError> {
    let estimate = state.estimator.project(&state.balances).await?;
    Ok(Json(estimate))
}
