use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::api::AppState;
use crate::domain::{Address, CollectedFees, EventKind, LiquidityAction, SwapAction, Withdrawal};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordWithdrawalRequest {
    pub amount0: u64,
    pub amount1: u64,
    pub to: String,
    pub timestamp: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCollectedFeesRequest {
    pub key: String,
    pub amount0: u64,
    pub amount1: u64,
    pub timestamp: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSwapRequest {
    pub key: String,
    pub amount0: u64,
    pub amount1: u64,
    pub timestamp: u64,
    pub fee: u64,
    pub tx_hash: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordLiquidityActionRequest {
    pub key: String,
    pub amount0: u64,
    pub amount1: u64,
    pub timestamp: u64,
    pub position_id: u64,
    pub pool_id: String,
}

#[derive(Debug, Serialize)]
pub struct RecordedResponse {
    pub key: String,
}

type Created = (StatusCode, Json<RecordedResponse>);

fn created(key: String) -> Created {
    (StatusCode::CREATED, Json(RecordedResponse { key }))
}

fn not_found(kind: EventKind, key: &str) -> AppError {
    AppError::NotFound(format!("no {} recorded under key {}", kind, key))
}

pub async fn record_withdrawal(
    State(state): State<AppState>,
    Json(req): Json<RecordWithdrawalRequest>,
) -> Result<Created, AppError> {
    let to = Address::from_str(&req.to)
        .map_err(|e| AppError::BadRequest(format!("Invalid destination address: {}", e)))?;

    let key = state
        .recorder
        .record_withdrawal(req.amount0, req.amount1, to, req.timestamp)
        .await?;
    Ok(created(key))
}

pub async fn record_collected_fees(
    State(state): State<AppState>,
    Json(req): Json<RecordCollectedFeesRequest>,
) -> Result<Created, AppError> {
    let key = state
        .recorder
        .record_collected_fees(req.key, req.amount0, req.amount1, req.timestamp)
        .await?;
    Ok(created(key))
}

pub async fn record_swap(
    State(state): State<AppState>,
    Json(req): Json<RecordSwapRequest>,
) -> Result<Created, AppError> {
    let key = state
        .recorder
        .record_swap(
            req.key,
            req.amount0,
            req.amount1,
            req.timestamp,
            req.fee,
            req.tx_hash,
        )
        .await?;
    Ok(created(key))
}

pub async fn record_liquidity_action(
    State(state): State<AppState>,
    Json(req): Json<RecordLiquidityActionRequest>,
) -> Result<Created, AppError> {
    let key = state
        .recorder
        .record_liquidity_action(
            req.key,
            req.amount0,
            req.amount1,
            req.timestamp,
            req.position_id,
            req.pool_id,
        )
        .await?;
    Ok(created(key))
}

pub async fn list_withdrawals(
    State(state): State<AppState>,
) -> Result<Json<Vec<Withdrawal>>, AppError> {
    Ok(Json(state.recorder.list_withdrawals().await?))
}

pub async fn list_collected_fees(
    State(state): State<AppState>,
) -> Result<Json<Vec<CollectedFees>>, AppError> {
    Ok(Json(state.recorder.list_collected_fees().await?))
}

pub async fn list_swap_actions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SwapAction>>, AppError> {
    Ok(Json(state.recorder.list_swap_actions().await?))
}

pub async fn list_liquidity_actions(
    State(state): State<AppState>,
) -> Result<Json<Vec<LiquidityAction>>, AppError> {
    Ok(Json(state.recorder.list_liquidity_actions().await?))
}

pub async fn get_withdrawal(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Withdrawal>, AppError> {
    state
        .recorder
        .get_withdrawal(&key)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(EventKind::Withdrawal, &key))
}

pub async fn get_collected_fees(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CollectedFees>, AppError> {
    state
        .recorder
        .get_collected_fees(&key)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(EventKind::CollectedFees, &key))
}

pub async fn get_swap_action(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<SwapAction>, AppError> {
    state
        .recorder
        .get_swap_action(&key)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(EventKind::Swap, &key))
}

pub async fn get_liquidity_action(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LiquidityAction>, AppError> {
    state
        .recorder
        .get_liquidity_action(&key)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(EventKind::LiquidityAction, &key))
}
