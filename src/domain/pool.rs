//! Read-only mirror of the external liquidity pool's state.

use crate::domain::Nat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDescriptor {
    pub address: String,
    pub standard: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolMetadata {
    pub fee: u64,
    pub key: String,
    pub sqrt_price_x96: Nat,
    pub tick: i64,
    pub liquidity: Nat,
    pub token0: TokenDescriptor,
    pub token1: TokenDescriptor,
    pub max_liquidity_per_tick: Nat,
    pub next_position_id: u64,
}

/// Business error reported by the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum PoolError {
    #[error("common error")]
    CommonError,
    #[error("internal error: {0}")]
    InternalError(String),
    #[error("unsupported token: {0}")]
    UnsupportedToken(String),
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// The pool's `metadata` reply: `{"ok": {...}}` or `{"err": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolMetadataReply {
    #[serde(rename = "ok")]
    Ok(PoolMetadata),
    #[serde(rename = "err")]
    Err(PoolError),
}

impl PoolMetadataReply {
    pub fn into_result(self) -> Result<PoolMetadata, PoolError> {
        match self {
            PoolMetadataReply::Ok(metadata) => Ok(metadata),
            PoolMetadataReply::Err(err) => Err(err),
        }
    }
}
