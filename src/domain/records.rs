//! Ledger event records. Written once, never updated.

use crate::domain::Address;
use serde::{Deserialize, Serialize};

/// A fee withdrawal to an external address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    pub amount0: u64,
    pub amount1: u64,
    pub to: Address,
    pub timestamp: u64,
}

/// Fees collected from a position at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectedFees {
    pub amount0: u64,
    pub amount1: u64,
    pub timestamp: u64,
}

/// One completed swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapAction {
    pub amount0: u64,
    pub amount1: u64,
    pub timestamp: u64,
    pub fee: u64,
    pub tx_hash: String,
}

/// A liquidity add or remove against a position in a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityAction {
    pub amount0: u64,
    pub amount1: u64,
    pub timestamp: u64,
    pub position_id: u64,
    pub pool_id: String,
}

/// Which of the four event logs a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Withdrawal,
    CollectedFees,
    Swap,
    LiquidityAction,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Withdrawal => write!(f, "withdrawal"),
            EventKind::CollectedFees => write!(f, "collected fees"),
            EventKind::Swap => write!(f, "swap"),
            EventKind::LiquidityAction => write!(f, "liquidity action"),
        }
    }
}
