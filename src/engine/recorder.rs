//! Write and read paths for the four event logs.

use crate::db::{KeyedStore, Repository, StoreError, StoredRecord};
use crate::domain::{
    derive_withdrawal_key, Address, CollectedFees, EventKind, LiquidityAction, SwapAction,
    Withdrawal,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("{kind} already recorded under key {key}")]
    Duplicate { kind: EventKind, key: String },
    #[error("{0} key must not be empty")]
    EmptyKey(EventKind),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Number of records held by each event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCounts {
    pub withdrawals: usize,
    pub collected_fees: usize,
    pub swap_actions: usize,
    pub liquidity_actions: usize,
}

/// Sole writer of the event logs. Each call touches exactly one store and
/// completes its write before returning.
#[derive(Clone)]
pub struct EventRecorder {
    repo: Arc<Repository>,
}

impl EventRecorder {
    pub fn new(repo: Arc<Repository>) -> Self {
        Self { repo }
    }

    /// Record a withdrawal under its derived key and return that key.
    pub async fn record_withdrawal(
        &self,
        amount0: u64,
        amount1: u64,
        to: Address,
        timestamp: u64,
    ) -> Result<String, RecordError> {
        let key = derive_withdrawal_key(amount0, amount1, &to);
        let record = Withdrawal {
            amount0,
            amount1,
            to,
            timestamp,
        };
        insert_once(&self.repo.withdrawals, EventKind::Withdrawal, key, &record).await
    }

    pub async fn record_collected_fees(
        &self,
        key: String,
        amount0: u64,
        amount1: u64,
        timestamp: u64,
    ) -> Result<String, RecordError> {
        let record = CollectedFees {
            amount0,
            amount1,
            timestamp,
        };
        insert_once(&self.repo.collected_fees, EventKind::CollectedFees, key, &record).await
    }

    pub async fn record_swap(
        &self,
        key: String,
        amount0: u64,
        amount1: u64,
        timestamp: u64,
        fee: u64,
        tx_hash: String,
    ) -> Result<String, RecordError> {
        let record = SwapAction {
            amount0,
            amount1,
            timestamp,
            fee,
            tx_hash,
        };
        insert_once(&self.repo.swaps, EventKind::Swap, key, &record).await
    }

    pub async fn record_liquidity_action(
        &self,
        key: String,
        amount0: u64,
        amount1: u64,
        timestamp: u64,
        position_id: u64,
        pool_id: String,
    ) -> Result<String, RecordError> {
        let record = LiquidityAction {
            amount0,
            amount1,
            timestamp,
            position_id,
            pool_id,
        };
        insert_once(
            &self.repo.liquidity_actions,
            EventKind::LiquidityAction,
            key,
            &record,
        )
        .await
    }

    pub async fn list_withdrawals(&self) -> Result<Vec<Withdrawal>, StoreError> {
        logged(EventKind::Withdrawal, "list", self.repo.withdrawals.values().await)
    }

    pub async fn list_collected_fees(&self) -> Result<Vec<CollectedFees>, StoreError> {
        logged(EventKind::CollectedFees, "list", self.repo.collected_fees.values().await)
    }

    pub async fn list_swap_actions(&self) -> Result<Vec<SwapAction>, StoreError> {
        logged(EventKind::Swap, "list", self.repo.swaps.values().await)
    }

    pub async fn list_liquidity_actions(&self) -> Result<Vec<LiquidityAction>, StoreError> {
        logged(
            EventKind::LiquidityAction,
            "list",
            self.repo.liquidity_actions.values().await,
        )
    }

    pub async fn event_counts(&self) -> Result<EventCounts, StoreError> {
        Ok(EventCounts {
            withdrawals: logged(
                EventKind::Withdrawal,
                "count",
                self.repo.withdrawals.count().await,
            )?,
            collected_fees: logged(
                EventKind::CollectedFees,
                "count",
                self.repo.collected_fees.count().await,
            )?,
            swap_actions: logged(EventKind::Swap, "count", self.repo.swaps.count().await)?,
            liquidity_actions: logged(
                EventKind::LiquidityAction,
                "count",
                self.repo.liquidity_actions.count().await,
            )?,
        })
    }

    pub async fn get_withdrawal(&self, key: &str) -> Result<Option<Withdrawal>, StoreError> {
        logged(EventKind::Withdrawal, "get", self.repo.withdrawals.get(key).await)
    }

    pub async fn get_collected_fees(&self, key: &str) -> Result<Option<CollectedFees>, StoreError> {
        logged(EventKind::CollectedFees, "get", self.repo.collected_fees.get(key).await)
    }

    pub async fn get_swap_action(&self, key: &str) -> Result<Option<SwapAction>, StoreError> {
        logged(EventKind::Swap, "get", self.repo.swaps.get(key).await)
    }

    pub async fn get_liquidity_action(
        &self,
        key: &str,
    ) -> Result<Option<LiquidityAction>, StoreError> {
        logged(
            EventKind::LiquidityAction,
            "get",
            self.repo.liquidity_actions.get(key).await,
        )
    }
}

/// Log a failed read where it is detected, then hand it back unchanged.
fn logged<T>(kind: EventKind, op: &str, result: Result<T, StoreError>) -> Result<T, StoreError> {
    if let Err(e) = &result {
        error!("Failed to {} {} records: {}", op, kind, e);
    }
    result
}

async fn insert_once<R: StoredRecord>(
    store: &KeyedStore<R>,
    kind: EventKind,
    key: String,
    record: &R,
) -> Result<String, RecordError> {
    if key.is_empty() {
        warn!("Rejected {} with empty key", kind);
        return Err(RecordError::EmptyKey(kind));
    }

    match store.insert(&key, record).await {
        Ok(None) => {
            info!("Recorded {} under key {}", kind, key);
            Ok(key)
        }
        Ok(Some(_existing)) => {
            warn!("Duplicate {} key {}, keeping the first record", kind, key);
            Err(RecordError::Duplicate { kind, key })
        }
        Err(e) => {
            error!("Failed to record {} under key {}: {}", kind, key, e);
            Err(e.into())
        }
    }
}
