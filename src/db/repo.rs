//! Repository owning the four event stores.

use super::store::KeyedStore;
use crate::domain::{CollectedFees, LiquidityAction, SwapAction, Withdrawal};
use sqlx::sqlite::SqlitePool;

/// The four independent event logs, all backed by one SQLite pool.
#[derive(Clone)]
pub struct Repository {
    pub withdrawals: KeyedStore<Withdrawal>,
    pub collected_fees: KeyedStore<CollectedFees>,
    pub swaps: KeyedStore<SwapAction>,
    pub liquidity_actions: KeyedStore<LiquidityAction>,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository {
            withdrawals: KeyedStore::new(pool.clone()),
            collected_fees: KeyedStore::new(pool.clone()),
            swaps: KeyedStore::new(pool.clone()),
            liquidity_actions: KeyedStore::new(pool),
        }
    }
}
