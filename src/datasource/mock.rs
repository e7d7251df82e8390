//! Mock chain source for testing without network calls.

use super::{ChainSource, DataSourceError};
use crate::domain::{
    AccountIdentifier, Address, CoinBalance, PoolError, PoolMetadata, PoolMetadataReply,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock chain source returning predefined replies and counting calls.
#[derive(Debug, Clone)]
pub struct MockChainSource {
    coin_balance: Result<u64, DataSourceError>,
    token_balance: Result<u64, DataSourceError>,
    pool_reply: Result<PoolMetadataReply, DataSourceError>,
    coin_calls: Arc<AtomicUsize>,
    token_calls: Arc<AtomicUsize>,
    pool_calls: Arc<AtomicUsize>,
}

impl MockChainSource {
    /// Zero balances and a pool that answers `CommonError`.
    pub fn new() -> Self {
        Self {
            coin_balance: Ok(0),
            token_balance: Ok(0),
            pool_reply: Ok(PoolMetadataReply::Err(PoolError::CommonError)),
            coin_calls: Arc::new(AtomicUsize::new(0)),
            token_calls: Arc::new(AtomicUsize::new(0)),
            pool_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_coin_balance(mut self, e8s: u64) -> Self {
        self.coin_balance = Ok(e8s);
        self
    }

    pub fn with_token_balance(mut self, amount: u64) -> Self {
        self.token_balance = Ok(amount);
        self
    }

    pub fn with_pool_metadata(mut self, metadata: PoolMetadata) -> Self {
        self.pool_reply = Ok(PoolMetadataReply::Ok(metadata));
        self
    }

    pub fn with_pool_error(mut self, error: PoolError) -> Self {
        self.pool_reply = Ok(PoolMetadataReply::Err(error));
        self
    }

    pub fn with_coin_failure(mut self, error: DataSourceError) -> Self {
        self.coin_balance = Err(error);
        self
    }

    pub fn with_token_failure(mut self, error: DataSourceError) -> Self {
        self.token_balance = Err(error);
        self
    }

    pub fn with_pool_failure(mut self, error: DataSourceError) -> Self {
        self.pool_reply = Err(error);
        self
    }

    pub fn coin_calls(&self) -> usize {
        self.coin_calls.load(Ordering::SeqCst)
    }

    pub fn token_calls(&self) -> usize {
        self.token_calls.load(Ordering::SeqCst)
    }

    pub fn pool_calls(&self) -> usize {
        self.pool_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockChainSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChainSource for MockChainSource {
    async fn account_balance(
        &self,
        _account: &AccountIdentifier,
    ) -> Result<CoinBalance, DataSourceError> {
        self.coin_calls.fetch_add(1, Ordering::SeqCst);
        self.coin_balance.clone().map(|e8s| CoinBalance { e8s })
    }

    async fn icrc1_balance_of(&self, _owner: &Address) -> Result<u64, DataSourceError> {
        self.token_calls.fetch_add(1, Ordering::SeqCst);
        self.token_balance.clone()
    }

    async fn pool_metadata(&self) -> Result<PoolMetadataReply, DataSourceError> {
        self.pool_calls.fetch_add(1, Ordering::SeqCst);
        self.pool_reply.clone()
    }
}
