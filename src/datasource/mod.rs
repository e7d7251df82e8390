//! External collaborators: the coin ledger, the token ledger and the pool.

use crate::domain::{AccountIdentifier, Address, CoinBalance, PoolMetadataReply};
use async_trait::async_trait;
use std::fmt;

pub mod http;
pub mod mock;

pub use http::HttpChainSource;
pub use mock::MockChainSource;

/// Calls into the ledgers and the pool.
///
/// Every method makes exactly one attempt; retry and timeout policy, if any,
/// belong to the transport underneath.
#[async_trait]
pub trait ChainSource: Send + Sync + fmt::Debug {
    /// Coin-ledger balance of `account`.
    async fn account_balance(
        &self,
        account: &AccountIdentifier,
    ) -> Result<CoinBalance, DataSourceError>;

    /// Token-ledger balance of `owner` in base units.
    async fn icrc1_balance_of(&self, owner: &Address) -> Result<u64, DataSourceError>;

    /// Pool metadata reply. A business error from the pool is a successful
    /// call carrying `PoolMetadataReply::Err`.
    async fn pool_metadata(&self) -> Result<PoolMetadataReply, DataSourceError>;
}

/// Transport-level failure talking to an external service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSourceError {
    /// Network error (e.g., connection refused, DNS failure)
    NetworkError(String),
    /// Non-success HTTP status
    HttpError { status: u16, message: String },
    /// Response body did not have the expected shape
    ParseError(String),
    /// Other error
    Other(String),
}

impl fmt::Display for DataSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSourceError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            DataSourceError::HttpError { status, message } => {
                write!(f, "HTTP error {}: {}", status, message)
            }
            DataSourceError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            DataSourceError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for DataSourceError {}
