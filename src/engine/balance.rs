use crate::datasource::{ChainSource, DataSourceError};
use crate::domain::{OpticAccount, SelfIdentity};
use std::sync::Arc;
use tracing::{debug, error};

/// Combines the coin-ledger and token-ledger balances of this process.
#[derive(Clone)]
pub struct BalanceAggregator {
    source: Arc<dyn ChainSource>,
    identity: SelfIdentity,
}

impl BalanceAggregator {
    pub fn new(source: Arc<dyn ChainSource>, identity: SelfIdentity) -> Self {
        Self { source, identity }
    }

    pub fn identity(&self) -> &SelfIdentity {
        &self.identity
    }

    /// Coin balance in e8s, addressed by the derived account identifier.
    pub async fn coin_balance(&self) -> Result<u64, DataSourceError> {
        match self.source.account_balance(&self.identity.account_id).await {
            Ok(balance) => {
                debug!("Coin balance for {}: {}", self.identity.account_id, balance.e8s);
                Ok(balance.e8s)
            }
            Err(e) => {
                error!("Coin balance query failed for {}: {}", self.identity.account_id, e);
                Err(e)
            }
        }
    }

    /// Token balance in base units, addressed by this process's address.
    pub async fn token_balance(&self) -> Result<u64, DataSourceError> {
        match self.source.icrc1_balance_of(&self.identity.address).await {
            Ok(balance) => {
                debug!("Token balance for {}: {}", self.identity.address, balance);
                Ok(balance)
            }
            Err(e) => {
                error!("Token balance query failed for {}: {}", self.identity.address, e);
                Err(e)
            }
        }
    }

    /// Both balances, or the first failure. Never a partial snapshot.
    ///
    /// The coin ledger is queried first; a coin failure means the token
    /// ledger is never called.
    pub async fn combined_balance(&self) -> Result<OpticAccount, DataSourceError> {
        let icp_balance = self.coin_balance().await?;
        let ck_usdc_balance = self.token_balance().await?;

        Ok(OpticAccount {
            icp_balance,
            ck_usdc_balance,
        })
    }
}
