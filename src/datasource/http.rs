//! Gateway client for the ledgers and the pool.

use super::{ChainSource, DataSourceError};
use crate::config::Config;
use crate::domain::{AccountIdentifier, Address, CoinBalance, PoolMetadataReply};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Reaches each service through `POST {gateway_url}/{canister_id}/{method}`
/// with a JSON argument record.
#[derive(Debug, Clone)]
pub struct HttpChainSource {
    client: Client,
    gateway_url: String,
    coin_ledger_id: String,
    token_ledger_id: String,
    pool_id: String,
}

impl HttpChainSource {
    pub fn new(
        gateway_url: String,
        coin_ledger_id: String,
        token_ledger_id: String,
        pool_id: String,
    ) -> Self {
        Self {
            client: Client::new(),
            gateway_url,
            coin_ledger_id,
            token_ledger_id,
            pool_id,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.gateway_url.clone(),
            config.coin_ledger_id.clone(),
            config.token_ledger_id.clone(),
            config.pool_id.clone(),
        )
    }

    async fn call(
        &self,
        canister_id: &str,
        method: &str,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, DataSourceError> {
        let url = format!("{}/{}/{}", self.gateway_url, canister_id, method);
        debug!("Calling {} on {}", method, canister_id);

        let response = self
            .client
            .post(&url)
            .json(&args)
            .send()
            .await
            .map_err(|e| DataSourceError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DataSourceError::HttpError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| DataSourceError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl ChainSource for HttpChainSource {
    async fn account_balance(
        &self,
        account: &AccountIdentifier,
    ) -> Result<CoinBalance, DataSourceError> {
        let args = serde_json::json!({ "account": account.to_hex() });
        let reply = self
            .call(&self.coin_ledger_id, "account_balance", args)
            .await?;
        parse_coin_balance(reply)
    }

    async fn icrc1_balance_of(&self, owner: &Address) -> Result<u64, DataSourceError> {
        let args = serde_json::json!({ "owner": owner.as_str() });
        let reply = self
            .call(&self.token_ledger_id, "icrc1_balance_of", args)
            .await?;
        parse_token_balance(&reply)
    }

    async fn pool_metadata(&self) -> Result<PoolMetadataReply, DataSourceError> {
        let reply = self
            .call(&self.pool_id, "metadata", serde_json::json!({}))
            .await?;
        parse_pool_reply(reply)
    }
}

fn parse_coin_balance(reply: serde_json::Value) -> Result<CoinBalance, DataSourceError> {
    serde_json::from_value(reply)
        .map_err(|e| DataSourceError::ParseError(format!("Invalid account_balance reply: {}", e)))
}

/// The token ledger answers with a bare natural, as a number or a string.
fn parse_token_balance(reply: &serde_json::Value) -> Result<u64, DataSourceError> {
    if let Some(n) = reply.as_u64() {
        return Ok(n);
    }
    reply
        .as_str()
        .and_then(|s| s.parse::<u64>().ok())
        .ok_or_else(|| {
            DataSourceError::ParseError(format!("Invalid icrc1_balance_of reply: {}", reply))
        })
}

fn parse_pool_reply(reply: serde_json::Value) -> Result<PoolMetadataReply, DataSourceError> {
    serde_json::from_value(reply)
        .map_err(|e| DataSourceError::ParseError(format!("Invalid metadata reply: {}", e)))
}
