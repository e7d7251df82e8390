//! Days-to-threshold projection.
//!
//! A coarse heuristic: the current token balance is treated as what was
//! accumulated over the lookback window, so the daily rate is
//! `balance / lookback_days`. No balance history is kept, and none is needed.
//! All division is integer division, truncating toward zero.

use crate::config::Config;
use crate::datasource::DataSourceError;
use crate::engine::BalanceAggregator;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    #[error("projection undefined: balance {balance} over {lookback_days} days gives no daily contribution")]
    UndefinedProjection { balance: u64, lookback_days: u64 },
    #[error("lookback window must be at least one day")]
    ZeroLookback,
    #[error("token balance unavailable: {0}")]
    Balance(#[from] DataSourceError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdEstimate {
    pub threshold: u64,
    pub average_daily_contribution: u64,
    pub estimated_days: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdEstimator {
    threshold: u64,
    lookback_days: u64,
}

impl ThresholdEstimator {
    pub fn new(threshold: u64, lookback_days: u64) -> Result<Self, EstimateError> {
        if lookback_days == 0 {
            return Err(EstimateError::ZeroLookback);
        }
        Ok(Self {
            threshold,
            lookback_days,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, EstimateError> {
        Self::new(config.threshold, config.lookback_days)
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    pub fn lookback_days(&self) -> u64 {
        self.lookback_days
    }

    pub fn average_daily_contribution(&self, token_balance: u64) -> u64 {
        token_balance / self.lookback_days
    }

    /// `threshold / average_daily_contribution`. A zero rate (including any
    /// balance smaller than the window) is `UndefinedProjection`.
    pub fn estimated_days_to_threshold(&self, token_balance: u64) -> Result<u64, EstimateError> {
        Ok(self.estimate(token_balance)?.estimated_days)
    }

    pub fn estimate(&self, token_balance: u64) -> Result<ThresholdEstimate, EstimateError> {
        let average = self.average_daily_contribution(token_balance);
        if average == 0 {
            warn!(
                "No daily contribution from balance {} over {} days",
                token_balance, self.lookback_days
            );
            return Err(EstimateError::UndefinedProjection {
                balance: token_balance,
                lookback_days: self.lookback_days,
            });
        }

        Ok(ThresholdEstimate {
            threshold: self.threshold,
            average_daily_contribution: average,
            estimated_days: self.threshold / average,
        })
    }

    /// Fetch the current token balance and project from it.
    pub async fn project(
        &self,
        balances: &BalanceAggregator,
    ) -> Result<ThresholdEstimate, EstimateError> {
        let token_balance = balances.token_balance().await?;
        self.estimate(token_balance)
    }
}
