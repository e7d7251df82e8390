pub mod api;
pub mod config;
pub mod datasource;
pub mod db;
pub mod domain;
pub mod engine;
pub mod error;

pub use config::Config;
pub use datasource::{ChainSource, DataSourceError, HttpChainSource, MockChainSource};
pub use db::{init_db, KeyedStore, Repository};
pub use domain::{
    derive_withdrawal_key, AccountIdentifier, Address, CollectedFees, LiquidityAction,
    OpticAccount, PoolMetadata, SelfIdentity, SwapAction, Withdrawal,
};
pub use engine::{BalanceAggregator, EventRecorder, ThresholdEstimator};
pub use error::AppError;
