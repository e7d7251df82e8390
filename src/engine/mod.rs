//! Ledger services: event recording, balance aggregation, threshold
//! projection and pool metadata.

pub mod balance;
pub mod pool;
pub mod recorder;
pub mod threshold;

pub use balance::BalanceAggregator;
pub use pool::{PoolMetadataError, PoolMetadataReader};
pub use recorder::{EventCounts, EventRecorder, RecordError};
pub use threshold::{EstimateError, ThresholdEstimate, ThresholdEstimator};
