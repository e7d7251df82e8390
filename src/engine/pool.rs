use crate::datasource::{ChainSource, DataSourceError};
use crate::domain::{PoolError, PoolMetadata};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolMetadataError {
    #[error("Failed to reach pool: {0}")]
    Transport(#[from] DataSourceError),
    #[error("Failed to fetch metadata: {0}")]
    Upstream(#[from] PoolError),
}

/// Pass-through reader for the pool's metadata.
#[derive(Clone)]
pub struct PoolMetadataReader {
    source: Arc<dyn ChainSource>,
}

impl PoolMetadataReader {
    pub fn new(source: Arc<dyn ChainSource>) -> Self {
        Self { source }
    }

    /// Metadata, or a hard failure for both transport and pool errors.
    pub async fn fetch_pool_metadata(&self) -> Result<PoolMetadata, PoolMetadataError> {
        let reply = self.source.pool_metadata().await.map_err(|e| {
            error!("Pool metadata call failed: {}", e);
            PoolMetadataError::from(e)
        })?;

        match reply.into_result() {
            Ok(metadata) => {
                debug!("Pool metadata: {:?}", metadata);
                Ok(metadata)
            }
            Err(pool_error) => {
                error!("Pool rejected metadata request: {}", pool_error);
                Err(pool_error.into())
            }
        }
    }

    /// Metadata if available. Any failure is logged and reported as `None`.
    pub async fn pool_metadata(&self) -> Option<PoolMetadata> {
        match self.fetch_pool_metadata().await {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                warn!("No pool metadata available: {}", e);
                None
            }
        }
    }
}
