//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and schema
//! - The generic write-once keyed store
//! - Table mappings for each event record
//! - Repository bundling the four event stores

pub mod migrations;
pub mod records;
pub mod repo;
pub mod store;

pub use migrations::init_db;
pub use repo::Repository;
pub use store::{KeyedStore, StoreError, StoredRecord};
