//! Table mappings for the four event records.

use super::store::{get_u64, SqliteQuery, StoreError, StoredRecord};
use crate::domain::{Address, CollectedFees, LiquidityAction, SwapAction, Withdrawal};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

impl StoredRecord for Withdrawal {
    const TABLE: &'static str = "withdrawals";
    const COLUMNS: &'static [&'static str] = &["amount0", "amount1", "to_address", "timestamp"];

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.amount0.to_string())
            .bind(self.amount1.to_string())
            .bind(self.to.as_str())
            .bind(self.timestamp.to_string())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, StoreError> {
        Ok(Withdrawal {
            amount0: get_u64(row, Self::TABLE, "amount0")?,
            amount1: get_u64(row, Self::TABLE, "amount1")?,
            to: Address::new(row.try_get("to_address")?),
            timestamp: get_u64(row, Self::TABLE, "timestamp")?,
        })
    }
}

impl StoredRecord for CollectedFees {
    const TABLE: &'static str = "collected_fees";
    const COLUMNS: &'static [&'static str] = &["amount0", "amount1", "timestamp"];

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.amount0.to_string())
            .bind(self.amount1.to_string())
            .bind(self.timestamp.to_string())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, StoreError> {
        Ok(CollectedFees {
            amount0: get_u64(row, Self::TABLE, "amount0")?,
            amount1: get_u64(row, Self::TABLE, "amount1")?,
            timestamp: get_u64(row, Self::TABLE, "timestamp")?,
        })
    }
}

impl StoredRecord for SwapAction {
    const TABLE: &'static str = "swap_actions";
    const COLUMNS: &'static [&'static str] = &["amount0", "amount1", "timestamp", "fee", "tx_hash"];

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.amount0.to_string())
            .bind(self.amount1.to_string())
            .bind(self.timestamp.to_string())
            .bind(self.fee.to_string())
            .bind(self.tx_hash.as_str())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, StoreError> {
        Ok(SwapAction {
            amount0: get_u64(row, Self::TABLE, "amount0")?,
            amount1: get_u64(row, Self::TABLE, "amount1")?,
            timestamp: get_u64(row, Self::TABLE, "timestamp")?,
            fee: get_u64(row, Self::TABLE, "fee")?,
            tx_hash: row.try_get("tx_hash")?,
        })
    }
}

impl StoredRecord for LiquidityAction {
    const TABLE: &'static str = "liquidity_actions";
    const COLUMNS: &'static [&'static str] = &[
        "amount0",
        "amount1",
        "timestamp",
        "position_id",
        "pool_id",
    ];

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.amount0.to_string())
            .bind(self.amount1.to_string())
            .bind(self.timestamp.to_string())
            .bind(self.position_id.to_string())
            .bind(self.pool_id.as_str())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, StoreError> {
        Ok(LiquidityAction {
            amount0: get_u64(row, Self::TABLE, "amount0")?,
            amount1: get_u64(row, Self::TABLE, "amount1")?,
            timestamp: get_u64(row, Self::TABLE, "timestamp")?,
            position_id: get_u64(row, Self::TABLE, "position_id")?,
            pool_id: row.try_get("pool_id")?,
        })
    }
}
