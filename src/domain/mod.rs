//! Domain types for the liquidity-provider ledger.
//!
//! This module provides:
//! - Primitives: Address, AccountIdentifier, Nat
//! - The four ledger event records and their kinds
//! - Deterministic withdrawal key derivation
//! - Pool metadata mirror with its typed ok/err reply
//! - Identity and combined balance snapshot

pub mod account;
pub mod keys;
pub mod pool;
pub mod primitives;
pub mod records;

pub use account::{CoinBalance, OpticAccount, SelfIdentity};
pub use keys::derive_withdrawal_key;
pub use pool::{PoolError, PoolMetadata, PoolMetadataReply, TokenDescriptor};
pub use primitives::{AccountIdentifier, Address, AddressParseError, Nat, NatParseError};
pub use records::{CollectedFees, EventKind, LiquidityAction, SwapAction, Withdrawal};
