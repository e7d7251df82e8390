//! Account identity and balance snapshots.

use crate::domain::{AccountIdentifier, Address, AddressParseError};
use serde::{Deserialize, Serialize};

/// Identity of the running process: its address and the coin-ledger account
/// derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfIdentity {
    pub address: Address,
    pub account_id: AccountIdentifier,
}

impl SelfIdentity {
    pub fn new(address: Address) -> Result<Self, AddressParseError> {
        let account_id = AccountIdentifier::from_address(&address)?;
        Ok(Self {
            address,
            account_id,
        })
    }
}

/// Coin-ledger balance reply, in e8s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinBalance {
    pub e8s: u64,
}

/// Combined coin and token balance. Recomputed per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpticAccount {
    #[serde(rename = "icpBalance")]
    pub icp_balance: u64,
    #[serde(rename = "ckUSDCBalance")]
    pub ck_usdc_balance: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_identity_derives_account() {
        let identity = SelfIdentity::new(Address::new("aaaaa-aa".to_string())).unwrap();
        assert_eq!(
            identity.account_id,
            AccountIdentifier::from_address(&identity.address).unwrap()
        );
    }

    #[test]
    fn test_self_identity_rejects_invalid_address() {
        assert!(SelfIdentity::new(Address::new("hello".to_string())).is_err());
    }

    #[test]
    fn test_optic_account_wire_names() {
        let account = OpticAccount {
            icp_balance: 5,
            ck_usdc_balance: 7,
        };
        let json = serde_json::to_value(account).unwrap();
        assert_eq!(json["icpBalance"], 5);
        assert_eq!(json["ckUSDCBalance"], 7);
    }
}
