//! Domain primitives: Address, AccountIdentifier, Nat.

use ic_principal::Principal;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha224};
use std::str::FromStr;
use thiserror::Error;

/// Textual address (principal) of an account holder.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(pub String);

impl Address {
    /// Create an Address from a string.
    pub fn new(addr: String) -> Self {
        Address(addr)
    }

    /// Get the address as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressParseError {
    #[error("address is empty")]
    Empty,
    #[error("address contains whitespace")]
    Whitespace,
    #[error("address {address:?} is not a valid principal: {reason}")]
    InvalidPrincipal { address: String, reason: String },
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AddressParseError::Empty);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(AddressParseError::Whitespace);
        }
        Ok(Address(s.to_string()))
    }
}

const ACCOUNT_DOMAIN_SEPARATOR: &[u8] = b"\x0Aaccount-id";
const DEFAULT_SUBACCOUNT: [u8; 32] = [0u8; 32];

/// Coin-ledger account identifier derived from an address and the default
/// subaccount: a big-endian CRC32 of the SHA-224 digest followed by the digest
/// itself, 32 bytes in total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountIdentifier(String);

impl AccountIdentifier {
    /// Derive the identifier for `address`. The address must be the textual
    /// form of a principal; its decoded bytes are what gets hashed.
    pub fn from_address(address: &Address) -> Result<Self, AddressParseError> {
        let principal = Principal::from_text(address.as_str()).map_err(|e| {
            AddressParseError::InvalidPrincipal {
                address: address.to_string(),
                reason: e.to_string(),
            }
        })?;

        let mut hasher = Sha224::new();
        hasher.update(ACCOUNT_DOMAIN_SEPARATOR);
        hasher.update(principal.as_slice());
        hasher.update(DEFAULT_SUBACCOUNT);
        let digest = hasher.finalize();

        let mut bytes = Vec::with_capacity(4 + digest.len());
        bytes.extend_from_slice(&crc32fast::hash(&digest).to_be_bytes());
        bytes.extend_from_slice(&digest);
        Ok(AccountIdentifier(hex::encode(bytes)))
    }

    /// Lowercase hex form.
    pub fn to_hex(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Arbitrary-precision natural number carried as its decimal digits.
///
/// Pool state such as `sqrtPriceX96` routinely exceeds `u128`; nothing here
/// does arithmetic on it, so the digits are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Nat(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid natural number: {0:?}")]
pub struct NatParseError(pub String);

impl Nat {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for Nat {
    fn from(value: u64) -> Self {
        Nat(value.to_string())
    }
}

impl FromStr for Nat {
    type Err = NatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NatParseError(s.to_string()));
        }
        let trimmed = s.trim_start_matches('0');
        if trimmed.is_empty() {
            Ok(Nat("0".to_string()))
        } else {
            Ok(Nat(trimmed.to_string()))
        }
    }
}

impl std::fmt::Display for Nat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Nat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Upstreams send small naturals as JSON numbers and large ones as strings.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Nat::from(n)),
            Raw::Text(s) => Nat::from_str(&s).map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_display() {
        let addr = Address::new("rrkah-fqaaa-aaaaa-aaaaq-cai".to_string());
        assert_eq!(addr.to_string(), "rrkah-fqaaa-aaaaa-aaaaq-cai");
    }

    #[test]
    fn test_address_parse_rejects_blank() {
        assert_eq!(Address::from_str(""), Err(AddressParseError::Empty));
        assert_eq!(Address::from_str("a b"), Err(AddressParseError::Whitespace));
        assert!(Address::from_str("aaaaa-aa").is_ok());
    }

    #[test]
    fn test_account_identifier_known_vector() {
        // Anonymous principal, default subaccount.
        let id = AccountIdentifier::from_address(&Address::new("2vxsx-fae".to_string())).unwrap();
        assert_eq!(
            id.to_hex(),
            "1c7a48ba6a562aa9eaa2481a9049cdf0433b9738c992d698c31d8abf89cadc79"
        );
    }

    #[test]
    fn test_account_identifier_checksum_prefix() {
        let id = AccountIdentifier::from_address(&Address::new("aaaaa-aa".to_string())).unwrap();
        let bytes = hex::decode(id.to_hex()).unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(bytes[..4], crc32fast::hash(&bytes[4..]).to_be_bytes());
    }

    #[test]
    fn test_account_identifier_differs_per_address() {
        let a = AccountIdentifier::from_address(&Address::new("aaaaa-aa".to_string())).unwrap();
        let b = AccountIdentifier::from_address(&Address::new("2vxsx-fae".to_string())).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_account_identifier_rejects_non_principal() {
        let err = AccountIdentifier::from_address(&Address::new("not-a-principal".to_string()))
            .unwrap_err();
        assert!(matches!(err, AddressParseError::InvalidPrincipal { .. }));
    }

    #[test]
    fn test_nat_parse() {
        assert_eq!(Nat::from_str("000").unwrap().as_str(), "0");
        assert_eq!(Nat::from_str("0042").unwrap().as_str(), "42");
        assert!(Nat::from_str("-1").is_err());
        assert!(Nat::from_str("").is_err());
    }

    #[test]
    fn test_nat_deserialize_number_and_string() {
        let n: Nat = serde_json::from_str("7").unwrap();
        assert_eq!(n.as_str(), "7");
        let big: Nat =
            serde_json::from_str("\"1461446703485210103287273052203988822378723970342\"").unwrap();
        assert_eq!(big.as_str(), "1461446703485210103287273052203988822378723970342");
        assert!(serde_json::from_str::<Nat>("\"12a\"").is_err());
    }
}
