//! Deterministic record keys.

use crate::domain::Address;

pub const KEY_DELIMITER: char = '-';

/// Key for a withdrawal: `"{amount0}-{amount1}-{to}"`.
///
/// Identical `(amount0, amount1, to)` always produce the same key, so a
/// retried withdrawal resolves to the existing entry instead of a second one.
/// Both amounts are plain digits, which keeps the key unambiguous even when
/// the address itself contains the delimiter.
pub fn derive_withdrawal_key(amount0: u64, amount1: u64, to: &Address) -> String {
    format!("{amount0}{KEY_DELIMITER}{amount1}{KEY_DELIMITER}{to}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Address {
        Address::new(s.to_string())
    }

    #[test]
    fn test_key_format() {
        let key = derive_withdrawal_key(100, 250, &addr("aaaaa-aa"));
        assert_eq!(key, "100-250-aaaaa-aa");
    }

    #[test]
    fn test_key_deterministic() {
        let to = addr("2vxsx-fae");
        let first = derive_withdrawal_key(7, 9, &to);
        for _ in 0..10 {
            assert_eq!(derive_withdrawal_key(7, 9, &to), first);
        }
    }

    #[test]
    fn test_identical_withdrawals_collide() {
        let a = derive_withdrawal_key(5, 5, &addr("x"));
        let b = derive_withdrawal_key(5, 5, &addr("x"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_inputs_do_not_collide() {
        let cases = [
            (1, 23, "a"),
            (12, 3, "b"),
            (0, 0, "c"),
            (u64::MAX, 1, "d-e"),
            (1, u64::MAX, "f"),
        ];
        let keys: Vec<String> = cases
            .iter()
            .map(|(a0, a1, to)| derive_withdrawal_key(*a0, *a1, &addr(to)))
            .collect();
        for i in 0..keys.len() {
            for j in (i + 1)..keys.len() {
                assert_ne!(keys[i], keys[j], "collision between {:?} and {:?}", cases[i], cases[j]);
            }
        }
    }

    #[test]
    fn test_amount_boundary_not_ambiguous() {
        // "1-23-..." vs "12-3-..." with the same destination.
        let to = addr("z");
        assert_ne!(derive_withdrawal_key(1, 23, &to), derive_withdrawal_key(12, 3, &to));
    }
}
