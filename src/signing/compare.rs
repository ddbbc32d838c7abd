//! Constant-time signature comparison.

use subtle::ConstantTimeEq;

/// Compares two signature strings in constant time.
///
/// A length mismatch returns `false` immediately; length may leak via
/// timing, which is accepted. For equal lengths the comparison XORs every
/// byte pair and accumulates the result, so execution time does not depend
/// on where the inputs first differ. This prevents byte-at-a-time timing
/// attacks against the expected signature.
pub fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_strings_compare_true() {
        assert!(secure_compare("abc", "abc"));
    }

    #[test]
    fn different_strings_compare_false() {
        assert!(!secure_compare("abc", "abd"));
    }

    #[test]
    fn different_lengths_compare_false() {
        assert!(!secure_compare("abc", "ab"));
    }

    #[test]
    fn empty_strings_compare_true() {
        assert!(secure_compare("", ""));
    }

    #[test]
    fn difference_in_first_byte_compares_false() {
        let a = "a".repeat(64);
        let b = format!("b{}", "a".repeat(63));
        assert!(!secure_compare(&a, &b));
    }

    #[test]
    fn difference_in_last_byte_compares_false() {
        let a = "a".repeat(64);
        let b = format!("{}b", "a".repeat(63));
        assert!(!secure_compare(&a, &b));
    }
}
