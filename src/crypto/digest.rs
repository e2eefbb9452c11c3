//! Master password digest.
//!
//! The stored credential is a plain SHA-256 of the UTF-8 password bytes:
//! no salt, no key stretching. That keeps the on-disk format a fixed
//! 32-byte file but leaves it open to offline guessing if the file leaks.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Length of the stored digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Compute the SHA-256 digest of a passphrase.
pub fn digest_passphrase(passphrase: &str) -> [u8; DIGEST_LEN] {
    Sha256::digest(passphrase.as_bytes()).into()
}

/// Compare two digests in constant time.
///
/// Inputs of different lengths never match.
pub fn digests_match(actual: &[u8], expected: &[u8]) -> bool {
    actual.ct_eq(expected).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic() {
        assert_eq!(digest_passphrase("Secret123"), digest_passphrase("Secret123"));
    }

    #[test]
    fn digest_matches_known_sha256() {
        // sha256("abc")
        let expected = [
            0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae,
            0x22, 0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61,
            0xf2, 0x00, 0x15, 0xad,
        ];
        assert_eq!(digest_passphrase("abc"), expected);
    }

    #[test]
    fn different_passphrases_differ() {
        assert_ne!(digest_passphrase("Secret123"), digest_passphrase("secret123"));
    }

    #[test]
    fn digests_match_requires_equal_length() {
        let d = digest_passphrase("pw");
        assert!(digests_match(&d, &d));
        assert!(!digests_match(&d, &d[..31]));
        assert!(!digests_match(&d, &[]));
    }
}
