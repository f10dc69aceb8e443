//! Digest and comparison helpers
//!
//! All secret comparisons go through `subtle` so that timing does not depend
//! on how many leading bytes matched.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Lowercase hex SHA-256 of a UTF-8 string.
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// Decode a stored hex digest. Case-insensitive; surrounding whitespace is
/// ignored. Returns `None` unless it is exactly 32 bytes of valid hex.
pub fn decode_sha256_hex(stored: &str) -> Option<[u8; 32]> {
    let mut out = [0u8; 32];
    hex::decode_to_slice(stored.trim(), &mut out).ok()?;
    Some(out)
}

/// Constant-time check of a password against a decoded SHA-256 digest.
pub fn digest_matches(password: &str, expected: &[u8; 32]) -> bool {
    let actual = Sha256::digest(password.as_bytes());
    actual.as_slice().ct_eq(expected.as_slice()).into()
}

/// Constant-time byte equality. Lengths are not secret.
pub fn plaintext_matches(candidate: &str, stored: &str) -> bool {
    candidate.as_bytes().ct_eq(stored.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    // sha256("s3cr3t")
    const S3CR3T_HEX: &str = "4e738ca5563c06cfd0018299933d58db1dd8bf97f6973dc99bf6cdc64b5550bd";

    #[test]
    fn test_known_vector() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_digest_matches_any_hex_case() {
        let lower = decode_sha256_hex(S3CR3T_HEX).unwrap();
        let upper = decode_sha256_hex(&S3CR3T_HEX.to_uppercase()).unwrap();
        assert_eq!(lower, upper);
        assert!(digest_matches("s3cr3t", &lower));
        assert!(!digest_matches("s3cr3T", &lower));
    }

    #[test]
    fn test_decode_trims_whitespace() {
        let padded = format!("  {}\n", S3CR3T_HEX);
        assert!(decode_sha256_hex(&padded).is_some());
    }

    #[test]
    fn test_decode_rejects_bad_digests() {
        assert!(decode_sha256_hex("").is_none());
        assert!(decode_sha256_hex("abcd").is_none());
        assert!(decode_sha256_hex(&"zz".repeat(32)).is_none());
        assert!(decode_sha256_hex(&format!("{}00", S3CR3T_HEX)).is_none());
    }

    #[test]
    fn test_plaintext_matches() {
        assert!(plaintext_matches("s3cr3t", "s3cr3t"));
        assert!(!plaintext_matches("s3cr3t", "s3cr3t "));
        assert!(!plaintext_matches("s3cr3", "s3cr3t"));
    }
}
