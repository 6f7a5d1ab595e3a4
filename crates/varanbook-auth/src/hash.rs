//! One-way hashing for stored token values.
//!
//! Refresh tokens and reset tokens are random, high-entropy values, so a
//! single fast SHA-256 pass is sufficient; the slow adaptive hash is
//! reserved for passwords.

use sha2::{Digest, Sha256};

/// SHA-256 hex digest of the input string.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(64);
    for byte in digest {
        use std::fmt::Write;
        let _ = write!(out, "{byte:02x}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_hex_and_stable() {
        let a = sha256_hex("token-value");
        let b = sha256_hex("token-value");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn different_inputs_differ() {
        assert_ne!(sha256_hex("a"), sha256_hex("b"));
    }
}
