//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Generate a random 32-byte secret suitable for [`sign`]
pub fn random_secret() -> [u8; 32] {
    let mut secret = [0u8; 32];
    OsRng.fill_bytes(&mut secret);
    secret
}

/// HMAC-SHA256 of `data`, encoded as unpadded URL-safe base64
pub fn sign(key: &[u8; 32], data: &[u8]) -> String {
    let mut mac = mac_for(key);
    mac.update(data);
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}

/// Check a signature produced by [`sign`]. Comparison is constant-time.
pub fn verify(key: &[u8; 32], data: &[u8], signature: &str) -> bool {
    let Ok(raw) = URL_SAFE_NO_PAD.decode(signature) else {
        return false;
    };
    let mut mac = mac_for(key);
    mac.update(data);
    mac.verify_slice(&raw).is_ok()
}

fn mac_for(key: &[u8; 32]) -> HmacSha256 {
    HmacSha256::new_from_slice(key).expect("HMAC can take key of any size")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret() {
        let a = random_secret();
        let b = random_secret();
        assert!(a.iter().any(|&x| x != 0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_sign_is_deterministic() {
        let key = [42u8; 32];
        assert_eq!(sign(&key, b"test01"), sign(&key, b"test01"));
        assert_ne!(sign(&key, b"test01"), sign(&key, b"test02"));
    }

    #[test]
    fn test_signature_is_url_safe() {
        let sig = sign(&[7u8; 32], b"test01");
        // 32 bytes -> 43 base64 chars without padding
        assert_eq!(sig.len(), 43);
        assert!(!sig.contains('='));
        assert!(!sig.contains('+'));
        assert!(!sig.contains('/'));
    }

    #[test]
    fn test_verify() {
        let key = [1u8; 32];
        let sig = sign(&key, b"test01");
        assert!(verify(&key, b"test01", &sig));
        assert!(!verify(&key, b"test02", &sig));
        assert!(!verify(&[2u8; 32], b"test01", &sig));
        assert!(!verify(&key, b"test01", "not base64!"));
        assert!(!verify(&key, b"test01", ""));
    }
}
