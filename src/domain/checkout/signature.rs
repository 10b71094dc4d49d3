//! Webhook signature verification.
//!
//! The provider signs each delivery with HMAC-SHA256 over
//! `"v1." + timestamp + "." + raw_body`, using the per-webhook signing
//! secret, and sends the result as `Revolut-Signature: v1=<hex>`.
//! Verification recomputes the digest over the raw bytes exactly as
//! received; any re-serialization of the body would change the digest.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Verify a webhook delivery against the tenant's signing secret.
///
/// Returns `false` for any mismatch, including a malformed or
/// differently-versioned signature header. Comparison is constant-time
/// so the check leaks no information about the expected digest.
pub fn verify_signature(
    raw_body: &[u8],
    timestamp: &str,
    signature: &str,
    secret: &SecretString,
) -> bool {
    let expected = compute_signature(raw_body, timestamp, secret);
    constant_time_eq(expected.as_bytes(), signature.as_bytes())
}

/// Compute the expected signature header value for a delivery.
fn compute_signature(raw_body: &[u8], timestamp: &str, secret: &SecretString) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.expose_secret().as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(b"v1.");
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(raw_body);
    format!("v1={}", hex::encode(mac.finalize().into_bytes()))
}

/// Constant-time byte comparison. Length is checked first; unequal
/// lengths short-circuit, which leaks only the length, never content.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Produce a valid signature header for a delivery. Test-side
/// counterpart of the verifier.
#[cfg(test)]
pub fn sign(raw_body: &[u8], timestamp: &str, secret: &SecretString) -> String {
    compute_signature(raw_body, timestamp, secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn secret() -> SecretString {
        SecretString::new("wsk_test_secret_key".to_string())
    }

    #[test]
    fn accepts_valid_signature() {
        let body = br#"{"event":"ORDER_COMPLETED","order_id":"ord_1"}"#;
        let ts = "1724400000000";
        let sig = sign(body, ts, &secret());
        assert!(verify_signature(body, ts, &sig, &secret()));
    }

    #[test]
    fn rejects_tampered_body() {
        let body = br#"{"event":"ORDER_COMPLETED","order_id":"ord_1"}"#;
        let ts = "1724400000000";
        let sig = sign(body, ts, &secret());
        let tampered = br#"{"event":"ORDER_COMPLETED","order_id":"ord_2"}"#;
        assert!(!verify_signature(tampered, ts, &sig, &secret()));
    }

    #[test]
    fn rejects_wrong_timestamp() {
        let body = b"{}";
        let sig = sign(body, "1724400000000", &secret());
        assert!(!verify_signature(body, "1724400000001", &sig, &secret()));
    }

    #[test]
    fn rejects_wrong_secret() {
        let body = b"{}";
        let ts = "1724400000000";
        let sig = sign(body, ts, &secret());
        let other = SecretString::new("wsk_other".to_string());
        assert!(!verify_signature(body, ts, &sig, &other));
    }

    #[test]
    fn rejects_missing_version_prefix() {
        let body = b"{}";
        let ts = "1724400000000";
        let sig = sign(body, ts, &secret());
        let stripped = sig.trim_start_matches("v1=");
        assert!(!verify_signature(body, ts, stripped, &secret()));
    }

    #[test]
    fn rejects_empty_signature() {
        assert!(!verify_signature(b"{}", "1724400000000", "", &secret()));
    }

    #[test]
    fn signature_has_expected_shape() {
        let sig = sign(b"{}", "0", &secret());
        assert!(sig.starts_with("v1="));
        // 32-byte digest, hex-encoded
        assert_eq!(sig.len(), 3 + 64);
    }

    proptest! {
        #[test]
        fn any_single_byte_flip_in_body_invalidates(
            body in proptest::collection::vec(any::<u8>(), 1..256),
            flip_at in any::<prop::sample::Index>(),
        ) {
            let ts = "1724400000000";
            let sig = sign(&body, ts, &secret());
            let idx = flip_at.index(body.len());
            let mut tampered = body.clone();
            tampered[idx] ^= 0x01;
            prop_assert!(!verify_signature(&tampered, ts, &sig, &secret()));
        }

        #[test]
        fn verifier_accepts_its_own_signatures(
            body in proptest::collection::vec(any::<u8>(), 0..256),
            ts in "[0-9]{1,16}",
        ) {
            let sig = sign(&body, &ts, &secret());
            prop_assert!(verify_signature(&body, &ts, &sig, &secret()));
        }
    }
}
