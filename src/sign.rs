//! Request signing and the wallet-password digest.
//!
//! ## Canonical JSON
//!
//! A request is signed over its canonical JSON encoding: the compact
//! `serde_json` output of a `serde_json::Map` built with the
//! `preserve_order` feature, so the key order is exactly the order the
//! fields were inserted in. The signed bytes include `_api_key` and exclude
//! `_api_sign`; `_api_sign` is inserted after signing and therefore always
//! serializes last. The transmitted body is byte-identical to the signed
//! bytes apart from that trailing member, which is what lets the service
//! reproduce the signature.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};

type HmacSha256 = Hmac<Sha256>;

/// Sign the canonical JSON encoding of a request.
///
/// Returns the lowercase-hex HMAC-SHA256 digest keyed by the API secret,
/// transmitted as the `_api_sign` field.
pub fn sign_canonical_json(json: &str, api_secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(api_secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(json.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// One-way SHA-512 digest of a wallet password, as lowercase hex.
///
/// This is a password digest, not encryption: it cannot be reversed, and
/// the plaintext password never leaves the process.
pub fn password_digest(password: &str) -> String {
    hex::encode(Sha512::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{"wallet_id":"w1","_api_key":"pub"}"#;

    #[test]
    fn signature_matches_fixed_vector() {
        assert_eq!(
            sign_canonical_json(JSON, "topsecret"),
            "58824ff1e36fb466cd1bf2718088b49afdd5f8e24e20d9b6c6997094ddda2246"
        );
    }

    #[test]
    fn signature_is_deterministic() {
        assert_eq!(
            sign_canonical_json(JSON, "topsecret"),
            sign_canonical_json(JSON, "topsecret")
        );
    }

    #[test]
    fn changing_a_field_changes_the_signature() {
        let other = r#"{"wallet_id":"w2","_api_key":"pub"}"#;
        assert_eq!(
            sign_canonical_json(other, "topsecret"),
            "dac573756efe8e1b5b08af61b97797e911ee1cfdf4f6f44db8a733e2f316ec55"
        );
        assert_ne!(
            sign_canonical_json(JSON, "topsecret"),
            sign_canonical_json(other, "topsecret")
        );
    }

    #[test]
    fn changing_the_secret_changes_the_signature() {
        assert_eq!(
            sign_canonical_json(JSON, "othersecret"),
            "70faf49e902b266ce078f12c9aba3dff5ffecf24bb4dbe341bd136df3bb5dee5"
        );
        assert_ne!(
            sign_canonical_json(JSON, "topsecret"),
            sign_canonical_json(JSON, "othersecret")
        );
    }

    #[test]
    fn password_digest_matches_sha512_vector() {
        assert_eq!(
            password_digest("secret"),
            "bd2b1aaf7ef4f09be9f52ce2d8d599674d81aa9d6a4421696dc4d93dd0619d68\
             2ce56b4d64a9ef097761ced99e0f67265b5f76085e5b0ee7ca4696b2ad6fe2b2"
        );
    }

    #[test]
    fn password_digest_is_lowercase_hex() {
        let digest = password_digest("hunter2");
        assert_eq!(digest.len(), 128);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
