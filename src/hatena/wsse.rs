// src/hatena/wsse.rs
//! WSSE `UsernameToken` authentication for Hatena's AtomPub endpoints.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use rand::RngCore;
use sha1::{Digest, Sha1};

/// Random bytes per nonce.
const NONCE_LEN: usize = 16;

/// Builds an `X-WSSE` header value with a fresh nonce and the current time.
pub fn wsse_header(user: &str, api_key: &str) -> String {
    let mut nonce = [0u8; NONCE_LEN];
    rand::rng().fill_bytes(&mut nonce);
    wsse_header_with(user, api_key, &nonce, Utc::now())
}

/// Builds the header from an explicit nonce and creation time.
///
/// `PasswordDigest` is `base64(SHA-1(nonce ‖ created ‖ api_key))`.
pub fn wsse_header_with(user: &str, api_key: &str, nonce: &[u8], created: DateTime<Utc>) -> String {
    let created = created.format("%Y-%m-%dT%H:%M:%SZ").to_string();

    let mut hasher = Sha1::new();
    hasher.update(nonce);
    hasher.update(created.as_bytes());
    hasher.update(api_key.as_bytes());
    let digest = hasher.finalize();

    format!(
        r#"UsernameToken Username="{}", PasswordDigest="{}", Nonce="{}", Created="{}""#,
        user,
        STANDARD.encode(digest),
        STANDARD.encode(nonce),
        created
    )
}
