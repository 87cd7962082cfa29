//! AES-256-GCM sealing
//!
//! Output format: `[N bytes: ciphertext][16 bytes: GCM tag]`. The nonce is
//! not prepended; it travels base64-encoded in the adata.

use aes_gcm::{
    aead::{Aead, KeyInit, Payload},
    Aes256Gcm, Nonce,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use pbin_core::{PbinError, PbinResult};

use crate::{IV_SIZE, KEY_SIZE};

/// Encrypted paste content with the tag appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext(Vec<u8>);

impl Ciphertext {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Standard base64, as carried in the request's `ct` field.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }
}

/// Encrypt `plaintext` and authenticate it together with `aad`.
///
/// Fails only when `key` is not 32 bytes or `nonce` is not 12 bytes.
pub fn seal(key: &[u8], nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> PbinResult<Ciphertext> {
    if key.len() != KEY_SIZE {
        return Err(PbinError::Encryption(format!(
            "key must be {KEY_SIZE} bytes, got {}",
            key.len()
        )));
    }
    if nonce.len() != IV_SIZE {
        return Err(PbinError::Encryption(format!(
            "nonce must be {IV_SIZE} bytes, got {}",
            nonce.len()
        )));
    }

    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| PbinError::Encryption(format!("creating AES-256-GCM cipher: {e}")))?;

    cipher
        .encrypt(
            Nonce::from_slice(nonce),
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map(Ciphertext)
        .map_err(|e| PbinError::Encryption(format!("AES-256-GCM seal: {e}")))
}
