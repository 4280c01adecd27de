//! AES-256-GCM authenticated encryption of string payloads.
//!
//! For values that must remain recoverable rather than permanently masked.
//! Each call generates a fresh 96-bit nonce from the OS CSPRNG; the payload
//! is `base64(nonce || ciphertext || tag)` as a single string. Nonce
//! uniqueness is probabilistic (no counter state is kept), which is adequate
//! at expected call volumes for random 96-bit nonces.
//!
//! Every decrypt-path failure is reported as the same opaque [`CryptoError`]:
//! distinguishing "wrong key" from "tampered data" from "malformed input"
//! would hand an attacker a decryption oracle. The sub-cause is traced at
//! debug level for operators.

use aes_gcm::{
    aead::{rand_core::RngCore, Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of an AES-GCM nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of the GCM authentication tag (16 bytes = 128 bits).
pub const TAG_LEN: usize = 16;

/// A 256-bit symmetric key supplied by the caller.
///
/// The key is opaque to this module beyond its length and algorithm binding;
/// it is never generated or persisted here. `Debug` does not print key bytes.
#[derive(Clone)]
pub struct SymmetricKey([u8; KEY_LEN]);

impl SymmetricKey {
    /// Wraps exactly [`KEY_LEN`] raw key bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Wraps a byte slice, returning `None` unless it is exactly [`KEY_LEN`]
    /// bytes long.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        <[u8; KEY_LEN]>::try_from(bytes).ok().map(Self)
    }

    /// Decodes a base64 string into a key, returning `None` on invalid
    /// encoding or wrong length.
    #[must_use]
    pub fn from_base64(encoded: &str) -> Option<Self> {
        let decoded = STANDARD.decode(encoded).ok()?;
        Self::from_slice(&decoded)
    }

    fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SymmetricKey(..)")
    }
}

/// Unified failure for any cryptographic operation.
///
/// Intentionally carries no sub-cause: the externally visible type and
/// message are identical for a wrong key, tampered data, and malformed
/// input.
#[derive(Debug, Error)]
#[error("cryptographic operation failed")]
pub struct CryptoError(());

/// Encrypts `plaintext` under `key`, returning the base64 payload string.
pub fn encrypt(plaintext: &str, key: &SymmetricKey) -> Result<String, CryptoError> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| {
        tracing::debug!("cipher construction rejected key");
        CryptoError(())
    })?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher.encrypt(nonce, plaintext.as_bytes()).map_err(|_| {
        tracing::debug!("aead encryption failed");
        CryptoError(())
    })?;

    let mut payload = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    payload.extend_from_slice(&nonce_bytes);
    payload.extend_from_slice(&ciphertext);
    Ok(STANDARD.encode(payload))
}

/// Decrypts a payload produced by [`encrypt`] with the same key.
///
/// Fails with the unified [`CryptoError`] on invalid base64, truncated or
/// tampered data, or a wrong key.
pub fn decrypt(payload: &str, key: &SymmetricKey) -> Result<String, CryptoError> {
    let data = STANDARD.decode(payload).map_err(|_| {
        tracing::debug!("payload is not valid base64");
        CryptoError(())
    })?;
    if data.len() < NONCE_LEN + TAG_LEN {
        tracing::debug!("payload shorter than nonce plus tag");
        return Err(CryptoError(()));
    }
    let (nonce_bytes, ciphertext) = data.split_at(NONCE_LEN);

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| {
        tracing::debug!("cipher construction rejected key");
        CryptoError(())
    })?;
    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| {
            tracing::debug!("aead decryption failed");
            CryptoError(())
        })?;

    String::from_utf8(plaintext).map_err(|_| {
        tracing::debug!("decrypted payload is not valid utf-8");
        CryptoError(())
    })
}
