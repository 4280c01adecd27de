//! End-to-end tests for payload encryption and key provisioning.

#![cfg(feature = "crypto")]

use std::io::Write as _;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use datamask::{
    crypto::{decrypt, encrypt, KEY_LEN, NONCE_LEN, TAG_LEN},
    KeyLoader, SymmetricKey,
};

fn test_key() -> SymmetricKey {
    SymmetricKey::from_bytes([7u8; KEY_LEN])
}

#[test]
fn test_round_trip_restores_plaintext() {
    let key = test_key();
    let payload = encrypt("confidential payload", &key).unwrap();
    assert_eq!(decrypt(&payload, &key).unwrap(), "confidential payload");
}

#[test]
fn test_round_trip_handles_unicode_and_empty_input() {
    let key = test_key();
    for plaintext in ["", "héllo wörld", "こんにちは世界"] {
        let payload = encrypt(plaintext, &key).unwrap();
        assert_eq!(decrypt(&payload, &key).unwrap(), plaintext);
    }
}

#[test]
fn test_payload_is_base64_of_nonce_and_ciphertext() {
    let key = test_key();
    let plaintext = "sixteen byte msg";
    let payload = encrypt(plaintext, &key).unwrap();
    let raw = STANDARD.decode(&payload).unwrap();
    assert_eq!(raw.len(), NONCE_LEN + plaintext.len() + TAG_LEN);
}

#[test]
fn test_encryption_is_nondeterministic() {
    let key = test_key();
    let first = encrypt("same input", &key).unwrap();
    let second = encrypt("same input", &key).unwrap();
    assert_ne!(first, second);
    assert_eq!(decrypt(&first, &key).unwrap(), "same input");
    assert_eq!(decrypt(&second, &key).unwrap(), "same input");
}

#[test]
fn test_wrong_key_fails_to_decrypt() {
    let payload = encrypt("secret", &test_key()).unwrap();
    let other = SymmetricKey::from_bytes([8u8; KEY_LEN]);
    assert!(decrypt(&payload, &other).is_err());
}

#[test]
fn test_tampered_payload_is_rejected() {
    let key = test_key();
    let payload = encrypt("integrity matters", &key).unwrap();
    let mut raw = STANDARD.decode(&payload).unwrap();
    let last = raw.len() - 1;
    raw[last] ^= 0x01;
    let tampered = STANDARD.encode(&raw);
    assert!(decrypt(&tampered, &key).is_err());
}

#[test]
fn test_malformed_payloads_are_rejected() {
    let key = test_key();
    assert!(decrypt("not base64!!!", &key).is_err());
    // Too short to contain a nonce and an authentication tag
    assert!(decrypt(&STANDARD.encode([0u8; 8]), &key).is_err());
    assert!(decrypt("", &key).is_err());
}

#[test]
fn test_decrypt_error_reveals_no_cause() {
    let key = test_key();
    let garbled = decrypt("%%%", &key).unwrap_err();
    let truncated = decrypt(&STANDARD.encode([0u8; 8]), &key).unwrap_err();
    // Indistinguishable failures: same message for every cause
    assert_eq!(garbled.to_string(), truncated.to_string());
}

#[test]
fn test_loaded_key_encrypts_and_decrypts() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{}", STANDARD.encode([3u8; KEY_LEN])).unwrap();

    let key = KeyLoader::new()
        .with_env_var("DATAMASK_CRYPTO_IT_UNSET_VAR")
        .with_key_file(file.path())
        .load()
        .unwrap();
    let payload = encrypt("loaded from file", &key).unwrap();
    assert_eq!(decrypt(&payload, &key).unwrap(), "loaded from file");
}

#[test]
fn test_missing_key_means_encryption_unavailable() {
    let key = KeyLoader::new()
        .with_env_var("DATAMASK_CRYPTO_IT_UNSET_VAR")
        .without_key_file()
        .load();
    assert!(key.is_none());
}
