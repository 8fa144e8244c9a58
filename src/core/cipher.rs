//! Sealed-box encryption of secret values.
//!
//! GitHub stores Actions secrets encrypted to a per-repository X25519 key.
//! Values are sealed anonymously (libsodium `crypto_box_seal`): an ephemeral
//! keypair is generated for every call, so sealing the same value twice
//! yields different ciphertexts and only the repository can open them.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use crypto_box::aead::OsRng;
use tracing::trace;

use crate::core::types::{PublicKey, SealedSecret};
use crate::error::{CipherError, Result};

/// Length of a raw X25519 public key.
pub const KEY_SIZE: usize = 32;

/// Seal `plaintext` to `key`, returning base64 ciphertext.
///
/// # Errors
///
/// Returns `CipherError::InvalidKey` if the key is not base64 of a 32-byte
/// X25519 key, or `CipherError::SealFailed` if encryption fails.
pub fn seal(plaintext: &str, key: &PublicKey) -> Result<String> {
    let recipient = decode_key(&key.key)?;

    trace!(
        key_id = %key.key_id,
        plaintext_len = plaintext.len(),
        "sealing"
    );

    let sealed = recipient
        .seal(&mut OsRng, plaintext.as_bytes())
        .map_err(|e| CipherError::SealFailed(e.to_string()))?;

    trace!(ciphertext_len = sealed.len(), "sealed");

    Ok(STANDARD.encode(sealed))
}

impl SealedSecret {
    /// Seal `plaintext` to `key` and pair it with the key id GitHub expects.
    ///
    /// # Errors
    ///
    /// See [`seal`].
    pub fn new(plaintext: &str, key: &PublicKey) -> Result<Self> {
        Ok(Self {
            encrypted_value: seal(plaintext, key)?,
            key_id: key.key_id.clone(),
        })
    }
}

fn decode_key(encoded: &str) -> Result<crypto_box::PublicKey> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| CipherError::InvalidKey(e.to_string()))?;

    let raw: [u8; KEY_SIZE] = bytes.as_slice().try_into().map_err(|_| {
        CipherError::InvalidKey(format!(
            "expected {} bytes, got {}",
            KEY_SIZE,
            bytes.len()
        ))
    })?;

    Ok(crypto_box::PublicKey::from(raw))
}
