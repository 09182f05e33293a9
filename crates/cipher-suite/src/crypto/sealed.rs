//! Authenticated companion mode: AES-256-GCM-SIV over the same key material.
//!
//! Blobs produced here are **not** interchangeable with CBC blobs and are
//! never auto-detected; callers pick the mode explicitly.
//!
//! ```text
//! base64-standard-padded( nonce(12 bytes) || ciphertext || tag(16 bytes) )
//! ```
//!
//! AES-GCM-SIV (RFC 8452) stays safe if a nonce ever repeats, leaking only
//! whether two plaintexts were equal. Tampering or a wrong key is always
//! reported as [`CipherError::AuthenticationFailure`].

use aes_gcm_siv::{
    aead::{Aead, KeyInit},
    Aes256GcmSiv, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use suite_common::{CipherError, Result};

use crate::entropy::EntropySource;
use crate::key::KeyMaterial;

/// Byte length of an AES-GCM-SIV nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of the authentication tag appended to every ciphertext.
pub const TAG_LEN: usize = 16;

/// A parsed, authenticated encrypted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedBlob {
    /// Raw nonce bytes.
    pub nonce: [u8; NONCE_LEN],
    /// Raw ciphertext + authentication tag bytes.
    pub ciphertext: Vec<u8>,
}

impl SealedBlob {
    /// Encode as base64 of `nonce || ciphertext+tag`.
    pub fn encode(&self) -> String {
        let mut raw = Vec::with_capacity(NONCE_LEN + self.ciphertext.len());
        raw.extend_from_slice(&self.nonce);
        raw.extend_from_slice(&self.ciphertext);
        STANDARD.encode(raw)
    }

    /// Parse an encoded sealed blob.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidEncoding`] if `encoded` is not valid base64,
    /// and [`CipherError::InvalidBlobLength`] if it cannot hold a nonce and a tag.
    pub fn decode(encoded: &str) -> Result<Self> {
        let raw = STANDARD
            .decode(encoded)
            .map_err(|_| CipherError::InvalidEncoding)?;
        if raw.len() < NONCE_LEN + TAG_LEN {
            return Err(CipherError::InvalidBlobLength { actual: raw.len() });
        }

        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&raw[..NONCE_LEN]);
        Ok(Self {
            nonce,
            ciphertext: raw[NONCE_LEN..].to_vec(),
        })
    }
}

/// Encrypt and authenticate `plaintext` under `key` with a fresh nonce.
///
/// # Errors
///
/// Returns [`CipherError::RandomnessUnavailable`] if no nonce can be drawn, and
/// [`CipherError::EncryptionFailure`] on an internal AEAD error.
pub fn seal(
    entropy: &dyn EntropySource,
    plaintext: &str,
    key: &KeyMaterial,
) -> Result<SealedBlob> {
    let cipher = Aes256GcmSiv::new(key.as_bytes().into());

    let mut nonce_bytes = [0u8; NONCE_LEN];
    entropy.fill(&mut nonce_bytes)?;
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_bytes())
        .map_err(|_| CipherError::EncryptionFailure)?;

    Ok(SealedBlob {
        nonce: nonce_bytes,
        ciphertext,
    })
}

/// Verify and decrypt a [`SealedBlob`].
///
/// # Errors
///
/// Returns [`CipherError::AuthenticationFailure`] if the tag does not verify
/// (wrong key or tampered data), and [`CipherError::InvalidUtf8`] if the
/// authenticated bytes are not text.
pub fn open(blob: &SealedBlob, key: &KeyMaterial) -> Result<String> {
    let cipher = Aes256GcmSiv::new(key.as_bytes().into());
    let nonce = Nonce::from_slice(&blob.nonce);
    let plaintext = cipher
        .decrypt(nonce, blob.ciphertext.as_ref())
        .map_err(|_| CipherError::AuthenticationFailure)?;
    String::from_utf8(plaintext).map_err(|_| CipherError::InvalidUtf8)
}
