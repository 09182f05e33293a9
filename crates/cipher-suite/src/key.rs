//! Key material: validation, in-memory handling and generation.
//!
//! The AES key is the UTF-8 byte encoding of the caller's string, used as-is.
//! No hashing or stretching is applied; changing that would break every
//! previously encrypted value.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use suite_common::{CipherError, Result};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::entropy::EntropySource;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Number of characters in a generated key-material string.
pub const GENERATED_KEY_CHARS: usize = 32;

/// Random bytes drawn per generated key (base64-encodes to exactly 32 chars).
pub const GENERATOR_RAW_BYTES: usize = 24;

/// A validated 32-byte AES-256 key.
///
/// The bytes are overwritten with zeroes when dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial([u8; KEY_LEN]);

impl KeyMaterial {
    /// Validate `material` and take its UTF-8 bytes as the key.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeyLength`] if the string is not exactly
    /// [`KEY_LEN`] bytes long. Lengths are never coerced.
    pub fn from_str_material(material: &str) -> Result<Self> {
        Self::from_bytes(material.as_bytes())
    }

    /// Take `bytes` as the key.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeyLength`] if `bytes` is not [`KEY_LEN`] long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let key: [u8; KEY_LEN] = bytes
            .try_into()
            .map_err(|_| CipherError::InvalidKeyLength {
                actual: bytes.len(),
            })?;
        Ok(Self(key))
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("KeyMaterial([REDACTED])")
    }
}

/// Generate a fresh 32-character key-material string.
///
/// Draws [`GENERATOR_RAW_BYTES`] random bytes, base64-encodes them and keeps
/// the first [`GENERATED_KEY_CHARS`] characters. The result only contains
/// `[A-Za-z0-9+/]`, so its UTF-8 encoding is exactly [`KEY_LEN`] bytes.
///
/// # Errors
///
/// Returns [`CipherError::RandomnessUnavailable`] if `entropy` fails.
pub fn generate_key_material(entropy: &dyn EntropySource) -> Result<String> {
    let mut raw = [0u8; GENERATOR_RAW_BYTES];
    entropy.fill(&mut raw)?;
    let mut encoded = STANDARD.encode(raw);
    raw.zeroize();
    encoded.truncate(GENERATED_KEY_CHARS);
    Ok(encoded)
}
