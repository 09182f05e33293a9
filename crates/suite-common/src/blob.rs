//! Wire format of an encrypted value.
//!
//! ```text
//! base64-standard-padded( IV(16 bytes) || CBC-ciphertext(N bytes, N % 16 == 0, N > 0) )
//! ```
//!
//! There is no version prefix, length field or MAC. The layout must stay
//! bit-exact so existing stored values keep decrypting.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{CipherError, Result};

/// AES block size in bytes.
pub const BLOCK_LEN: usize = 16;

/// Byte length of the CBC initialisation vector.
pub const IV_LEN: usize = 16;

/// A parsed IV-prefixed ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherBlob {
    /// Raw IV bytes.
    pub iv: [u8; IV_LEN],
    /// CBC ciphertext, always a non-zero multiple of [`BLOCK_LEN`] when decoded.
    pub ciphertext: Vec<u8>,
}

impl CipherBlob {
    /// Encode as base64 of `iv || ciphertext`.
    pub fn encode(&self) -> String {
        let mut raw = Vec::with_capacity(IV_LEN + self.ciphertext.len());
        raw.extend_from_slice(&self.iv);
        raw.extend_from_slice(&self.ciphertext);
        STANDARD.encode(raw)
    }

    /// Parse an encoded blob.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidEncoding`] if `encoded` is not valid base64,
    /// and [`CipherError::InvalidBlobLength`] if the decoded bytes do not hold an
    /// IV followed by at least one whole cipher block.
    pub fn decode(encoded: &str) -> Result<Self> {
        let raw = STANDARD
            .decode(encoded)
            .map_err(|_| CipherError::InvalidEncoding)?;

        let body_len = raw.len().checked_sub(IV_LEN);
        match body_len {
            Some(n) if n > 0 && n % BLOCK_LEN == 0 => {}
            _ => return Err(CipherError::InvalidBlobLength { actual: raw.len() }),
        }

        let mut iv = [0u8; IV_LEN];
        iv.copy_from_slice(&raw[..IV_LEN]);
        Ok(Self {
            iv,
            ciphertext: raw[IV_LEN..].to_vec(),
        })
    }

    /// Raw (pre-base64) length of the blob produced for a plaintext of
    /// `plaintext_len` bytes. PKCS#7 always adds between 1 and 16 bytes.
    pub fn raw_len(plaintext_len: usize) -> usize {
        (plaintext_len / BLOCK_LEN + 1) * BLOCK_LEN + IV_LEN
    }
}

/// Length of the padded base64 encoding of `raw_len` bytes.
pub fn encoded_len(raw_len: usize) -> usize {
    raw_len.div_ceil(3) * 4
}
