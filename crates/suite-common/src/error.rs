//! Error taxonomy shared across crates.

use thiserror::Error;

/// Convenience alias used by every cipher operation.
pub type Result<T> = std::result::Result<T, CipherError>;

/// Errors produced by the cipher suite.
///
/// Every failure is surfaced to the immediate caller as its own variant so that
/// operator error (wrong key), data corruption and format errors stay
/// distinguishable. Display text never contains key bytes or plaintext.
///
/// Stable machine-readable codes are available via [`CipherError::code`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// The key material is not exactly 32 bytes once UTF-8 encoded.
    #[error("invalid key length: expected 32 bytes, got {actual}")]
    InvalidKeyLength {
        /// Byte length of the rejected key material.
        actual: usize,
    },

    /// The encoded blob is not valid standard-alphabet base64.
    #[error("encoded blob is not valid base64")]
    InvalidEncoding,

    /// The decoded blob is too short or not block-aligned.
    #[error("invalid blob length: {actual} bytes")]
    InvalidBlobLength {
        /// Decoded byte length of the rejected blob.
        actual: usize,
    },

    /// The block cipher could not be set up or run.
    #[error("decryption failed")]
    DecryptionFailure,

    /// PKCS#7 padding did not validate after decryption.
    ///
    /// Usually a wrong key or a tampered ciphertext.
    #[error("invalid padding")]
    InvalidPadding,

    /// Decrypted bytes are not valid UTF-8.
    #[error("decrypted data is not valid UTF-8")]
    InvalidUtf8,

    /// The system random source failed to produce bytes.
    #[error("secure random source unavailable")]
    RandomnessUnavailable,

    /// Authenticated decryption rejected the blob (wrong key or tampered data).
    #[error("authentication failed")]
    AuthenticationFailure,

    /// Authenticated encryption failed inside the AEAD.
    #[error("encryption failed")]
    EncryptionFailure,
}

impl CipherError {
    /// Returns the stable snake_case code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            CipherError::InvalidKeyLength { .. } => "invalid_key_length",
            CipherError::InvalidEncoding => "invalid_encoding",
            CipherError::InvalidBlobLength { .. } => "invalid_blob_length",
            CipherError::DecryptionFailure => "decryption_failure",
            CipherError::InvalidPadding => "invalid_padding",
            CipherError::InvalidUtf8 => "invalid_utf8",
            CipherError::RandomnessUnavailable => "randomness_unavailable",
            CipherError::AuthenticationFailure => "authentication_failure",
            CipherError::EncryptionFailure => "encryption_failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let all = [
            CipherError::InvalidKeyLength { actual: 0 },
            CipherError::InvalidEncoding,
            CipherError::InvalidBlobLength { actual: 0 },
            CipherError::DecryptionFailure,
            CipherError::InvalidPadding,
            CipherError::InvalidUtf8,
            CipherError::RandomnessUnavailable,
            CipherError::AuthenticationFailure,
            CipherError::EncryptionFailure,
        ];
        let mut codes: Vec<_> = all.iter().map(CipherError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn display_includes_lengths() {
        let e = CipherError::InvalidKeyLength { actual: 31 };
        assert!(e.to_string().contains("31"));
        let e = CipherError::InvalidBlobLength { actual: 20 };
        assert!(e.to_string().contains("20"));
    }
}
