//! Source of IVs, nonces and generated key material.

use aes_gcm_siv::aead::{rand_core::RngCore, OsRng};
use suite_common::{CipherError, Result};

/// A cryptographically secure random byte source.
///
/// Implementations must be safe to call concurrently and must fail rather
/// than hand out weak bytes.
#[cfg_attr(test, mockall::automock)]
pub trait EntropySource: Send + Sync {
    /// Fill `buf` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::RandomnessUnavailable`] if the source cannot
    /// produce bytes. Callers must not retry silently.
    fn fill(&self, buf: &mut [u8]) -> Result<()>;
}

/// The operating system CSPRNG.
///
/// May block briefly on platforms that are still collecting entropy at boot.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|_| CipherError::RandomnessUnavailable)
    }
}
