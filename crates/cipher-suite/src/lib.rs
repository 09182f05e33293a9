//! `cipher-suite`: AES-256-CBC encryption of short text values.
//!
//! Encrypted values are self-contained printable strings, suitable for config
//! files, URLs, logs or database columns:
//!
//! ```text
//! base64-standard-padded( IV(16 bytes) || AES-256-CBC(PKCS#7(utf8(plaintext))) )
//! ```
//!
//! The key is the UTF-8 encoding of a caller-supplied string and must be exactly
//! 32 bytes. [`generate_key_material`] produces one such string.
//!
//! # Limitations
//!
//! CBC blobs are **not authenticated**. A wrong key or a tampered blob may
//! decrypt to garbage instead of failing, and exposing decryption errors to an
//! adversary creates a padding oracle. Callers that need integrity should use
//! [`CipherSuite::seal`] / [`CipherSuite::open`] (AES-256-GCM-SIV) for new data
//! and keep CBC for values that already exist in that format.
//!
//! # Example
//!
//! ```
//! let key = cipher_suite::generate_key_material()?;
//! let blob = cipher_suite::encrypt("Hello, World!", &key)?;
//! assert_eq!(blob.len(), 44);
//! assert_eq!(cipher_suite::decrypt(&blob, &key)?, "Hello, World!");
//! # Ok::<(), cipher_suite::CipherError>(())
//! ```

pub mod config;
pub mod crypto;
pub mod entropy;
pub mod key;
pub mod suite;
pub mod telemetry;

pub use config::Config;
pub use entropy::{EntropySource, OsEntropy};
pub use key::{KeyMaterial, KEY_LEN};
pub use suite::{BoundSuite, CipherSuite};
pub use suite_common::{CipherBlob, CipherError, Result};

/// Encrypt `plaintext` with AES-256-CBC under `key_material`.
///
/// See [`CipherSuite::encrypt`].
pub fn encrypt(plaintext: &str, key_material: &str) -> Result<String> {
    CipherSuite::new().encrypt(plaintext, key_material)
}

/// Decrypt a blob produced by [`encrypt`].
///
/// See [`CipherSuite::decrypt`].
pub fn decrypt(blob: &str, key_material: &str) -> Result<String> {
    CipherSuite::new().decrypt(blob, key_material)
}

/// Generate a fresh 32-character key-material string.
pub fn generate_key_material() -> Result<String> {
    CipherSuite::new().generate_key_material()
}
