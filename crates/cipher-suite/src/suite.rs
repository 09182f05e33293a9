//! [`CipherSuite`]: the string-in, string-out surface over [`crate::crypto`].
//!
//! A suite is an immutable handle. It owns only its entropy source, so one
//! instance can be shared freely between threads or built per call.

use suite_common::{CipherBlob, Result};
use tracing::{debug, instrument};

use crate::config::Config;
use crate::crypto::{cbc, sealed, SealedBlob};
use crate::entropy::{EntropySource, OsEntropy};
use crate::key::{self, KeyMaterial};

/// Encrypt, decrypt and generate key material.
#[derive(Debug, Clone, Default)]
pub struct CipherSuite<E = OsEntropy> {
    entropy: E,
}

impl CipherSuite {
    /// A suite backed by the operating system CSPRNG.
    pub fn new() -> Self {
        Self { entropy: OsEntropy }
    }
}

impl<E: EntropySource> CipherSuite<E> {
    /// A suite drawing IVs, nonces and keys from `entropy`.
    pub fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }

    /// AES-256-CBC encrypt `plaintext`, returning base64 of `IV || ciphertext`.
    ///
    /// # Errors
    ///
    /// [`CipherError::InvalidKeyLength`](suite_common::CipherError::InvalidKeyLength)
    /// if `key_material` is not 32 bytes;
    /// [`CipherError::RandomnessUnavailable`](suite_common::CipherError::RandomnessUnavailable)
    /// if no IV can be drawn.
    #[instrument(skip_all, fields(plaintext_len = plaintext.len()))]
    pub fn encrypt(&self, plaintext: &str, key_material: &str) -> Result<String> {
        let key = KeyMaterial::from_str_material(key_material)?;
        self.encrypt_with(plaintext, &key)
    }

    /// Decrypt a blob produced by [`CipherSuite::encrypt`].
    ///
    /// Each failure keeps its own [`CipherError`](suite_common::CipherError)
    /// variant. Without a MAC a wrong key can still yield garbage text.
    #[instrument(skip_all, fields(blob_len = blob.len()))]
    pub fn decrypt(&self, blob: &str, key_material: &str) -> Result<String> {
        let key = KeyMaterial::from_str_material(key_material)?;
        self.decrypt_with(blob, &key)
    }

    /// Generate a 32-character base64-alphabet key-material string.
    #[instrument(skip_all)]
    pub fn generate_key_material(&self) -> Result<String> {
        let material = key::generate_key_material(&self.entropy)?;
        debug!("generated key material");
        Ok(material)
    }

    /// AES-256-GCM-SIV encrypt `plaintext`; see [`crate::crypto::sealed`].
    #[instrument(skip_all, fields(plaintext_len = plaintext.len()))]
    pub fn seal(&self, plaintext: &str, key_material: &str) -> Result<String> {
        let key = KeyMaterial::from_str_material(key_material)?;
        self.seal_with(plaintext, &key)
    }

    /// Verify and decrypt a blob produced by [`CipherSuite::seal`].
    #[instrument(skip_all, fields(blob_len = blob.len()))]
    pub fn open(&self, blob: &str, key_material: &str) -> Result<String> {
        let key = KeyMaterial::from_str_material(key_material)?;
        self.open_with(blob, &key)
    }

    /// Validate `key_material` once and bind it to this suite.
    pub fn bind(self, key_material: &str) -> Result<BoundSuite<E>> {
        let key = KeyMaterial::from_str_material(key_material)?;
        Ok(BoundSuite { suite: self, key })
    }

    fn encrypt_with(&self, plaintext: &str, key: &KeyMaterial) -> Result<String> {
        let encoded = cbc::encrypt(&self.entropy, plaintext, key)?.encode();
        debug!(encoded_len = encoded.len(), "encrypted");
        Ok(encoded)
    }

    fn decrypt_with(&self, blob: &str, key: &KeyMaterial) -> Result<String> {
        let parsed = CipherBlob::decode(blob)?;
        let plaintext = cbc::decrypt(&parsed, key)?;
        debug!(plaintext_len = plaintext.len(), "decrypted");
        Ok(plaintext)
    }

    fn seal_with(&self, plaintext: &str, key: &KeyMaterial) -> Result<String> {
        let encoded = sealed::seal(&self.entropy, plaintext, key)?.encode();
        debug!(encoded_len = encoded.len(), "sealed");
        Ok(encoded)
    }

    fn open_with(&self, blob: &str, key: &KeyMaterial) -> Result<String> {
        let parsed = SealedBlob::decode(blob)?;
        let plaintext = sealed::open(&parsed, key)?;
        debug!(plaintext_len = plaintext.len(), "opened");
        Ok(plaintext)
    }
}

/// A [`CipherSuite`] holding one validated key.
///
/// The key is zeroized when the bound suite is dropped.
#[derive(Debug, Clone)]
pub struct BoundSuite<E = OsEntropy> {
    suite: CipherSuite<E>,
    key: KeyMaterial,
}

impl BoundSuite {
    /// Bind the key material from `cfg` to an OS-backed suite.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeyLength`](suite_common::CipherError::InvalidKeyLength)
    /// if the configured key is not 32 bytes.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        CipherSuite::new().bind(&cfg.key_material)
    }
}

impl<E: EntropySource> BoundSuite<E> {
    /// See [`CipherSuite::encrypt`].
    #[instrument(skip_all, fields(plaintext_len = plaintext.len()))]
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        self.suite.encrypt_with(plaintext, &self.key)
    }

    /// See [`CipherSuite::decrypt`].
    #[instrument(skip_all, fields(blob_len = blob.len()))]
    pub fn decrypt(&self, blob: &str) -> Result<String> {
        self.suite.decrypt_with(blob, &self.key)
    }

    /// See [`CipherSuite::seal`].
    #[instrument(skip_all, fields(plaintext_len = plaintext.len()))]
    pub fn seal(&self, plaintext: &str) -> Result<String> {
        self.suite.seal_with(plaintext, &self.key)
    }

    /// See [`CipherSuite::open`].
    #[instrument(skip_all, fields(blob_len = blob.len()))]
    pub fn open(&self, blob: &str) -> Result<String> {
        self.suite.open_with(blob, &self.key)
    }
}
