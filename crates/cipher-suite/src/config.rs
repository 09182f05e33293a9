//! Configuration loading and validation for host applications.
//!
//! Values are read from `CIPHER_SUITE_*` environment variables. Loading fails
//! with a clear error if the key material is missing or has the wrong length.

use anyhow::{Context, Result};
use config::{builder::DefaultState, ConfigBuilder};
use serde::Deserialize;

use crate::key::KEY_LEN;

/// Environment variable prefix, e.g. `CIPHER_SUITE_KEY_MATERIAL`.
pub const ENV_PREFIX: &str = "CIPHER_SUITE";

/// Validated cipher-suite configuration.
#[derive(Clone, Deserialize)]
pub struct Config {
    /// Key material; its UTF-8 encoding must be exactly 32 bytes. **Required.**
    pub key_material: String,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CIPHER_SUITE_KEY_MATERIAL` is absent or invalid.
    pub fn from_env() -> Result<Self> {
        Self::from_builder(
            config::Config::builder().add_source(config::Environment::with_prefix(ENV_PREFIX)),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let cfg = builder
            .build()
            .context("failed to build cipher-suite configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise cipher-suite configuration")?;

        c.validate()?;
        Ok(c)
    }

    fn validate(&self) -> Result<()> {
        let len = self.key_material.len();
        if len != KEY_LEN {
            anyhow::bail!(
                "{ENV_PREFIX}_KEY_MATERIAL must be exactly {KEY_LEN} bytes when UTF-8 encoded, got {len}"
            );
        }
        if self.log_level.trim().is_empty() {
            anyhow::bail!("{ENV_PREFIX}_LOG_LEVEL must not be empty");
        }
        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("key_material", &"[REDACTED]")
            .field("log_level", &self.log_level)
            .finish()
    }
}
