//! Error taxonomy and wire format shared across the cipher-suite crates.

pub mod blob;
pub mod error;

pub use blob::{CipherBlob, BLOCK_LEN, IV_LEN};
pub use error::{CipherError, Result};
