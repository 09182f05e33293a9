//! Block-cipher primitives behind the [`crate::CipherSuite`] facade.
//!
//! This module is free of configuration and logging. It works on validated
//! [`crate::KeyMaterial`] and parsed blobs only; string encoding and key
//! validation happen one layer up.
//!
//! - [`cbc`]: AES-256-CBC + PKCS#7, the compatibility format.
//! - [`sealed`]: AES-256-GCM-SIV, the authenticated format.

pub mod cbc;
pub mod sealed;

pub use sealed::SealedBlob;
