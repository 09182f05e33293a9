//! AES-256-CBC encryption and decryption of text values with PKCS#7 padding.
//!
//! **No integrity protection.** CBC without a MAC is malleable: flipping a
//! ciphertext bit flips the matching bit of the next plaintext block, and a
//! wrong key may still unpad into valid-looking text. If [`decrypt`] is reachable
//! by an adversary, the distinct padding and UTF-8 errors form a padding
//! oracle. Use [`crate::crypto::sealed`] for anything new, or put a MAC around
//! the blob.

use aes::Aes256;
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use suite_common::{CipherBlob, CipherError, Result, BLOCK_LEN, IV_LEN};
use zeroize::Zeroize;

use crate::entropy::EntropySource;
use crate::key::KeyMaterial;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Encrypt `plaintext` under `key` with a fresh IV.
///
/// The padded plaintext is always one to sixteen bytes longer than the input;
/// an input that is already block-aligned gains a full padding block.
///
/// # Errors
///
/// Returns [`CipherError::RandomnessUnavailable`] if no IV can be drawn.
pub fn encrypt(
    entropy: &dyn EntropySource,
    plaintext: &str,
    key: &KeyMaterial,
) -> Result<CipherBlob> {
    let mut iv = [0u8; IV_LEN];
    entropy.fill(&mut iv)?;

    let ciphertext = Aes256CbcEnc::new(key.as_bytes().into(), (&iv).into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    Ok(CipherBlob { iv, ciphertext })
}

/// Decrypt a [`CipherBlob`] back to text.
///
/// # Errors
///
/// - [`CipherError::InvalidBlobLength`] if the ciphertext is empty or unaligned.
/// - [`CipherError::DecryptionFailure`] if the cipher cannot be initialised.
/// - [`CipherError::InvalidPadding`] if PKCS#7 validation fails.
/// - [`CipherError::InvalidUtf8`] if the unpadded bytes are not UTF-8.
///
/// A wrong key or a corrupted blob can also succeed and return garbage.
pub fn decrypt(blob: &CipherBlob, key: &KeyMaterial) -> Result<String> {
    if blob.ciphertext.is_empty() || blob.ciphertext.len() % BLOCK_LEN != 0 {
        return Err(CipherError::InvalidBlobLength {
            actual: IV_LEN + blob.ciphertext.len(),
        });
    }

    let decryptor = Aes256CbcDec::new_from_slices(key.as_bytes(), &blob.iv)
        .map_err(|_| CipherError::DecryptionFailure)?;

    let plaintext = decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(&blob.ciphertext)
        .map_err(|_| CipherError::InvalidPadding)?;

    String::from_utf8(plaintext).map_err(|e| {
        e.into_bytes().zeroize();
        CipherError::InvalidUtf8
    })
}
