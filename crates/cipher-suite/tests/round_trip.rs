//! Public-API behaviour of the cipher suite: round trips, tampering,
//! malformed input and concurrent use.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use cipher_suite::{decrypt, encrypt, generate_key_material, CipherError, CipherSuite};
use proptest::prelude::*;
use std::sync::Arc;

#[test]
fn hello_world_blob_is_44_chars() {
    let k = generate_key_material().unwrap();
    let blob = encrypt("Hello, World!", &k).unwrap();
    assert_eq!(blob.len(), 44);
    assert!(STANDARD.decode(&blob).is_ok());
    assert_eq!(decrypt(&blob, &k).unwrap(), "Hello, World!");
}

#[test]
fn empty_plaintext_round_trips() {
    let k = generate_key_material().unwrap();
    let blob = encrypt("", &k).unwrap();
    assert_eq!(STANDARD.decode(&blob).unwrap().len(), 32);
    assert_eq!(decrypt(&blob, &k).unwrap(), "");
}

#[test]
fn caller_supplied_key_is_used_verbatim() {
    // Any 32-byte string works, including multi-byte UTF-8.
    let k = "ключключключключ";
    assert_eq!(k.len(), 32);
    let blob = encrypt("παράδειγμα", k).unwrap();
    assert_eq!(decrypt(&blob, k).unwrap(), "παράδειγμα");
}

#[test]
fn single_byte_flip_never_reproduces_plaintext() {
    let k = generate_key_material().unwrap();
    let original = "attack at dawn, bring snacks";
    let blob = encrypt(original, &k).unwrap();
    let raw = STANDARD.decode(&blob).unwrap();

    for i in 16..raw.len() {
        let mut tampered = raw.clone();
        tampered[i] ^= 0x01;
        match decrypt(&STANDARD.encode(&tampered), &k) {
            Ok(text) => assert_ne!(text, original, "flip at byte {i}"),
            Err(e) => assert!(
                matches!(e, CipherError::InvalidPadding | CipherError::InvalidUtf8),
                "unexpected error {e:?} at byte {i}"
            ),
        }
    }
}

#[test]
fn malformed_input_is_classified() {
    let k = generate_key_material().unwrap();
    assert_eq!(decrypt("not*base64", &k), Err(CipherError::InvalidEncoding));
    assert_eq!(
        decrypt(&STANDARD.encode([0u8; 15]), &k),
        Err(CipherError::InvalidBlobLength { actual: 15 })
    );
    assert_eq!(
        decrypt(&STANDARD.encode([0u8; 16 + 24]), &k),
        Err(CipherError::InvalidBlobLength { actual: 40 })
    );
}

#[test]
fn sealed_mode_detects_every_flip() {
    let suite = CipherSuite::new();
    let k = suite.generate_key_material().unwrap();
    let blob = suite.seal("attack at dawn", &k).unwrap();
    let raw = STANDARD.decode(&blob).unwrap();

    for i in 0..raw.len() {
        let mut tampered = raw.clone();
        tampered[i] ^= 0x80;
        assert_eq!(
            suite.open(&STANDARD.encode(&tampered), &k),
            Err(CipherError::AuthenticationFailure)
        );
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_suite_is_safe_across_tasks() {
    let suite = Arc::new(CipherSuite::new());
    let k: Arc<str> = suite.generate_key_material().unwrap().into();

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let suite = Arc::clone(&suite);
            let k = Arc::clone(&k);
            tokio::spawn(async move {
                let plaintext = format!("message #{i}");
                let blob = suite.encrypt(&plaintext, &k).unwrap();
                assert_eq!(suite.decrypt(&blob, &k).unwrap(), plaintext);
                blob
            })
        })
        .collect();

    let mut blobs = Vec::new();
    for h in handles {
        blobs.push(h.await.unwrap());
    }
    blobs.sort();
    blobs.dedup();
    assert_eq!(blobs.len(), 64);
}

proptest! {
    #[test]
    fn any_text_round_trips(plaintext in any::<String>()) {
        let k = generate_key_material().unwrap();
        let blob = encrypt(&plaintext, &k).unwrap();
        let raw_len = STANDARD.decode(&blob).unwrap().len();
        prop_assert_eq!(raw_len, (plaintext.len() / 16 + 1) * 16 + 16);
        prop_assert_eq!(decrypt(&blob, &k).unwrap(), plaintext);
    }

    #[test]
    fn any_text_seals(plaintext in any::<String>()) {
        let suite = CipherSuite::new();
        let k = suite.generate_key_material().unwrap();
        let blob = suite.seal(&plaintext, &k).unwrap();
        prop_assert_eq!(suite.open(&blob, &k).unwrap(), plaintext);
    }

    #[test]
    fn generated_keys_are_base64_alphabet(_seed in 0u8..8) {
        let k = generate_key_material().unwrap();
        prop_assert_eq!(k.len(), 32);
        prop_assert!(k.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/'));
    }
}
