use hex_literal::hex;
use std::sync::Arc;
use symmetric_cipher::crypto::cipher_traits::{CipherAlgorithm, SymmetricAlgorithm, SymmetricCipher};
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::crypto::des_key_expansion::DesKeyExpansion;
use symmetric_cipher::crypto::des_transformation::DesTransformation;
use symmetric_cipher::crypto::encryption_transformation::EncryptionTransformation;
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;

#[test]
fn key_schedule_matches_published_walkthrough() {
    let key = hex!("133457799BBCDFF1");
    let round_keys = DesKeyExpansion.generate_round_keys(&key).unwrap();

    assert_eq!(round_keys.len(), 16);
    for round_key in &round_keys {
        assert_eq!(round_key.len(), 6);
    }
    assert_eq!(round_keys[0], hex!("1B02EFFC7072"));
}

#[test]
fn key_schedule_rejects_wrong_size() {
    assert!(matches!(
        DesKeyExpansion.generate_round_keys(&[0u8; 7]),
        Err(CipherError::InvalidLength { .. })
    ));
}

#[test]
fn round_function_matches_published_walkthrough() {
    // R0 после IP и K1 из того же разбора
    let r0 = hex!("F0AAF0AA");
    let k1 = hex!("1B02EFFC7072");
    let out = DesTransformation.transform(&r0, &k1).unwrap();
    assert_eq!(out, hex!("234AA9BB"));
}

#[test]
fn round_function_rejects_wrong_sizes() {
    assert!(DesTransformation.transform(&[0u8; 3], &[0u8; 6]).is_err());
    assert!(DesTransformation.transform(&[0u8; 4], &[0u8; 5]).is_err());
}

#[test]
fn encrypts_reference_vector() {
    let mut des = DES::new(Arc::new(DesKeyExpansion), Arc::new(DesTransformation));
    des.set_key(&hex!("133457799BBCDFF1")).unwrap();

    let ciphertext = des.encrypt(&hex!("0123456789ABCDEF")).unwrap();
    assert_eq!(ciphertext, hex!("85E813540F0AB405"));

    let decrypted = des.decrypt(&ciphertext).unwrap();
    assert_eq!(decrypted, hex!("0123456789ABCDEF"));
}

#[test]
fn encrypts_to_all_zero_block() {
    let mut des = DES::standard();
    des.set_key(&hex!("0E329232EA6D0D73")).unwrap();
    let ciphertext = des.encrypt(&hex!("8787878787878787")).unwrap();
    assert_eq!(ciphertext, hex!("0000000000000000"));
}

#[test]
fn roundtrip_random_blocks() {
    let mut des = DES::standard();
    des.set_key(b"8bytekey").unwrap();
    for _ in 0..32 {
        let block = symmetric_cipher::crypto::utils::random_bytes(8);
        let encrypted = des.encrypt(&block).unwrap();
        assert_eq!(des.decrypt(&encrypted).unwrap(), block);
    }
}

#[test]
fn reports_block_size() {
    assert_eq!(DES::standard().block_size(), 8);
}

#[test]
fn rejects_use_before_keying() {
    let des = DES::standard();
    assert!(matches!(
        des.encrypt(&[0u8; 8]),
        Err(CipherError::MissingKey)
    ));
}

#[test]
fn rejects_wrong_block_size() {
    let mut des = DES::standard();
    des.set_key(b"8bytekey").unwrap();
    assert!(matches!(
        des.encrypt(&[0u8; 7]),
        Err(CipherError::InvalidLength { .. })
    ));
}
