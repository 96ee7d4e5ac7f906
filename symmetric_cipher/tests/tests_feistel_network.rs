use std::sync::Arc;
use symmetric_cipher::crypto::encryption_transformation::EncryptionTransformation;
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::feistel_network::FeistelNetwork;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;

struct MockKeyExpansion;

impl KeyExpansion for MockKeyExpansion {
    fn generate_round_keys(&self, _key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        Ok(vec![vec![0x0F; 4], vec![0x3C; 4], vec![0xA5; 4]])
    }
}

struct MockTransformation;

impl EncryptionTransformation for MockTransformation {
    fn transform(&self, block: &[u8], round_key: &[u8]) -> Result<Vec<u8>, CipherError> {
        Ok(block
            .iter()
            .zip(round_key.iter().cycle())
            .map(|(b, k)| b ^ k)
            .collect())
    }
}

fn network() -> FeistelNetwork {
    FeistelNetwork::new(3, Arc::new(MockKeyExpansion), Arc::new(MockTransformation))
}

#[test]
fn encrypt_decrypt_roundtrip() {
    let network = network();
    let round_keys = network.generate_round_keys(b"dummykey").unwrap();
    let block = b"\x12\x34\x56\x78\x9A\xBC\xDE\xF0";

    let encrypted = network.encrypt_with_round_keys(block, &round_keys).unwrap();
    assert_eq!(encrypted.len(), block.len());
    assert_ne!(&encrypted[..], &block[..]);

    let decrypted = network.decrypt_with_round_keys(&encrypted, &round_keys).unwrap();
    assert_eq!(&decrypted[..], &block[..]);
}

#[test]
fn single_zero_round_is_identity() {
    // один раунд с нулевой раундовой функцией — чистая перестановка половин
    struct ZeroTransformation;
    impl EncryptionTransformation for ZeroTransformation {
        fn transform(&self, block: &[u8], _round_key: &[u8]) -> Result<Vec<u8>, CipherError> {
            Ok(vec![0; block.len()])
        }
    }

    let network = FeistelNetwork::new(1, Arc::new(MockKeyExpansion), Arc::new(ZeroTransformation));
    let round_keys = vec![vec![0u8; 4]];
    let encrypted = network
        .encrypt_with_round_keys(&[1, 2, 3, 4, 5, 6, 7, 8], &round_keys)
        .unwrap();
    // L1 = R0, R1 = L0; на выходе R1 || L1
    assert_eq!(encrypted, [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn rejects_odd_block() {
    let network = network();
    let round_keys = network.generate_round_keys(b"dummykey").unwrap();
    assert!(matches!(
        network.encrypt_with_round_keys(&[1, 2, 3], &round_keys),
        Err(CipherError::InvalidLength { .. })
    ));
    assert!(matches!(
        network.encrypt_with_round_keys(&[], &round_keys),
        Err(CipherError::InvalidLength { .. })
    ));
}

#[test]
fn rejects_missing_round_keys() {
    let network = network();
    assert!(matches!(
        network.encrypt_with_round_keys(&[1, 2, 3, 4], &[]),
        Err(CipherError::MissingKey)
    ));
}

#[test]
fn rejects_short_schedule() {
    let network = network();
    let short = vec![vec![0u8; 4]; 2];
    assert!(matches!(
        network.encrypt_with_round_keys(&[1, 2, 3, 4], &short),
        Err(CipherError::InvalidLength { .. })
    ));
}
