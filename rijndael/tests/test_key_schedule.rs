use hex_literal::hex;
use rijndael::rijndael::key_schedule::{expand_key, rounds_count, RijndaelKeyExpansion};
use rijndael::rijndael::sbox::generate_s_box;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;

const AES_MODULUS: u8 = 0x1B;

#[test]
fn rounds_table() {
    assert_eq!(rounds_count(16, 16), 10);
    assert_eq!(rounds_count(16, 24), 12);
    assert_eq!(rounds_count(16, 32), 14);
    assert_eq!(rounds_count(24, 16), 12);
    assert_eq!(rounds_count(24, 24), 12);
    assert_eq!(rounds_count(24, 32), 14);
    assert_eq!(rounds_count(32, 16), 14);
    assert_eq!(rounds_count(32, 24), 14);
    assert_eq!(rounds_count(32, 32), 14);
}

#[test]
fn aes128_expansion_matches_fips_words() {
    let key = hex!("2B7E151628AED2A6ABF7158809CF4F3C");
    let s_box = generate_s_box(AES_MODULUS).unwrap();
    let round_keys = expand_key(&key, &s_box, AES_MODULUS, 16).unwrap();

    assert_eq!(round_keys.len(), 11);
    assert_eq!(round_keys[0], key);
    // w4..w7
    assert_eq!(
        round_keys[1],
        hex!("A0FAFE1788542CB123A339392A6C7605")
    );
    // w40..w43
    assert_eq!(
        round_keys[10],
        hex!("D014F9A8C9EE2589E13F0CC8B6630CA6")
    );
}

#[test]
fn subkey_sizes_follow_block_size() {
    let s_box = generate_s_box(AES_MODULUS).unwrap();
    for (block_size, key_size) in [(16usize, 32usize), (24, 16), (32, 16), (32, 32)] {
        let key = vec![0x42u8; key_size];
        let round_keys = expand_key(&key, &s_box, AES_MODULUS, block_size).unwrap();
        assert_eq!(round_keys.len(), rounds_count(block_size, key_size) + 1);
        for round_key in &round_keys {
            assert_eq!(round_key.len(), block_size);
        }
    }
}

#[test]
fn expansion_rejects_bad_key_length() {
    let s_box = generate_s_box(AES_MODULUS).unwrap();
    assert!(expand_key(&[0u8; 20], &s_box, AES_MODULUS, 16).is_err());
}

#[test]
fn trait_wrapper_matches_free_function() {
    let key = hex!("2B7E151628AED2A6ABF7158809CF4F3C");
    let s_box = generate_s_box(AES_MODULUS).unwrap();

    let expansion = RijndaelKeyExpansion::new(s_box, AES_MODULUS, 16);
    assert_eq!(
        expansion.generate_round_keys(&key).unwrap(),
        expand_key(&key, &s_box, AES_MODULUS, 16).unwrap()
    );
}
