use hex_literal::hex;
use rand::RngCore;
use rijndael::Rijndael;
use std::sync::Arc;
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use symmetric_cipher::crypto::utils::apply_padding;

const AES_MODULUS: u8 = 0x1B;

fn random_data(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

fn keyed_aes128() -> Arc<Rijndael> {
    let mut cipher = Rijndael::new(16, 16, AES_MODULUS).unwrap();
    cipher
        .set_key(&hex!("2B7E151628AED2A6ABF7158809CF4F3C"))
        .unwrap();
    Arc::new(cipher)
}

#[tokio::test]
async fn ecb_bulk_matches_per_block_reference() {
    let algorithm = keyed_aes128();
    let data = random_data(10_000);

    let ctx = CipherContext::new(algorithm.clone(), CipherMode::ECB, PaddingMode::PKCS7, None)
        .unwrap();
    let encrypted = ctx.encrypt(&data).await.unwrap();

    let padded = apply_padding(data, 16, PaddingMode::PKCS7);
    let mut expected = Vec::with_capacity(padded.len());
    for block in padded.chunks(16) {
        expected.extend(algorithm.encrypt(block).unwrap());
    }
    assert_eq!(encrypted, expected);
}

#[tokio::test]
async fn cbc_roundtrip_aes192() {
    let mut cipher = Rijndael::new(16, 24, AES_MODULUS).unwrap();
    cipher
        .set_key(&hex!("8E73B0F7DA0E6452C810F32B809079E562F8EAD2522C6B7B"))
        .unwrap();
    let algorithm: Arc<Rijndael> = Arc::new(cipher);

    let iv = random_data(16);
    let data = random_data(2000);

    let encrypt_ctx = CipherContext::new(
        algorithm.clone(),
        CipherMode::CBC,
        PaddingMode::ANSI_X923,
        Some(&iv),
    )
    .unwrap();
    let decrypt_ctx = CipherContext::new(
        algorithm,
        CipherMode::CBC,
        PaddingMode::ANSI_X923,
        Some(&iv),
    )
    .unwrap();

    let encrypted = encrypt_ctx.encrypt(&data).await.unwrap();
    assert_eq!(decrypt_ctx.decrypt(&encrypted).await.unwrap(), data);
}

#[tokio::test]
async fn ctr_keystream_is_contiguous_across_calls() {
    let algorithm = keyed_aes128();
    let iv = random_data(16);
    let first = random_data(160);
    let second = random_data(160);

    let split_ctx = CipherContext::new(
        algorithm.clone(),
        CipherMode::CTR,
        PaddingMode::PKCS7,
        Some(&iv),
    )
    .unwrap();
    let mut split_output = split_ctx.encrypt(&first).await.unwrap();
    split_output.extend(split_ctx.encrypt(&second).await.unwrap());

    let joined_ctx =
        CipherContext::new(algorithm, CipherMode::CTR, PaddingMode::PKCS7, Some(&iv)).unwrap();
    let joined = joined_ctx
        .encrypt(&[first, second].concat())
        .await
        .unwrap();
    assert_eq!(split_output, joined);
}

#[tokio::test]
async fn random_delta_roundtrip_aes256() {
    let mut cipher = Rijndael::new(16, 32, AES_MODULUS).unwrap();
    cipher
        .set_key(&hex!(
            "603DEB1015CA71BE2B73AEF0857D77811F352C073B6108D72D9810A30914DFF4"
        ))
        .unwrap();
    let algorithm: Arc<Rijndael> = Arc::new(cipher);

    let data = random_data(5000);
    let encrypt_ctx = CipherContext::new(
        algorithm.clone(),
        CipherMode::RandomDelta,
        PaddingMode::PKCS7,
        None,
    )
    .unwrap();
    let decrypt_ctx = CipherContext::new(
        algorithm,
        CipherMode::RandomDelta,
        PaddingMode::PKCS7,
        None,
    )
    .unwrap();

    let encrypted = encrypt_ctx.encrypt(&data).await.unwrap();
    assert_eq!(encrypted.len(), 5008 + 16);
    assert_eq!(decrypt_ctx.decrypt(&encrypted).await.unwrap(), data);
}

#[tokio::test]
async fn wide_blocks_roundtrip_through_modes() {
    // нестандартные размеры блока Rijndael в связке с движком режимов
    for block_size in [24usize, 32] {
        let mut cipher = Rijndael::new(block_size, 16, AES_MODULUS).unwrap();
        cipher.set_key(&random_data(16)).unwrap();
        let algorithm: Arc<Rijndael> = Arc::new(cipher);

        let iv = random_data(block_size);
        let data = random_data(3 * block_size + 7);

        for mode in [CipherMode::CBC, CipherMode::CFB, CipherMode::CTR] {
            let encrypt_ctx = CipherContext::new(
                algorithm.clone(),
                mode,
                PaddingMode::PKCS7,
                Some(&iv),
            )
            .unwrap();
            let decrypt_ctx = CipherContext::new(
                algorithm.clone(),
                mode,
                PaddingMode::PKCS7,
                Some(&iv),
            )
            .unwrap();

            let encrypted = encrypt_ctx.encrypt(&data).await.unwrap();
            assert_eq!(
                decrypt_ctx.decrypt(&encrypted).await.unwrap(),
                data,
                "block {block_size}, mode {mode:?}"
            );
        }
    }
}
