use std::sync::Arc;
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_traits::SymmetricCipher;
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use symmetric_cipher::crypto::deal::DEAL;
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::utils::random_bytes;

#[tokio::main]
async fn main() -> Result<(), CipherError> {
    env_logger::init();

    let text = "The quick brown fox jumps over the lazy dog. Symmetric encryption test string!";
    let data = text.as_bytes();

    // === DES ===
    let mut des = DES::standard();
    des.set_key(&random_bytes(8))?;
    let iv = random_bytes(8);

    let ctx = CipherContext::new(Arc::new(des), CipherMode::CBC, PaddingMode::PKCS7, Some(&iv))?;
    let encrypted = ctx.encrypt(data).await?;
    println!("DES CBC+PKCS7: {} bytes -> {} bytes", data.len(), encrypted.len());

    // === DEAL ===
    let mut deal = DEAL::new();
    deal.set_key(&random_bytes(24))?;
    let algorithm = Arc::new(deal);

    let encrypt_ctx =
        CipherContext::new(algorithm.clone(), CipherMode::ECB, PaddingMode::ANSI_X923, None)?;
    let decrypt_ctx =
        CipherContext::new(algorithm, CipherMode::ECB, PaddingMode::ANSI_X923, None)?;

    let encrypted = encrypt_ctx.encrypt(data).await?;
    let decrypted = decrypt_ctx.decrypt(&encrypted).await?;
    assert_eq!(data, &decrypted[..]);
    println!("DEAL ECB+ANSI X.923 roundtrip OK");

    Ok(())
}
