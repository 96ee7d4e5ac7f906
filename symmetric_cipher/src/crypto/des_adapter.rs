use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use crate::crypto::des::DES;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use std::cell::RefCell;

thread_local! {
    static TL_DES: RefCell<DES> = RefCell::new(DES::standard());
}

/// Раундовая функция DEAL: DES-шифрование правой половины,
/// раундовый ключ используется как ключ DES.
pub struct DesAdapter;

impl EncryptionTransformation for DesAdapter {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Result<Vec<u8>, CipherError> {
        if round_key.len() != 8 {
            return Err(CipherError::InvalidLength {
                context: "DEAL round key",
                got: round_key.len(),
            });
        }
        TL_DES.with(|cell| {
            let mut des = cell.borrow_mut();
            des.set_key(round_key)?;
            des.encrypt(input_block)
        })
    }
}
