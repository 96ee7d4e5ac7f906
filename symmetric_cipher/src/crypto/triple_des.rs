use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricAlgorithm, SymmetricCipher};
use crate::crypto::des::DES;
use crate::crypto::error::CipherError;

/// Triple DES в схеме EDE. Ключ — 8, 16 или 24 байта.
pub struct TripleDES {
    des: [DES; 3],
}

impl TripleDES {
    pub fn new() -> Self {
        TripleDES {
            des: [DES::standard(), DES::standard(), DES::standard()],
        }
    }
}

impl Default for TripleDES {
    fn default() -> Self {
        Self::new()
    }
}

impl CipherAlgorithm for TripleDES {
    fn encrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        let result = self.des[0].encrypt(block)?;
        let result = self.des[1].decrypt(&result)?;
        self.des[2].encrypt(&result)
    }

    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        let result = self.des[2].decrypt(block)?;
        let result = self.des[1].encrypt(&result)?;
        self.des[0].decrypt(&result)
    }
}

impl SymmetricCipher for TripleDES {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if !matches!(key.len(), 8 | 16 | 24) {
            return Err(CipherError::InvalidLength {
                context: "Triple DES key",
                got: key.len(),
            });
        }
        let k2_start = if key.len() > 8 { 8 } else { 0 };
        let k3_start = if key.len() == 24 { 16 } else { 0 };
        self.des[0].set_key(&key[..8])?;
        self.des[1].set_key(&key[k2_start..k2_start + 8])?;
        self.des[2].set_key(&key[k3_start..k3_start + 8])
    }
}

impl SymmetricAlgorithm for TripleDES {
    fn block_size(&self) -> usize {
        8
    }
}
