use crate::crypto::error::CipherError;

pub trait CipherAlgorithm {
    fn encrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
}

pub trait SymmetricCipher: CipherAlgorithm {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError>;
}

/// Полный интерфейс блочного алгоритма для движка режимов.
pub trait SymmetricAlgorithm: SymmetricCipher {
    fn block_size(&self) -> usize;
}
