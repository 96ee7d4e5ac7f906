use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use crate::crypto::des::DES;
use crate::crypto::error::CipherError;
use crate::crypto::key_expansion::KeyExpansion;

/// Фиксированный ключ расширения из описания DEAL.
const EXPANSION_KEY: [u8; 8] = [0x12, 0x34, 0x56, 0x78, 0x90, 0xAB, 0xCD, 0xEF];

pub struct DealKeyExpansion;

impl DealKeyExpansion {
    pub fn rounds_for_key(key_len: usize) -> usize {
        if key_len == 16 {
            6
        } else {
            8
        }
    }
}

impl KeyExpansion for DealKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        if !matches!(key.len(), 16 | 24 | 32) {
            return Err(CipherError::InvalidLength {
                context: "DEAL key",
                got: key.len(),
            });
        }

        let rounds = Self::rounds_for_key(key.len());
        let mut des = DES::standard();
        des.set_key(&EXPANSION_KEY)?;

        let mut round_keys = Vec::with_capacity(rounds);
        let mut prev = vec![0u8; 8];
        for i in 0..rounds {
            // 192-битный ключ в последнем раунде доматывает хвостовую треть
            let wrap = match key.len() {
                24 if i < rounds - 1 => 16,
                len => len,
            };
            for (j, byte) in prev.iter_mut().enumerate() {
                *byte ^= key[(i * 8 + j) % wrap];
            }
            prev = des.encrypt(&prev)?;
            round_keys.push(prev.clone());
        }

        Ok(round_keys)
    }
}
