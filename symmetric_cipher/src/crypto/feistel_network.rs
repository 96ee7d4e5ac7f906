use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::key_expansion::KeyExpansion;
use std::sync::Arc;

/// Сбалансированная сеть Фейстеля над произвольной раундовой функцией.
pub struct FeistelNetwork {
    rounds: usize,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    round_function: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        rounds: usize,
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        round_function: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        Self {
            rounds,
            key_expansion,
            round_function,
        }
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn set_rounds(&mut self, rounds: usize) {
        self.rounds = rounds;
    }

    pub fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        let round_keys = self.key_expansion.generate_round_keys(key)?;
        if round_keys.len() < self.rounds {
            return Err(CipherError::InvalidLength {
                context: "round key schedule",
                got: round_keys.len(),
            });
        }
        Ok(round_keys)
    }

    pub fn encrypt_with_round_keys(
        &self,
        block: &[u8],
        round_keys: &[Vec<u8>],
    ) -> Result<Vec<u8>, CipherError> {
        let (mut left, mut right) = self.split_halves(block, round_keys)?;

        for round_key in round_keys.iter().take(self.rounds) {
            let f = self.round_function.transform(&right, round_key)?;
            let new_right = xor(&left, &f);
            left = std::mem::replace(&mut right, new_right);
        }

        Ok([right, left].concat())
    }

    pub fn decrypt_with_round_keys(
        &self,
        block: &[u8],
        round_keys: &[Vec<u8>],
    ) -> Result<Vec<u8>, CipherError> {
        let (mut left, mut right) = self.split_halves(block, round_keys)?;

        for round_key in round_keys.iter().take(self.rounds).rev() {
            let f = self.round_function.transform(&right, round_key)?;
            let new_right = xor(&left, &f);
            left = std::mem::replace(&mut right, new_right);
        }

        Ok([right, left].concat())
    }

    fn split_halves(
        &self,
        block: &[u8],
        round_keys: &[Vec<u8>],
    ) -> Result<(Vec<u8>, Vec<u8>), CipherError> {
        if round_keys.is_empty() {
            return Err(CipherError::MissingKey);
        }
        if round_keys.len() < self.rounds {
            return Err(CipherError::InvalidLength {
                context: "round key schedule",
                got: round_keys.len(),
            });
        }
        if block.is_empty() || block.len() % 2 != 0 {
            return Err(CipherError::InvalidLength {
                context: "feistel block",
                got: block.len(),
            });
        }
        let half = block.len() / 2;
        Ok((block[..half].to_vec(), block[half..].to_vec()))
    }
}

fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}
