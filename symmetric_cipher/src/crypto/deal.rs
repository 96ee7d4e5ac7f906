use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricAlgorithm, SymmetricCipher};
use crate::crypto::deal_key_expansion::DealKeyExpansion;
use crate::crypto::des_adapter::DesAdapter;
use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::FeistelNetwork;
use std::sync::Arc;

const BLOCK_SIZE: usize = 16;

/// DEAL: 128-битная сеть Фейстеля, раундовая функция которой — DES.
/// 6 раундов для 128-битного ключа, 8 для 192- и 256-битного.
pub struct DEAL {
    feistel_network: FeistelNetwork,
    round_keys: Vec<Vec<u8>>,
}

impl DEAL {
    pub fn new() -> Self {
        DEAL {
            feistel_network: FeistelNetwork::new(
                DealKeyExpansion::rounds_for_key(16),
                Arc::new(DealKeyExpansion),
                Arc::new(DesAdapter),
            ),
            round_keys: Vec::new(),
        }
    }

    fn check_block(block: &[u8]) -> Result<(), CipherError> {
        if block.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidLength {
                context: "DEAL block",
                got: block.len(),
            });
        }
        Ok(())
    }
}

impl Default for DEAL {
    fn default() -> Self {
        Self::new()
    }
}

impl CipherAlgorithm for DEAL {
    fn encrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        Self::check_block(block)?;
        self.feistel_network
            .encrypt_with_round_keys(block, &self.round_keys)
    }

    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        Self::check_block(block)?;
        self.feistel_network
            .decrypt_with_round_keys(block, &self.round_keys)
    }
}

impl SymmetricCipher for DEAL {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if !matches!(key.len(), 16 | 24 | 32) {
            return Err(CipherError::InvalidLength {
                context: "DEAL key",
                got: key.len(),
            });
        }
        self.feistel_network
            .set_rounds(DealKeyExpansion::rounds_for_key(key.len()));
        self.round_keys = self.feistel_network.generate_round_keys(key)?;
        Ok(())
    }
}

impl SymmetricAlgorithm for DEAL {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}
