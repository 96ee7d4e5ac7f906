use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricAlgorithm, SymmetricCipher};
use crate::crypto::des_key_expansion::DesKeyExpansion;
use crate::crypto::des_tables::{IP, IP_INV};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{permute_bits, BitIndexing, BitOrigin};
use std::sync::Arc;

const BLOCK_SIZE: usize = 8;
const ROUNDS: usize = 16;

/// DES: сеть Фейстеля из 16 раундов, обёрнутая в IP / IP⁻¹.
pub struct DES {
    feistel_network: FeistelNetwork,
    round_keys: Vec<Vec<u8>>,
}

impl DES {
    pub fn new(
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        DES {
            feistel_network: FeistelNetwork::new(ROUNDS, key_expansion, transformation),
            round_keys: Vec::new(),
        }
    }

    /// DES со стандартным расписанием ключей и раундовой функцией.
    pub fn standard() -> Self {
        Self::new(Arc::new(DesKeyExpansion), Arc::new(DesTransformation))
    }

    fn check_block(block: &[u8]) -> Result<(), CipherError> {
        if block.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidLength {
                context: "DES block",
                got: block.len(),
            });
        }
        Ok(())
    }
}

impl CipherAlgorithm for DES {
    fn encrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        Self::check_block(block)?;
        let permuted = permute_bits(block, &IP, BitIndexing::MsbFirst, BitOrigin::One);
        let result = self
            .feistel_network
            .encrypt_with_round_keys(&permuted, &self.round_keys)?;
        Ok(permute_bits(
            &result,
            &IP_INV,
            BitIndexing::MsbFirst,
            BitOrigin::One,
        ))
    }

    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        Self::check_block(block)?;
        let permuted = permute_bits(block, &IP, BitIndexing::MsbFirst, BitOrigin::One);
        let result = self
            .feistel_network
            .decrypt_with_round_keys(&permuted, &self.round_keys)?;
        Ok(permute_bits(
            &result,
            &IP_INV,
            BitIndexing::MsbFirst,
            BitOrigin::One,
        ))
    }
}

impl SymmetricCipher for DES {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        self.round_keys = self.feistel_network.generate_round_keys(key)?;
        Ok(())
    }
}

impl SymmetricAlgorithm for DES {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}
