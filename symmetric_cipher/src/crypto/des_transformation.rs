use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::utils::{permute_bits, BitIndexing, BitOrigin};
use bitvec::prelude::*;

/// Раундовая функция DES: расширение E, XOR с раундовым ключом,
/// восемь S-блоков, перестановка P.
pub struct DesTransformation;

impl EncryptionTransformation for DesTransformation {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Result<Vec<u8>, CipherError> {
        if input_block.len() != 4 {
            return Err(CipherError::InvalidLength {
                context: "DES half-block",
                got: input_block.len(),
            });
        }
        if round_key.len() != 6 {
            return Err(CipherError::InvalidLength {
                context: "DES round key",
                got: round_key.len(),
            });
        }

        let expanded = permute_bits(input_block, &E, BitIndexing::MsbFirst, BitOrigin::One);
        let mixed: Vec<u8> = expanded
            .iter()
            .zip(round_key)
            .map(|(a, b)| a ^ b)
            .collect();

        let bits = mixed.view_bits::<Msb0>();
        let mut substituted = bitvec![u8, Msb0; 0; 32];
        for (i, group) in bits.chunks(6).enumerate() {
            let row = (usize::from(group[0]) << 1) | usize::from(group[5]);
            let col = (usize::from(group[1]) << 3)
                | (usize::from(group[2]) << 2)
                | (usize::from(group[3]) << 1)
                | usize::from(group[4]);
            let value = S_BOXES[i][row][col];
            for j in 0..4 {
                substituted.set(i * 4 + j, value & (1 << (3 - j)) != 0);
            }
        }

        Ok(permute_bits(
            &substituted.into_vec(),
            &P,
            BitIndexing::MsbFirst,
            BitOrigin::One,
        ))
    }
}
