use crate::crypto::des_tables::{PC1, PC2, SHIFTS};
use crate::crypto::error::CipherError;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{permute_bits, rotl28, BitIndexing, BitOrigin};

pub struct DesKeyExpansion;

impl KeyExpansion for DesKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        if key.len() != 8 {
            return Err(CipherError::InvalidLength {
                context: "DES key",
                got: key.len(),
            });
        }

        // PC-1 отбрасывает биты чётности и даёт 56 бит
        let permuted = permute_bits(key, &PC1, BitIndexing::MsbFirst, BitOrigin::One);
        let cd = permuted
            .iter()
            .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte));
        let mut c = (cd >> 28) as u32;
        let mut d = (cd & 0x0FFF_FFFF) as u32;

        let mut round_keys = Vec::with_capacity(SHIFTS.len());
        for &shift in &SHIFTS {
            c = rotl28(c, shift);
            d = rotl28(d, shift);

            let joined = (u64::from(c) << 28) | u64::from(d);
            let joined_bytes: Vec<u8> = (0..7).rev().map(|i| (joined >> (i * 8)) as u8).collect();
            round_keys.push(permute_bits(
                &joined_bytes,
                &PC2,
                BitIndexing::MsbFirst,
                BitOrigin::One,
            ));
        }

        Ok(round_keys)
    }
}
