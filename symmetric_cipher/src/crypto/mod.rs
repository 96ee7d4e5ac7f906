pub mod cipher_context;
mod cipher_io;
pub mod cipher_traits;
pub mod cipher_types;
pub mod deal;
pub mod deal_key_expansion;
pub mod des;
pub mod des_adapter;
pub mod des_key_expansion;
pub mod des_tables;
pub mod des_transformation;
pub mod encryption_transformation;
pub mod error;
pub mod feistel_network;
pub mod idea;
pub mod key_expansion;
pub mod triple_des;
pub mod utils;

use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::key_expansion::KeyExpansion;
use std::sync::Arc;

impl KeyExpansion for Arc<dyn KeyExpansion + Send + Sync> {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        (**self).generate_round_keys(key)
    }
}

impl EncryptionTransformation for Arc<dyn EncryptionTransformation + Send + Sync> {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Result<Vec<u8>, CipherError> {
        (**self).transform(input_block, round_key)
    }
}
