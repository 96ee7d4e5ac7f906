use crate::crypto::error::CipherError;

pub trait KeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError>;
}
