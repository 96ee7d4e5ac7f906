pub mod crypto;

pub use crypto::cipher_context::CipherContext;
pub use crypto::cipher_types::{CipherMode, PaddingMode};
pub use crypto::error::CipherError;
