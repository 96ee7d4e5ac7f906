pub mod gf;
pub mod rijndael;

pub use rijndael::cipher::Rijndael;
