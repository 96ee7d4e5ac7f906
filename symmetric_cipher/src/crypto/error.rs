use thiserror::Error;

/// Ошибки всех криптографических операций библиотеки.
#[derive(Debug, Error)]
pub enum CipherError {
    #[error("invalid {context} length: {got} bytes")]
    InvalidLength { context: &'static str, got: usize },

    #[error("key has not been set")]
    MissingKey,

    #[error("invalid {0} padding")]
    InvalidPadding(&'static str),

    #[error("modulus {0:#04x} is reducible over GF(2)")]
    ReducibleModulus(u8),

    #[error("zero has no multiplicative inverse")]
    NoInverse,

    #[error("input data is empty")]
    EmptyInput,

    #[error("i/o failure")]
    Io(#[from] std::io::Error),

    #[error("worker failed: {0}")]
    Worker(#[source] Box<CipherError>),
}
