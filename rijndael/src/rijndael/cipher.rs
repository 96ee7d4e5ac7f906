use crate::gf::arithmetic::mul;
use crate::gf::irreducible::is_irreducible;
use crate::rijndael::key_schedule::expand_key;
use crate::rijndael::sbox::{generate_inv_s_box, generate_s_box};
use symmetric_cipher::crypto::cipher_traits::{
    CipherAlgorithm, SymmetricAlgorithm, SymmetricCipher,
};
use symmetric_cipher::crypto::error::CipherError;

/// Rijndael с настраиваемым размером блока, размером ключа и приведённым
/// многочленом. Состояние — матрица 4 x Nb, упакованная по столбцам.
pub struct Rijndael {
    block_size: usize,
    key_size: usize,
    modulus: u8,
    s_box: [u8; 256],
    inv_s_box: [u8; 256],
    round_keys: Vec<Vec<u8>>,
}

impl Rijndael {
    pub fn new(block_size: usize, key_size: usize, modulus: u8) -> Result<Self, CipherError> {
        if !matches!(block_size, 16 | 24 | 32) {
            return Err(CipherError::InvalidLength {
                context: "Rijndael block size",
                got: block_size,
            });
        }
        if !matches!(key_size, 16 | 24 | 32) {
            return Err(CipherError::InvalidLength {
                context: "Rijndael key size",
                got: key_size,
            });
        }
        if !is_irreducible(modulus) {
            return Err(CipherError::ReducibleModulus(modulus));
        }

        Ok(Self {
            block_size,
            key_size,
            modulus,
            s_box: generate_s_box(modulus)?,
            inv_s_box: generate_inv_s_box(modulus)?,
            round_keys: Vec::new(),
        })
    }

    pub fn modulus(&self) -> u8 {
        self.modulus
    }

    pub fn s_box(&self) -> &[u8; 256] {
        &self.s_box
    }

    pub fn inv_s_box(&self) -> &[u8; 256] {
        &self.inv_s_box
    }

    fn check_block(&self, block: &[u8]) -> Result<(), CipherError> {
        if self.round_keys.is_empty() {
            return Err(CipherError::MissingKey);
        }
        if block.len() != self.block_size {
            return Err(CipherError::InvalidLength {
                context: "Rijndael block",
                got: block.len(),
            });
        }
        Ok(())
    }
}

impl CipherAlgorithm for Rijndael {
    fn encrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        let rounds = self.round_keys.len() - 1;
        let mut state = block.to_vec();

        add_round_key(&mut state, &self.round_keys[0]);
        for round in 1..rounds {
            sub_bytes(&mut state, &self.s_box);
            shift_rows(&mut state);
            mix_columns(&mut state, self.modulus);
            add_round_key(&mut state, &self.round_keys[round]);
        }
        sub_bytes(&mut state, &self.s_box);
        shift_rows(&mut state);
        add_round_key(&mut state, &self.round_keys[rounds]);

        Ok(state)
    }

    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        let rounds = self.round_keys.len() - 1;
        let mut state = block.to_vec();

        add_round_key(&mut state, &self.round_keys[rounds]);
        for round in (1..rounds).rev() {
            inv_shift_rows(&mut state);
            sub_bytes(&mut state, &self.inv_s_box);
            add_round_key(&mut state, &self.round_keys[round]);
            inv_mix_columns(&mut state, self.modulus);
        }
        inv_shift_rows(&mut state);
        sub_bytes(&mut state, &self.inv_s_box);
        add_round_key(&mut state, &self.round_keys[0]);

        Ok(state)
    }
}

impl SymmetricCipher for Rijndael {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() != self.key_size {
            return Err(CipherError::InvalidLength {
                context: "Rijndael key",
                got: key.len(),
            });
        }
        self.round_keys = expand_key(key, &self.s_box, self.modulus, self.block_size)?;
        Ok(())
    }
}

impl SymmetricAlgorithm for Rijndael {
    fn block_size(&self) -> usize {
        self.block_size
    }
}

fn add_round_key(state: &mut [u8], round_key: &[u8]) {
    for (s, k) in state.iter_mut().zip(round_key) {
        *s ^= k;
    }
}

fn sub_bytes(state: &mut [u8], s_box: &[u8; 256]) {
    for byte in state {
        *byte = s_box[*byte as usize];
    }
}

/// Смещения строк: (1, 2, 3) для Nb из {4, 6}, (1, 3, 4) для Nb = 8 —
/// как в исходной статье Rijndael.
fn row_shift(nb: usize, row: usize) -> usize {
    match row {
        1 => 1,
        2 => {
            if nb == 8 {
                3
            } else {
                2
            }
        }
        _ => {
            if nb == 8 {
                4
            } else {
                3
            }
        }
    }
}

fn shift_rows(state: &mut [u8]) {
    let nb = state.len() / 4;
    let mut row_buf = [0u8; 8];
    for row in 1..4 {
        let shift = row_shift(nb, row);
        for col in 0..nb {
            row_buf[col] = state[col * 4 + row];
        }
        for col in 0..nb {
            state[col * 4 + row] = row_buf[(col + shift) % nb];
        }
    }
}

fn inv_shift_rows(state: &mut [u8]) {
    let nb = state.len() / 4;
    let mut row_buf = [0u8; 8];
    for row in 1..4 {
        let shift = row_shift(nb, row);
        for col in 0..nb {
            row_buf[col] = state[col * 4 + row];
        }
        for col in 0..nb {
            state[col * 4 + row] = row_buf[(col + nb - shift) % nb];
        }
    }
}

fn mix_columns(state: &mut [u8], modulus: u8) {
    for col in state.chunks_mut(4) {
        let a = [col[0], col[1], col[2], col[3]];
        col[0] = mul(a[0], 0x02, modulus) ^ mul(a[1], 0x03, modulus) ^ a[2] ^ a[3];
        col[1] = a[0] ^ mul(a[1], 0x02, modulus) ^ mul(a[2], 0x03, modulus) ^ a[3];
        col[2] = a[0] ^ a[1] ^ mul(a[2], 0x02, modulus) ^ mul(a[3], 0x03, modulus);
        col[3] = mul(a[0], 0x03, modulus) ^ a[1] ^ a[2] ^ mul(a[3], 0x02, modulus);
    }
}

fn inv_mix_columns(state: &mut [u8], modulus: u8) {
    for col in state.chunks_mut(4) {
        let a = [col[0], col[1], col[2], col[3]];
        col[0] = mul(a[0], 0x0E, modulus)
            ^ mul(a[1], 0x0B, modulus)
            ^ mul(a[2], 0x0D, modulus)
            ^ mul(a[3], 0x09, modulus);
        col[1] = mul(a[0], 0x09, modulus)
            ^ mul(a[1], 0x0E, modulus)
            ^ mul(a[2], 0x0B, modulus)
            ^ mul(a[3], 0x0D, modulus);
        col[2] = mul(a[0], 0x0D, modulus)
            ^ mul(a[1], 0x09, modulus)
            ^ mul(a[2], 0x0E, modulus)
            ^ mul(a[3], 0x0B, modulus);
        col[3] = mul(a[0], 0x0B, modulus)
            ^ mul(a[1], 0x0D, modulus)
            ^ mul(a[2], 0x09, modulus)
            ^ mul(a[3], 0x0E, modulus);
    }
}
