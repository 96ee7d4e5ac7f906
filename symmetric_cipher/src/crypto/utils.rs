use crate::crypto::cipher_types::PaddingMode;
use crate::crypto::error::CipherError;
use bitvec::prelude::*;
use rand::RngCore;

/// Какой бит внутри байта считается битом с индексом 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitIndexing {
    LsbFirst,
    MsbFirst,
}

/// С какого индекса начинается нумерация в таблице перестановки.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOrigin {
    Zero,
    One,
}

/// Перестановка битов по таблице: i-й бит результата берётся из позиции
/// `table[i]` входа. Длина результата — `ceil(len(table) / 8)` байт.
pub fn permute_bits(
    data: &[u8],
    table: &[u16],
    indexing: BitIndexing,
    origin: BitOrigin,
) -> Vec<u8> {
    let base = match origin {
        BitOrigin::Zero => 0,
        BitOrigin::One => 1,
    };
    let out_bits = table.len().div_ceil(8) * 8;

    match indexing {
        BitIndexing::MsbFirst => {
            let bits = data.view_bits::<Msb0>();
            let mut out = bitvec![u8, Msb0; 0; out_bits];
            for (i, &pos) in table.iter().enumerate() {
                out.set(i, bits[pos as usize - base]);
            }
            out.into_vec()
        }
        BitIndexing::LsbFirst => {
            let bits = data.view_bits::<Lsb0>();
            let mut out = bitvec![u8, Lsb0; 0; out_bits];
            for (i, &pos) in table.iter().enumerate() {
                out.set(i, bits[pos as usize - base]);
            }
            out.into_vec()
        }
    }
}

/// Циклический сдвиг младших 28 бит слова влево; старшие 4 бита остаются нулями.
pub fn rotl28(value: u32, shift: u32) -> u32 {
    ((value << shift) | (value >> (28 - shift))) & 0x0FFF_FFFF
}

pub fn apply_padding(mut data: Vec<u8>, block_size: usize, padding: PaddingMode) -> Vec<u8> {
    let pad_len = block_size - data.len() % block_size;

    match padding {
        PaddingMode::Zeros => data.resize(data.len() + pad_len, 0),
        PaddingMode::ANSI_X923 => {
            data.resize(data.len() + pad_len - 1, 0);
            data.push(pad_len as u8);
        }
        PaddingMode::PKCS7 => {
            data.resize(data.len() + pad_len, pad_len as u8);
        }
        PaddingMode::ISO10126 => {
            data.extend(random_bytes(pad_len - 1));
            data.push(pad_len as u8);
        }
    }
    data
}

pub fn remove_padding(mut data: Vec<u8>, padding: PaddingMode) -> Result<Vec<u8>, CipherError> {
    if data.is_empty() {
        return Ok(data);
    }

    match padding {
        PaddingMode::Zeros => {
            while data.last() == Some(&0) {
                data.pop();
            }
        }
        PaddingMode::ANSI_X923 => {
            let pad_len = *data.last().unwrap() as usize;
            if pad_len == 0 || pad_len > data.len() {
                return Err(CipherError::InvalidPadding("ANSI X.923"));
            }
            if data[data.len() - pad_len..data.len() - 1]
                .iter()
                .any(|&b| b != 0)
            {
                return Err(CipherError::InvalidPadding("ANSI X.923"));
            }
            data.truncate(data.len() - pad_len);
        }
        PaddingMode::PKCS7 => {
            let pad_len = *data.last().unwrap() as usize;
            if pad_len == 0 || pad_len > data.len() {
                return Err(CipherError::InvalidPadding("PKCS#7"));
            }
            if data[data.len() - pad_len..]
                .iter()
                .any(|&b| b != pad_len as u8)
            {
                return Err(CipherError::InvalidPadding("PKCS#7"));
            }
            data.truncate(data.len() - pad_len);
        }
        PaddingMode::ISO10126 => {
            // содержимое набивки случайно, проверяется только длина
            let pad_len = *data.last().unwrap() as usize;
            if pad_len == 0 || pad_len > data.len() {
                return Err(CipherError::InvalidPadding("ISO 10126"));
            }
            data.truncate(data.len() - pad_len);
        }
    }

    Ok(data)
}

pub fn split_blocks(data: &[u8], block_size: usize) -> Result<Vec<Vec<u8>>, CipherError> {
    if block_size == 0 || data.len() % block_size != 0 {
        return Err(CipherError::InvalidLength {
            context: "block sequence",
            got: data.len(),
        });
    }
    Ok(data.chunks(block_size).map(<[u8]>::to_vec).collect())
}

pub fn join_blocks(blocks: &[Vec<u8>]) -> Vec<u8> {
    let total = blocks.iter().map(Vec::len).sum::<usize>();
    let mut result = Vec::with_capacity(total);
    for block in blocks {
        result.extend_from_slice(block);
    }
    result
}

pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}
