use crate::gf::arithmetic::mul;
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;

/// Число раундов по размерам блока и ключа (в байтах).
pub fn rounds_count(block_size: usize, key_size: usize) -> usize {
    match (block_size, key_size) {
        (16, 16) => 10,
        (16, 24) | (24, 16) | (24, 24) => 12,
        _ => 14,
    }
}

/// Развёртка ключа: Nb * (Nr + 1) четырёхбайтовых слов, сгруппированных
/// в раундовые подключи по размеру блока.
pub fn expand_key(
    key: &[u8],
    s_box: &[u8; 256],
    modulus: u8,
    block_size: usize,
) -> Result<Vec<Vec<u8>>, CipherError> {
    if !matches!(key.len(), 16 | 24 | 32) {
        return Err(CipherError::InvalidLength {
            context: "Rijndael key",
            got: key.len(),
        });
    }

    let nr = rounds_count(block_size, key.len());
    let nb = block_size / 4;
    let nk = key.len() / 4;
    let words_count = nb * (nr + 1);

    let sub_word = |word: &mut [u8; 4]| {
        for byte in word.iter_mut() {
            *byte = s_box[*byte as usize];
        }
    };

    let mut words: Vec<[u8; 4]> = key
        .chunks(4)
        .map(|chunk| [chunk[0], chunk[1], chunk[2], chunk[3]])
        .collect();
    words.reserve(words_count - nk);

    let mut rcon = 1u8;
    for i in nk..words_count {
        let mut temp = words[i - 1];
        if i % nk == 0 {
            temp.rotate_left(1);
            sub_word(&mut temp);
            temp[0] ^= rcon;
            rcon = mul(rcon, 0x02, modulus);
        } else if nk > 6 && i % nk == 4 {
            sub_word(&mut temp);
        }
        for (t, prev) in temp.iter_mut().zip(&words[i - nk]) {
            *t ^= prev;
        }
        words.push(temp);
    }

    let round_keys = words
        .chunks(nb)
        .map(|round| round.iter().flatten().copied().collect())
        .collect();
    Ok(round_keys)
}

/// Развёртка ключа Rijndael как подключаемое расписание.
pub struct RijndaelKeyExpansion {
    s_box: [u8; 256],
    modulus: u8,
    block_size: usize,
}

impl RijndaelKeyExpansion {
    pub fn new(s_box: [u8; 256], modulus: u8, block_size: usize) -> Self {
        Self {
            s_box,
            modulus,
            block_size,
        }
    }
}

impl KeyExpansion for RijndaelKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        expand_key(key, &self.s_box, self.modulus, self.block_size)
    }
}
