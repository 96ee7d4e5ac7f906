use crate::crypto::cipher_io::{default_output_path, read_chunk};
use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricAlgorithm};
use crate::crypto::cipher_types::{CipherMode, PaddingMode};
use crate::crypto::error::CipherError;
use crate::crypto::utils::{
    apply_padding, join_blocks, random_bytes, remove_padding, split_blocks,
};
use log::debug;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Размер файлового чанка в блоках.
const CHUNK_BLOCKS: usize = 1024;
/// Минимум блоков на одного воркера при распараллеливании.
const MIN_BLOCKS_PER_WORKER: usize = 10;

/// Переносимое между вызовами состояние режима шифрования.
enum ModeState {
    Ecb,
    Cbc { prev: Vec<u8> },
    Pcbc { m_prev: Vec<u8>, c_prev: Vec<u8> },
    Cfb { prev: Vec<u8> },
    Ofb { prev: Vec<u8> },
    Ctr { counter: Vec<u8> },
    RandomDelta { iv: Vec<u8>, delta: Vec<u8> },
}

/// Движок режимов шифрования поверх блочного алгоритма.
///
/// Алгоритм после установки ключа только читается, поэтому один экземпляр
/// может обслуживать несколько контекстов. Состояние режима принадлежит
/// контексту; конкурентные вызовы на одном контексте сериализуются.
pub struct CipherContext {
    algorithm: Arc<dyn SymmetricAlgorithm + Send + Sync>,
    mode: CipherMode,
    padding: PaddingMode,
    block_size: usize,
    state: Mutex<ModeState>,
}

impl CipherContext {
    pub fn new(
        algorithm: Arc<dyn SymmetricAlgorithm + Send + Sync>,
        mode: CipherMode,
        padding: PaddingMode,
        iv: Option<&[u8]>,
    ) -> Result<Self, CipherError> {
        let block_size = algorithm.block_size();

        let required_iv = |iv: Option<&[u8]>| -> Result<Vec<u8>, CipherError> {
            let iv = iv.ok_or(CipherError::InvalidLength {
                context: "initialization vector",
                got: 0,
            })?;
            if iv.len() != block_size {
                return Err(CipherError::InvalidLength {
                    context: "initialization vector",
                    got: iv.len(),
                });
            }
            Ok(iv.to_vec())
        };

        let state = match mode {
            CipherMode::ECB => ModeState::Ecb,
            CipherMode::CBC => ModeState::Cbc {
                prev: required_iv(iv)?,
            },
            CipherMode::PCBC => {
                let iv = required_iv(iv)?;
                ModeState::Pcbc {
                    m_prev: iv.clone(),
                    c_prev: iv,
                }
            }
            CipherMode::CFB => ModeState::Cfb {
                prev: required_iv(iv)?,
            },
            CipherMode::OFB => ModeState::Ofb {
                prev: required_iv(iv)?,
            },
            CipherMode::CTR => ModeState::Ctr {
                counter: match iv {
                    Some(_) => required_iv(iv)?,
                    None => vec![0; block_size],
                },
            },
            CipherMode::RandomDelta => ModeState::RandomDelta {
                iv: Vec::new(),
                delta: Vec::new(),
            },
        };

        Ok(Self {
            algorithm,
            mode,
            padding,
            block_size,
            state: Mutex::new(state),
        })
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// CFB, OFB и CTR гаммируют и не требуют набивки.
    fn is_stream_mode(&self) -> bool {
        matches!(
            self.mode,
            CipherMode::CFB | CipherMode::OFB | CipherMode::CTR
        )
    }

    pub async fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        if data.is_empty() {
            return Err(CipherError::EmptyInput);
        }
        let mut state = self.state.lock().await;
        let blocks = self.input_blocks(data, true)?;
        let processed = self.process_blocks(&mut state, blocks, true)?;
        Ok(join_blocks(&processed))
    }

    pub async fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        if data.is_empty() {
            return Err(CipherError::EmptyInput);
        }
        let mut state = self.state.lock().await;
        let blocks = self.input_blocks(data, false)?;
        let processed = self.process_blocks(&mut state, blocks, false)?;
        let joined = join_blocks(&processed);
        if self.is_stream_mode() {
            Ok(joined)
        } else {
            remove_padding(joined, self.padding)
        }
    }

    pub async fn encrypt_file(
        &self,
        input: &Path,
        output: Option<&Path>,
    ) -> Result<PathBuf, CipherError> {
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input, "encrypted"));
        let mut state = self.state.lock().await;
        tokio::task::block_in_place(|| self.stream_file(&mut state, input, &output, true))?;
        Ok(output)
    }

    pub async fn decrypt_file(
        &self,
        input: &Path,
        output: Option<&Path>,
    ) -> Result<PathBuf, CipherError> {
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input, "decrypted"));
        let mut state = self.state.lock().await;
        tokio::task::block_in_place(|| self.stream_file(&mut state, input, &output, false))?;
        Ok(output)
    }

    /// Нарезает вход на блоки. Блочные режимы при шифровании получают
    /// набивку, при расшифровании требуют кратной длины; потоковые режимы
    /// допускают неполный последний блок.
    fn input_blocks(&self, data: &[u8], encrypt: bool) -> Result<Vec<Vec<u8>>, CipherError> {
        if self.is_stream_mode() {
            Ok(data.chunks(self.block_size).map(<[u8]>::to_vec).collect())
        } else if encrypt {
            let padded = apply_padding(data.to_vec(), self.block_size, self.padding);
            split_blocks(&padded, self.block_size)
        } else {
            split_blocks(data, self.block_size)
        }
    }

    fn stream_file(
        &self,
        state: &mut ModeState,
        input: &Path,
        output: &Path,
        encrypt: bool,
    ) -> Result<(), CipherError> {
        let chunk_len = CHUNK_BLOCKS * self.block_size;
        let total = std::fs::metadata(input)?.len();
        let mut reader = BufReader::new(File::open(input)?);
        let mut writer = BufWriter::new(File::create(output)?);
        debug!(
            "{} {} bytes: {:?} -> {:?}",
            if encrypt { "encrypting" } else { "decrypting" },
            total,
            input,
            output
        );

        let mut buffer = vec![0u8; chunk_len];
        let mut consumed = 0u64;
        loop {
            let n = read_chunk(&mut reader, &mut buffer)?;
            consumed += n as u64;
            let last = n < chunk_len || consumed >= total;

            if self.is_stream_mode() {
                if n > 0 {
                    let blocks = self.input_blocks(&buffer[..n], encrypt)?;
                    let processed = self.process_blocks(state, blocks, encrypt)?;
                    writer.write_all(&join_blocks(&processed))?;
                }
            } else if encrypt {
                let blocks = if last {
                    self.input_blocks(&buffer[..n], true)?
                } else {
                    split_blocks(&buffer[..n], self.block_size)?
                };
                let processed = self.process_blocks(state, blocks, true)?;
                writer.write_all(&join_blocks(&processed))?;
            } else {
                let blocks = split_blocks(&buffer[..n], self.block_size)?;
                let processed = self.process_blocks(state, blocks, false)?;
                let joined = join_blocks(&processed);
                if last {
                    writer.write_all(&remove_padding(joined, self.padding)?)?;
                } else {
                    writer.write_all(&joined)?;
                }
            }

            if last {
                break;
            }
        }

        writer.flush()?;
        Ok(())
    }

    fn process_blocks(
        &self,
        state: &mut ModeState,
        mut blocks: Vec<Vec<u8>>,
        encrypt: bool,
    ) -> Result<Vec<Vec<u8>>, CipherError> {
        if blocks.is_empty() {
            return Ok(blocks);
        }
        let algorithm = &self.algorithm;

        match state {
            ModeState::Ecb => process_ranges(&blocks, |_, range| {
                range
                    .iter()
                    .map(|block| {
                        if encrypt {
                            algorithm.encrypt(block)
                        } else {
                            algorithm.decrypt(block)
                        }
                    })
                    .collect()
            }),

            ModeState::Cbc { prev } => {
                if encrypt {
                    let mut out = Vec::with_capacity(blocks.len());
                    for block in &blocks {
                        let mut x = block.clone();
                        xor_into(&mut x, prev);
                        let cipher_block = algorithm.encrypt(&x)?;
                        prev.clone_from(&cipher_block);
                        out.push(cipher_block);
                    }
                    Ok(out)
                } else {
                    let iv = prev.clone();
                    let out = process_ranges(&blocks, |start, range| {
                        range
                            .iter()
                            .enumerate()
                            .map(|(i, block)| {
                                let mut plain = algorithm.decrypt(block)?;
                                let feedback = if start + i == 0 {
                                    &iv
                                } else {
                                    &blocks[start + i - 1]
                                };
                                xor_into(&mut plain, feedback);
                                Ok(plain)
                            })
                            .collect()
                    })?;
                    if let Some(last) = blocks.last() {
                        prev.clone_from(last);
                    }
                    Ok(out)
                }
            }

            ModeState::Pcbc { m_prev, c_prev } => {
                let mut out = Vec::with_capacity(blocks.len());
                if encrypt {
                    for block in &blocks {
                        let mut x = block.clone();
                        xor_into(&mut x, m_prev);
                        xor_into(&mut x, c_prev);
                        let cipher_block = algorithm.encrypt(&x)?;
                        m_prev.clone_from(block);
                        c_prev.clone_from(&cipher_block);
                        out.push(cipher_block);
                    }
                } else {
                    for block in &blocks {
                        let mut plain = algorithm.decrypt(block)?;
                        xor_into(&mut plain, m_prev);
                        xor_into(&mut plain, c_prev);
                        m_prev.clone_from(&plain);
                        c_prev.clone_from(block);
                        out.push(plain);
                    }
                }
                Ok(out)
            }

            ModeState::Cfb { prev } => {
                if encrypt {
                    let mut out = Vec::with_capacity(blocks.len());
                    for block in &blocks {
                        let keystream = algorithm.encrypt(prev)?;
                        let cipher_block = xor_with(&keystream, block);
                        *prev = resized(&cipher_block, self.block_size);
                        out.push(cipher_block);
                    }
                    Ok(out)
                } else {
                    let iv = prev.clone();
                    let block_size = self.block_size;
                    let out = process_ranges(&blocks, |start, range| {
                        range
                            .iter()
                            .enumerate()
                            .map(|(i, block)| {
                                let feedback = if start + i == 0 {
                                    &iv
                                } else {
                                    &blocks[start + i - 1]
                                };
                                let keystream = algorithm.encrypt(&resized(feedback, block_size))?;
                                Ok(xor_with(&keystream, block))
                            })
                            .collect()
                    })?;
                    if let Some(last) = blocks.last() {
                        *prev = resized(last, self.block_size);
                    }
                    Ok(out)
                }
            }

            ModeState::Ofb { prev } => {
                let mut out = Vec::with_capacity(blocks.len());
                for block in &blocks {
                    let keystream = algorithm.encrypt(prev)?;
                    out.push(xor_with(&keystream, block));
                    *prev = keystream;
                }
                Ok(out)
            }

            ModeState::Ctr { counter } => {
                let base = counter.clone();
                let out = process_ranges(&blocks, |start, range| {
                    let mut ctr = base.clone();
                    add_counter(&mut ctr, start as u64);
                    range
                        .iter()
                        .map(|block| {
                            let keystream = algorithm.encrypt(&ctr)?;
                            add_counter(&mut ctr, 1);
                            Ok(xor_with(&keystream, block))
                        })
                        .collect()
                })?;
                add_counter(counter, blocks.len() as u64);
                Ok(out)
            }

            ModeState::RandomDelta { iv, delta } => {
                let mut prefix = Vec::new();
                if iv.is_empty() {
                    if encrypt {
                        *iv = random_bytes(self.block_size);
                        *delta = iv[self.block_size / 2..].to_vec();
                        prefix.push(algorithm.encrypt(iv)?);
                    } else {
                        // первый блок шифртекста несёт зашифрованный IV
                        let first = blocks.remove(0);
                        *iv = algorithm.decrypt(&first)?;
                        *delta = iv[self.block_size / 2..].to_vec();
                    }
                }

                let base = iv.clone();
                let step = delta.clone();
                let out = process_ranges(&blocks, |start, range| {
                    let mut offset = base.clone();
                    add_delta(&mut offset, &step, start);
                    range
                        .iter()
                        .map(|block| {
                            let result = if encrypt {
                                let mut x = block.clone();
                                xor_into(&mut x, &offset);
                                algorithm.encrypt(&x)?
                            } else {
                                let mut plain = algorithm.decrypt(block)?;
                                xor_into(&mut plain, &offset);
                                plain
                            };
                            add_delta(&mut offset, &step, 1);
                            Ok(result)
                        })
                        .collect()
                })?;
                add_delta(iv, delta, blocks.len());

                prefix.extend(out);
                Ok(prefix)
            }
        }
    }
}

/// Делит блоки на непрерывные диапазоны и обрабатывает их параллельно.
/// Результаты склеиваются по порядку; первая ошибка возвращается после
/// завершения всех воркеров.
fn process_ranges<F>(blocks: &[Vec<u8>], worker: F) -> Result<Vec<Vec<u8>>, CipherError>
where
    F: Fn(usize, &[Vec<u8>]) -> Result<Vec<Vec<u8>>, CipherError> + Sync,
{
    let max_workers = blocks.len().div_ceil(MIN_BLOCKS_PER_WORKER).max(1);
    let workers = rayon::current_num_threads().min(max_workers);
    if workers <= 1 {
        return worker(0, blocks);
    }

    let per_worker = blocks.len() / workers;
    let ranges: Vec<(usize, usize)> = (0..workers)
        .map(|i| {
            let start = i * per_worker;
            let end = if i == workers - 1 {
                blocks.len()
            } else {
                start + per_worker
            };
            (start, end)
        })
        .collect();

    let results: Vec<Result<Vec<Vec<u8>>, CipherError>> = ranges
        .into_par_iter()
        .map(|(start, end)| worker(start, &blocks[start..end]))
        .collect();

    let mut merged = Vec::with_capacity(blocks.len());
    for result in results {
        merged.extend(result.map_err(|e| CipherError::Worker(Box::new(e)))?);
    }
    Ok(merged)
}

fn xor_into(target: &mut [u8], other: &[u8]) {
    for (t, o) in target.iter_mut().zip(other) {
        *t ^= o;
    }
}

/// XOR блока с гаммой; длина результата равна длине блока.
fn xor_with(keystream: &[u8], block: &[u8]) -> Vec<u8> {
    block.iter().zip(keystream).map(|(b, k)| b ^ k).collect()
}

fn resized(block: &[u8], len: usize) -> Vec<u8> {
    let mut out = block.to_vec();
    out.resize(len, 0);
    out
}

/// Прибавляет значение к счётчику: big-endian, младшие 8 байт блока.
fn add_counter(counter: &mut [u8], value: u64) {
    let tail = counter.len().saturating_sub(8);
    let mut carry = value;
    for byte in counter[tail..].iter_mut().rev() {
        if carry == 0 {
            break;
        }
        let sum = u64::from(*byte) + (carry & 0xFF);
        *byte = sum as u8;
        carry = (carry >> 8) + (sum >> 8);
    }
}

/// `count` раз прибавляет дельту к младшей половине блока с переносом.
fn add_delta(counter: &mut [u8], delta: &[u8], count: usize) {
    for _ in 0..count {
        let mut carry = 0u16;
        for (byte, &d) in counter.iter_mut().zip(delta) {
            let sum = u16::from(*byte) + u16::from(d) + carry;
            *byte = sum as u8;
            carry = sum >> 8;
        }
    }
}
