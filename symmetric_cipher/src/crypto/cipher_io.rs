use std::io::Read;
use std::path::{Path, PathBuf};

/// Дочитывает буфер до конца или до EOF; возвращает число прочитанных байт.
pub(crate) fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

pub(crate) fn default_output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}
