use crate::gf::arithmetic::inverse;
use symmetric_cipher::crypto::error::CipherError;

/// Прямой S-блок: обращение в поле и аффинное преобразование.
/// Нуль по соглашению переходит сам в себя до аффинной части.
pub fn generate_s_box(modulus: u8) -> Result<[u8; 256], CipherError> {
    let mut s_box = [0u8; 256];
    for byte in 0..=255u8 {
        let inv = if byte == 0 { 0 } else { inverse(byte, modulus)? };
        s_box[byte as usize] = inv
            ^ inv.rotate_left(1)
            ^ inv.rotate_left(2)
            ^ inv.rotate_left(3)
            ^ inv.rotate_left(4)
            ^ 0x63;
    }
    Ok(s_box)
}

/// Обратный S-блок: обратное аффинное преобразование, затем обращение.
pub fn generate_inv_s_box(modulus: u8) -> Result<[u8; 256], CipherError> {
    let mut inv_s_box = [0u8; 256];
    for byte in 0..=255u8 {
        let affine = byte.rotate_left(1) ^ byte.rotate_left(3) ^ byte.rotate_left(6) ^ 0x05;
        inv_s_box[byte as usize] = if affine == 0 {
            0
        } else {
            inverse(affine, modulus)?
        };
    }
    Ok(inv_s_box)
}
