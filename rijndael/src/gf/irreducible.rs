use crate::gf::arithmetic::divide;
use std::sync::OnceLock;

/// Неприводим ли x^8 + m(x) над GF(2). Достаточно перебрать нечётные
/// делители степени не выше четырёх.
pub fn is_irreducible(modulus: u8) -> bool {
    if modulus & 1 == 0 {
        return false;
    }
    let poly = 0x100 | u16::from(modulus);
    let mut divisor = 3u16;
    while divisor < 0x20 {
        if divide(poly, divisor).1 == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Все байты m, для которых x^8 + m(x) неприводим. Их ровно тридцать.
pub fn find_irreducible_polynomials() -> Vec<u8> {
    let mut result = Vec::with_capacity(30);
    let mut m = 1u8;
    loop {
        if is_irreducible(m) {
            result.push(m);
        }
        m = match m.checked_add(2) {
            Some(next) => next,
            None => break,
        };
    }
    result
}

pub(crate) fn irreducible_polynomials() -> &'static [u8] {
    static POLYNOMIALS: OnceLock<Vec<u8>> = OnceLock::new();
    POLYNOMIALS.get_or_init(find_irreducible_polynomials)
}
