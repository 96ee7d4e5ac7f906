//! Арифметика в GF(2^8) = GF(2)[x]/(x^8 + m(x)). Байт `modulus` — младшие
//! восемь коэффициентов приведённого многочлена, старший бит x^8 подразумевается.

use crate::gf::irreducible::irreducible_polynomials;
use symmetric_cipher::crypto::error::CipherError;

pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Степень многочлена; -1 для нуля.
pub fn degree(a: u16) -> i32 {
    if a == 0 {
        return -1;
    }
    15 - a.leading_zeros() as i32
}

/// Деление многочленов с остатком: (частное, остаток).
pub fn divide(dividend: u16, divisor: u16) -> (u16, u16) {
    assert!(divisor != 0, "division by zero polynomial");

    let mut quotient = 0u16;
    let mut remainder = dividend;
    let deg_divisor = degree(divisor);
    while degree(remainder) >= deg_divisor {
        let shift = (degree(remainder) - deg_divisor) as u16;
        quotient |= 1 << shift;
        remainder ^= divisor << shift;
    }
    (quotient, remainder)
}

pub fn multiply(a: u8, b: u8, modulus: u8) -> Result<u8, CipherError> {
    if !irreducible_polynomials().contains(&modulus) {
        return Err(CipherError::ReducibleModulus(modulus));
    }
    Ok(mul(a, b, modulus))
}

/// Умножение без проверки модуля; вызывающий обязан гарантировать
/// неприводимость.
pub(crate) fn mul(mut a: u8, mut b: u8, modulus: u8) -> u8 {
    let mut result = 0u8;
    while b > 0 {
        if b & 1 != 0 {
            result ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= modulus;
        }
        b >>= 1;
    }
    result
}

/// Обратный элемент по расширенному алгоритму Евклида.
pub fn inverse(a: u8, modulus: u8) -> Result<u8, CipherError> {
    if a == 0 {
        return Err(CipherError::NoInverse);
    }

    let mut t0: u16 = 0;
    let mut t1: u16 = 1;
    let mut r0: u16 = 0x100 | u16::from(modulus);
    let mut r1: u16 = u16::from(a);

    while r1 != 0 {
        let deg_r0 = degree(r0);
        let deg_r1 = degree(r1);
        if deg_r0 < deg_r1 {
            std::mem::swap(&mut r0, &mut r1);
            std::mem::swap(&mut t0, &mut t1);
            continue;
        }
        // неполное частное: одного старшего члена достаточно для сходимости
        let shift = (deg_r0 - deg_r1) as u16;
        let t_next = t0 ^ (t1 << shift);
        let r_next = r0 ^ (r1 << shift);
        t0 = t1;
        t1 = t_next;
        r0 = r1;
        r1 = r_next;
        if r0 == 1 {
            break;
        }
    }

    if r0 != 1 {
        return Err(CipherError::ReducibleModulus(modulus));
    }
    Ok(t0 as u8)
}
