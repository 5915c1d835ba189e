//! Single-precision (binary32) routines over raw `u32` bit patterns.
//!
//! Rounding is truncating throughout: bits shifted out while aligning or
//! normalizing are dropped. Subnormal operands are not renormalized.

use crate::Comparison;
use crate::wide;

pub const SIGN_MASK: u32 = 0x8000_0000;
pub const ABS_MASK: u32 = 0x7FFF_FFFF;
pub const FRAC_BITS: u32 = 23;
pub const FRAC_MASK: u32 = (1 << FRAC_BITS) - 1;
pub const IMPLICIT_BIT: u32 = 1 << FRAC_BITS;
pub const QUIET_BIT: u32 = 1 << (FRAC_BITS - 1);
pub const EXP_MAX: i32 = 0xFF;
pub const BIAS: i32 = 127;
pub const INFINITY: u32 = 0x7F80_0000;

/// Largest exponent gap for which the smaller addend still contributes.
const ALIGN_LIMIT: i32 = 24;

#[inline]
pub const fn sign(a: u32) -> u32 {
    a >> 31
}

#[inline]
pub const fn exponent(a: u32) -> i32 {
    ((a >> FRAC_BITS) & 0xFF) as i32
}

#[inline]
pub const fn fraction(a: u32) -> u32 {
    a & FRAC_MASK
}

#[inline]
pub const fn is_zero(a: u32) -> bool {
    a & ABS_MASK == 0
}

#[inline]
pub const fn is_nan(a: u32) -> bool {
    exponent(a) == EXP_MAX && fraction(a) != 0
}

pub const fn is_unordered(a: u32, b: u32) -> bool {
    is_nan(a) || is_nan(b)
}

#[inline]
const fn zero(sign: u32) -> u32 {
    sign << 31
}

#[inline]
const fn infinity(sign: u32) -> u32 {
    (sign << 31) | INFINITY
}

/// Pack a normalized mantissa, clamping exponent overflow to infinity and
/// underflow to zero.
#[inline]
pub(crate) const fn finish(sign: u32, exp: i32, mantissa: u64) -> u32 {
    if exp >= EXP_MAX {
        infinity(sign)
    } else if exp <= 0 {
        zero(sign)
    } else {
        (sign << 31) | ((exp as u32) << FRAC_BITS) | (mantissa as u32 & FRAC_MASK)
    }
}

/// Shift `mantissa` until its leading bit sits on the implicit-bit position.
#[inline]
fn normalize(mut mantissa: u64, mut exp: i32) -> (u64, i32) {
    while mantissa >= (IMPLICIT_BIT as u64) << 1 {
        mantissa >>= 1;
        exp += 1;
    }
    while mantissa < IMPLICIT_BIT as u64 && exp > 0 {
        mantissa <<= 1;
        exp -= 1;
    }
    (mantissa, exp)
}

/// Signed integer key ordering bit patterns numerically: positive patterns
/// keep their value, negative ones map to their negated magnitude.
#[inline]
const fn order_key(a: u32) -> i32 {
    let key = a as i32;
    if key < 0 { i32::MIN.wrapping_sub(key) } else { key }
}

pub const fn compare(a: u32, b: u32) -> Comparison {
    if is_unordered(a, b) {
        return Comparison::Unordered;
    }
    if is_zero(a) && is_zero(b) {
        return Comparison::Equal;
    }
    let ka = order_key(a);
    let kb = order_key(b);
    Comparison::from_order(ka < kb, ka > kb)
}

pub fn add(a: u32, b: u32) -> u32 {
    if is_zero(b) {
        return a;
    }
    if is_zero(a) {
        return b;
    }
    let (sa, sb) = (sign(a), sign(b));
    let (mut ea, eb) = (exponent(a), exponent(b));
    if ea == 0 {
        return b;
    }
    if eb == 0 {
        return a;
    }
    let mut ma = fraction(a) | IMPLICIT_BIT;
    let mut mb = fraction(b) | IMPLICIT_BIT;

    let diff = ea - eb;
    if diff > 0 {
        if diff > ALIGN_LIMIT {
            return a;
        }
        mb >>= diff as u32;
    } else if diff < 0 {
        if -diff > ALIGN_LIMIT {
            return b;
        }
        ma >>= (-diff) as u32;
        ea = eb;
    }

    let (sum, sr) = if sa == sb {
        (ma as u64 + mb as u64, sa)
    } else if ma >= mb {
        ((ma - mb) as u64, sa)
    } else {
        ((mb - ma) as u64, sb)
    };
    if sum == 0 {
        return 0;
    }
    let (mr, er) = normalize(sum, ea);
    finish(sr, er, mr)
}

pub fn sub(a: u32, b: u32) -> u32 {
    add(a, neg(b))
}

/// Any operand with the maximum exponent, NaN included, yields a signed
/// infinity.
pub fn mul(a: u32, b: u32) -> u32 {
    let sr = sign(a) ^ sign(b);
    if is_zero(a) || is_zero(b) {
        return zero(sr);
    }
    let (ea, eb) = (exponent(a), exponent(b));
    if ea == EXP_MAX || eb == EXP_MAX {
        return infinity(sr);
    }
    let ma = (fraction(a) | IMPLICIT_BIT) as u64;
    let mb = (fraction(b) | IMPLICIT_BIT) as u64;

    let mut mr = (ma * mb) >> FRAC_BITS;
    let mut er = ea + eb - BIAS;
    if mr >= (IMPLICIT_BIT as u64) << 1 {
        mr >>= 1;
        er += 1;
    }
    finish(sr, er, mr)
}

pub fn div(a: u32, b: u32) -> u32 {
    let sr = sign(a) ^ sign(b);
    if is_zero(a) {
        return zero(sr);
    }
    if is_zero(b) {
        return infinity(sr);
    }
    let ma = (fraction(a) | IMPLICIT_BIT) as u64;
    let mb = (fraction(b) | IMPLICIT_BIT) as u64;

    // Widening by the full mantissa width leaves the quotient in (2^23, 2^25),
    // one binade above the implicit bit, hence `BIAS - 1`.
    let quotient = wide::div_u64(ma << (FRAC_BITS + 1), mb);
    let (mr, er) = normalize(quotient, exponent(a) - exponent(b) + BIAS - 1);
    finish(sr, er, mr)
}

#[inline]
pub const fn neg(a: u32) -> u32 {
    a ^ SIGN_MASK
}

/// Integer part of the magnitude of `a`. Callers bound the exponent so the
/// result fits the target width.
#[inline]
fn integer_magnitude(a: u32) -> u64 {
    let mantissa = (fraction(a) | IMPLICIT_BIT) as u64;
    let shift = exponent(a) - BIAS - FRAC_BITS as i32;
    if shift >= 0 {
        mantissa << shift as u32
    } else {
        mantissa >> (-shift) as u32
    }
}

pub fn to_i32(a: u32) -> i32 {
    let e = exponent(a);
    if e < BIAS {
        return 0;
    }
    if e >= BIAS + 31 {
        return if sign(a) == 1 { i32::MIN } else { i32::MAX };
    }
    let magnitude = integer_magnitude(a) as i32;
    if sign(a) == 1 { magnitude.wrapping_neg() } else { magnitude }
}

pub fn to_u32(a: u32) -> u32 {
    if sign(a) == 1 {
        return 0;
    }
    let e = exponent(a);
    if e < BIAS {
        return 0;
    }
    if e >= BIAS + 32 {
        return u32::MAX;
    }
    integer_magnitude(a) as u32
}

pub fn to_i64(a: u32) -> i64 {
    let e = exponent(a);
    if e < BIAS {
        return 0;
    }
    if e >= BIAS + 63 {
        return if sign(a) == 1 { i64::MIN } else { i64::MAX };
    }
    let magnitude = integer_magnitude(a) as i64;
    if sign(a) == 1 { magnitude.wrapping_neg() } else { magnitude }
}

pub fn to_u64(a: u32) -> u64 {
    if sign(a) == 1 {
        return 0;
    }
    let e = exponent(a);
    if e < BIAS {
        return 0;
    }
    if e >= BIAS + 64 {
        return u64::MAX;
    }
    integer_magnitude(a)
}

/// Pack a non-zero integer magnitude, truncating bits below the fraction.
fn from_magnitude(sign: u32, magnitude: u64) -> u32 {
    if magnitude == 0 {
        return 0;
    }
    let lz = magnitude.leading_zeros();
    let normalized = magnitude << lz;
    let exp = BIAS + 63 - lz as i32;
    (sign << 31) | ((exp as u32) << FRAC_BITS) | ((normalized >> (63 - FRAC_BITS)) as u32 & FRAC_MASK)
}

pub fn from_i32(v: i32) -> u32 {
    from_magnitude((v < 0) as u32, v.unsigned_abs() as u64)
}

pub fn from_u32(v: u32) -> u32 {
    from_magnitude(0, v as u64)
}

pub fn from_i64(v: i64) -> u32 {
    from_magnitude((v < 0) as u32, v.unsigned_abs())
}

pub fn from_u64(v: u64) -> u32 {
    from_magnitude(0, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_key_is_monotonic_across_zero() {
        let neg_two = 0xC000_0000;
        let neg_one = 0xBF80_0000;
        let one = 0x3F80_0000;
        assert!(order_key(neg_two) < order_key(neg_one));
        assert!(order_key(neg_one) < order_key(0));
        assert!(order_key(0) < order_key(one));
        assert_eq!(order_key(SIGN_MASK), 0);
    }

    #[test]
    fn normalize_moves_carry_back_into_place() {
        assert_eq!(normalize(0x0180_0000, 100), (0x00C0_0000, 101));
        assert_eq!(normalize(0x0020_0000, 100), (0x0080_0000, 98));
        // underflow stops at exponent zero
        assert_eq!(normalize(0x0020_0000, 1), (0x0040_0000, 0));
    }
}
