//! Double-precision (binary64) routines over raw `u64` bit patterns.
//!
//! Same truncating model as the single-precision track. Unlike it, addition
//! returns an infinite or NaN operand unchanged and division maps such
//! operands to a signed infinity before touching the mantissas.

use crate::Comparison;
use crate::wide;

pub const SIGN_MASK: u64 = 1 << 63;
pub const ABS_MASK: u64 = !SIGN_MASK;
pub const FRAC_BITS: u32 = 52;
pub const FRAC_MASK: u64 = (1 << FRAC_BITS) - 1;
pub const IMPLICIT_BIT: u64 = 1 << FRAC_BITS;
pub const QUIET_BIT: u64 = 1 << (FRAC_BITS - 1);
pub const EXP_MAX: i32 = 0x7FF;
pub const BIAS: i32 = 1023;
pub const INFINITY: u64 = 0x7FF0_0000_0000_0000;

const ALIGN_LIMIT: i32 = 60;

#[inline]
pub const fn sign(a: u64) -> u64 {
    a >> 63
}

#[inline]
pub const fn exponent(a: u64) -> i32 {
    ((a >> FRAC_BITS) & 0x7FF) as i32
}

#[inline]
pub const fn fraction(a: u64) -> u64 {
    a & FRAC_MASK
}

#[inline]
pub const fn is_zero(a: u64) -> bool {
    a & ABS_MASK == 0
}

#[inline]
pub const fn is_nan(a: u64) -> bool {
    exponent(a) == EXP_MAX && fraction(a) != 0
}

pub const fn is_unordered(a: u64, b: u64) -> bool {
    is_nan(a) || is_nan(b)
}

#[inline]
const fn zero(sign: u64) -> u64 {
    sign << 63
}

#[inline]
const fn infinity(sign: u64) -> u64 {
    (sign << 63) | INFINITY
}

#[inline]
pub(crate) const fn finish(sign: u64, exp: i32, mantissa: u64) -> u64 {
    if exp >= EXP_MAX {
        infinity(sign)
    } else if exp <= 0 {
        zero(sign)
    } else {
        (sign << 63) | ((exp as u64) << FRAC_BITS) | (mantissa & FRAC_MASK)
    }
}

#[inline]
fn normalize(mut mantissa: u64, mut exp: i32) -> (u64, i32) {
    while mantissa >= IMPLICIT_BIT << 1 {
        mantissa >>= 1;
        exp += 1;
    }
    while mantissa < IMPLICIT_BIT && exp > 0 {
        mantissa <<= 1;
        exp -= 1;
    }
    (mantissa, exp)
}

/// Signs decide first; equal signs compare magnitudes, reversed when negative.
pub const fn compare(a: u64, b: u64) -> Comparison {
    if is_unordered(a, b) {
        return Comparison::Unordered;
    }
    if is_zero(a) && is_zero(b) {
        return Comparison::Equal;
    }
    let (sa, sb) = (sign(a), sign(b));
    if sa != sb {
        return if sa == 1 { Comparison::Less } else { Comparison::Greater };
    }
    let ma = a & ABS_MASK;
    let mb = b & ABS_MASK;
    if sa == 0 {
        Comparison::from_order(ma < mb, ma > mb)
    } else {
        Comparison::from_order(ma > mb, ma < mb)
    }
}

pub fn add(a: u64, b: u64) -> u64 {
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
    if ea == EXP_MAX {
        return a;
    }
    if eb == EXP_MAX {
        return b;
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
        (ma + mb, sa)
    } else if ma >= mb {
        (ma - mb, sa)
    } else {
        (mb - ma, sb)
    };
    if sum == 0 {
        return 0;
    }
    let (mr, er) = normalize(sum, ea);
    finish(sr, er, mr)
}

pub fn sub(a: u64, b: u64) -> u64 {
    add(a, neg(b))
}

pub fn mul(a: u64, b: u64) -> u64 {
    let sr = sign(a) ^ sign(b);
    if is_zero(a) || is_zero(b) {
        return zero(sr);
    }
    let (ea, eb) = (exponent(a), exponent(b));
    if ea == EXP_MAX || eb == EXP_MAX {
        return infinity(sr);
    }
    let ma = fraction(a) | IMPLICIT_BIT;
    let mb = fraction(b) | IMPLICIT_BIT;

    // 106-bit product; keep the bits from position 52 upward.
    let (hi, lo) = wide::mul_u64(ma, mb);
    let mut mr = (hi << (64 - FRAC_BITS)) | (lo >> FRAC_BITS);
    let mut er = ea + eb - BIAS;
    if mr >= IMPLICIT_BIT << 1 {
        mr >>= 1;
        er += 1;
    }
    finish(sr, er, mr)
}

pub fn div(a: u64, b: u64) -> u64 {
    let sr = sign(a) ^ sign(b);
    if is_zero(a) {
        return zero(sr);
    }
    if is_zero(b) {
        return infinity(sr);
    }
    let (ea, eb) = (exponent(a), exponent(b));
    if ea == EXP_MAX || eb == EXP_MAX {
        return infinity(sr);
    }
    let ma = fraction(a) | IMPLICIT_BIT;
    let mb = fraction(b) | IMPLICIT_BIT;

    // Dividend widened by 53 bits to 128: ma << 53 split into hi:lo.
    let num_hi = ma >> (64 - (FRAC_BITS + 1));
    let num_lo = ma << (FRAC_BITS + 1);
    let quotient = wide::div_u128_by_u64(num_hi, num_lo, mb);
    let (mr, er) = normalize(quotient, ea - eb + BIAS - 1);
    finish(sr, er, mr)
}

#[inline]
pub const fn neg(a: u64) -> u64 {
    a ^ SIGN_MASK
}

#[inline]
fn integer_magnitude(a: u64) -> u64 {
    let mantissa = fraction(a) | IMPLICIT_BIT;
    let shift = exponent(a) - BIAS - FRAC_BITS as i32;
    if shift >= 0 {
        mantissa << shift as u32
    } else {
        mantissa >> (-shift) as u32
    }
}

pub fn to_i32(a: u64) -> i32 {
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

pub fn to_u32(a: u64) -> u32 {
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

pub fn to_i64(a: u64) -> i64 {
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

pub fn to_u64(a: u64) -> u64 {
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

fn from_magnitude(sign: u64, magnitude: u64) -> u64 {
    if magnitude == 0 {
        return 0;
    }
    let lz = magnitude.leading_zeros();
    let normalized = magnitude << lz;
    let exp = (BIAS + 63 - lz as i32) as u64;
    (sign << 63) | (exp << FRAC_BITS) | ((normalized >> (63 - FRAC_BITS)) & FRAC_MASK)
}

pub fn from_i32(v: i32) -> u64 {
    from_magnitude((v < 0) as u64, v.unsigned_abs() as u64)
}

pub fn from_u32(v: u32) -> u64 {
    from_magnitude(0, v as u64)
}

pub fn from_i64(v: i64) -> u64 {
    from_magnitude((v < 0) as u64, v.unsigned_abs())
}

pub fn from_u64(v: u64) -> u64 {
    from_magnitude(0, v)
}
