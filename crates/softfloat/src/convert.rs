//! Conversions between the two precisions.

use crate::{double, single};

const FRAC_SHIFT: u32 = double::FRAC_BITS - single::FRAC_BITS;

/// Widen a binary32 pattern to binary64. Exact for normal values; subnormals
/// flush to a signed zero and NaN payloads are carried over.
pub fn f32_to_f64(a: u32) -> u64 {
    let sign = single::sign(a) as u64;
    let exp = single::exponent(a);
    let frac = single::fraction(a) as u64;
    if exp == 0 {
        return sign << 63;
    }
    if exp == single::EXP_MAX {
        return (sign << 63) | double::INFINITY | (frac << FRAC_SHIFT);
    }
    let exp = (exp - single::BIAS + double::BIAS) as u64;
    (sign << 63) | (exp << double::FRAC_BITS) | (frac << FRAC_SHIFT)
}

/// Narrow a binary64 pattern to binary32, truncating the low fraction bits.
/// NaNs stay NaN (quiet), out-of-range magnitudes clamp to infinity or zero.
pub fn f64_to_f32(a: u64) -> u32 {
    let sign = double::sign(a) as u32;
    let exp = double::exponent(a);
    let frac = double::fraction(a);
    if exp == 0 {
        return sign << 31;
    }
    if exp == double::EXP_MAX {
        let payload = if frac != 0 {
            single::QUIET_BIT | (frac >> FRAC_SHIFT) as u32
        } else {
            0
        };
        return (sign << 31) | single::INFINITY | payload;
    }
    let exp = exp - double::BIAS + single::BIAS;
    single::finish(sign, exp, frac >> FRAC_SHIFT)
}
