//! Double-width integer helpers for targets without a native 128-bit
//! multiply or a hardware divider.

const LOW_32: u64 = 0xFFFF_FFFF;

/// Full 64×64 → 128-bit product as `(hi, lo)`, built from four 32×32
/// partial products.
pub fn mul_u64(a: u64, b: u64) -> (u64, u64) {
    let a_lo = a & LOW_32;
    let a_hi = a >> 32;
    let b_lo = b & LOW_32;
    let b_hi = b >> 32;

    let p0 = a_lo * b_lo;
    let p1 = a_lo * b_hi;
    let p2 = a_hi * b_lo;
    let p3 = a_hi * b_hi;

    // at most 3 * (2^32 - 1), no overflow
    let mid = (p1 & LOW_32) + (p2 & LOW_32) + (p0 >> 32);
    let hi = p3 + (p1 >> 32) + (p2 >> 32) + (mid >> 32);
    let lo = (mid << 32) | (p0 & LOW_32);
    (hi, lo)
}

/// Restoring long division of a 64-bit dividend, one quotient bit per step.
/// `divisor` must be non-zero.
pub fn div_u64(dividend: u64, divisor: u64) -> u64 {
    let mut quotient = 0u64;
    let mut remainder = 0u64;
    let mut bit = u64::BITS;
    while bit > 0 {
        bit -= 1;
        remainder = (remainder << 1) | ((dividend >> bit) & 1);
        quotient <<= 1;
        if remainder >= divisor {
            remainder -= divisor;
            quotient |= 1;
        }
    }
    quotient
}

/// Restoring long division of the 128-bit value `hi:lo` by `divisor`,
/// returning the low 64 bits of the quotient. The caller guarantees the
/// true quotient fits in 64 bits and that `divisor < 2^63`.
pub fn div_u128_by_u64(mut hi: u64, mut lo: u64, divisor: u64) -> u64 {
    let mut quotient = 0u64;
    let mut remainder = 0u64;
    for _ in 0..128 {
        remainder = (remainder << 1) | (hi >> 63);
        hi = (hi << 1) | (lo >> 63);
        lo <<= 1;
        quotient <<= 1;
        if remainder >= divisor {
            remainder -= divisor;
            quotient |= 1;
        }
    }
    quotient
}
