use softfloat::abi::*;
use softfloat::{double, single};

const F32_INF: u32 = 0x7F80_0000;
const F32_NEG_INF: u32 = 0xFF80_0000;
const F64_INF: u64 = 0x7FF0_0000_0000_0000;

#[test]
fn test_add_f32_basic() {
    println!("=== binary32 addition ===");
    assert_eq!(addsf3(1.0, 2.0).to_bits(), 0x4040_0000);
    assert_eq!(addsf3(1.5, -1.0), 0.5);
    assert_eq!(addsf3(-2.5, -2.5), -5.0);
    assert_eq!(subsf3(10.0, 4.0), 6.0);
    println!("✓ small integers and halves add exactly");
}

#[test]
fn test_add_f32_cancellation_is_positive_zero() {
    assert_eq!(addsf3(-2.5, 2.5).to_bits(), 0);
    assert_eq!(addsf3(2.5, -2.5).to_bits(), 0);
    assert_eq!(subsf3(7.0, 7.0).to_bits(), 0);
}

#[test]
fn test_add_f32_zero_operands() {
    // The right-hand zero is checked first, so the left operand survives with its sign.
    assert_eq!(addsf3(-0.0, 0.0).to_bits(), 0x8000_0000);
    assert_eq!(addsf3(0.0, -0.0).to_bits(), 0);
    assert_eq!(addsf3(0.0, 3.0), 3.0);
    assert_eq!(addsf3(-4.0, 0.0), -4.0);
}

#[test]
fn test_add_f32_truncates() {
    println!("=== binary32 addition truncates instead of rounding ===");
    // 1 + 0.75ulp: round-to-nearest gives 0x3F800001, truncation keeps 1.0.
    let tiny = 1.5 * 2f32.powi(-24);
    assert_eq!(addsf3(1.0, tiny).to_bits(), 0x3F80_0000);
    assert_eq!((1.0f32 + tiny).to_bits(), 0x3F80_0001);

    assert_eq!(addsf3(0.1, 0.2).to_bits(), 0x3E99_9999);
    assert_eq!(addsf3(1.0, -0.1).to_bits(), 0x3F66_6668);
    println!("✓ dropped bits never round up");
}

#[test]
fn test_add_f32_far_apart_returns_larger() {
    assert_eq!(addsf3(1.0, 2f32.powi(-30)), 1.0);
    assert_eq!(addsf3(2f32.powi(-30), -1.0), -1.0);
}

#[test]
fn test_add_f32_overflow_and_non_finite() {
    assert_eq!(addsf3(f32::MAX, f32::MAX).to_bits(), F32_INF);
    assert_eq!(addsf3(-f32::MAX, -f32::MAX).to_bits(), F32_NEG_INF);
    assert_eq!(addsf3(f32::INFINITY, 1.0).to_bits(), F32_INF);
    // Equal mantissas cancel even when the exponent is saturated.
    assert_eq!(addsf3(f32::INFINITY, f32::NEG_INFINITY).to_bits(), 0);
}

#[test]
fn test_mul_f32() {
    println!("=== binary32 multiplication ===");
    assert_eq!(mulsf3(3.0, 2.0).to_bits(), 0x40C0_0000);
    assert_eq!(mulsf3(-2.0, 0.5).to_bits(), 0xBF80_0000);
    assert_eq!(mulsf3(1.5, 1.5), 2.25);
    assert_eq!(mulsf3(0.1, 3.0).to_bits(), 0x3E99_9999);
    println!("✓ products truncate to 24 bits");
}

#[test]
fn test_mul_f32_special_operands() {
    assert_eq!(mulsf3(0.0, 5.0).to_bits(), 0);
    assert_eq!(mulsf3(-0.0, 5.0).to_bits(), 0x8000_0000);
    assert_eq!(mulsf3(0.0, f32::INFINITY).to_bits(), 0);
    assert_eq!(mulsf3(f32::NAN, 1.0).to_bits(), F32_INF);
    assert_eq!(mulsf3(f32::NAN, -1.0).to_bits(), F32_NEG_INF);
    assert_eq!(mulsf3(f32::INFINITY, -2.0).to_bits(), F32_NEG_INF);
    assert_eq!(mulsf3(f32::MAX, 2.0).to_bits(), F32_INF);
    assert_eq!(mulsf3(f32::MIN_POSITIVE, f32::MIN_POSITIVE).to_bits(), 0);
    assert_eq!(mulsf3(-f32::MIN_POSITIVE, f32::MIN_POSITIVE).to_bits(), 0x8000_0000);
}

#[test]
fn test_div_f32() {
    println!("=== binary32 division ===");
    assert_eq!(divsf3(1.0, 1.0), 1.0);
    assert_eq!(divsf3(6.0, 3.0), 2.0);
    assert_eq!(divsf3(10.0, 4.0), 2.5);
    assert_eq!(divsf3(-9.0, 3.0), -3.0);
    // Round-to-nearest gives 0x3EAAAAAB.
    assert_eq!(divsf3(1.0, 3.0).to_bits(), 0x3EAA_AAAA);
    println!("✓ quotients truncate to 24 bits");
}

#[test]
fn test_div_f32_zero_operands() {
    assert_eq!(divsf3(1.0, 0.0).to_bits(), F32_INF);
    assert_eq!(divsf3(-1.0, 0.0).to_bits(), F32_NEG_INF);
    assert_eq!(divsf3(1.0, -0.0).to_bits(), F32_NEG_INF);
    assert_eq!(divsf3(0.0, 5.0).to_bits(), 0);
    assert_eq!(divsf3(-0.0, 5.0).to_bits(), 0x8000_0000);
    // A zero dividend wins over a zero divisor.
    assert_eq!(divsf3(0.0, 0.0).to_bits(), 0);
}

#[test]
fn test_div_f32_range_limits() {
    assert_eq!(divsf3(f32::MAX, 0.5).to_bits(), F32_INF);
    assert_eq!(divsf3(f32::MIN_POSITIVE, 4.0).to_bits(), 0);
}

#[test]
fn test_neg() {
    assert_eq!(negsf2(1.0), -1.0);
    assert_eq!(negsf2(0.0).to_bits(), 0x8000_0000);
    assert_eq!(negsf2(f32::NAN).to_bits(), f32::NAN.to_bits() ^ 0x8000_0000);
    assert_eq!(negdf2(-2.0), 2.0);
    assert_eq!(negdf2(0.0).to_bits(), 1 << 63);
}

#[test]
fn test_add_f64() {
    println!("=== binary64 addition ===");
    assert_eq!(adddf3(1.0, 2.0), 3.0);
    assert_eq!(adddf3(1.5, -1.0), 0.5);
    assert_eq!(subdf3(1e300, 1e300).to_bits(), 0);
    assert_eq!(adddf3(-0.0, 0.0).to_bits(), 1 << 63);
    // Round-to-nearest gives 0x3FD3333333333334.
    assert_eq!(adddf3(0.1, 0.2).to_bits(), 0x3FD3_3333_3333_3333);
    assert_eq!(adddf3(f64::MAX, f64::MAX).to_bits(), F64_INF);
    println!("✓ binary64 addition matches the binary32 rules");
}

#[test]
fn test_add_f64_non_finite_operand_passes_through() {
    assert_eq!(adddf3(f64::INFINITY, 1.0).to_bits(), F64_INF);
    assert_eq!(adddf3(1.0, f64::NEG_INFINITY), f64::NEG_INFINITY);
    assert_eq!(adddf3(f64::INFINITY, f64::NEG_INFINITY).to_bits(), F64_INF);
    assert!(adddf3(f64::NAN, 1.0).is_nan());
}

#[test]
fn test_mul_f64() {
    assert_eq!(muldf3(3.0, 2.0), 6.0);
    assert_eq!(muldf3(-1.25, 4.0), -5.0);
    assert_eq!(muldf3(0.1, 3.0).to_bits(), 0x3FD3_3333_3333_3333);
    assert_eq!(muldf3(f64::NAN, 2.0).to_bits(), F64_INF);
    assert_eq!(muldf3(-0.0, 2.0).to_bits(), 1 << 63);
    assert_eq!(muldf3(1e200, 1e200).to_bits(), F64_INF);
    assert_eq!(muldf3(1e-200, 1e-200).to_bits(), 0);
}

#[test]
fn test_div_f64() {
    println!("=== binary64 division ===");
    assert_eq!(divdf3(1.0, 1.0), 1.0);
    assert_eq!(divdf3(6.0, 3.0), 2.0);
    assert_eq!(divdf3(1.0, 3.0).to_bits(), 0x3FD5_5555_5555_5555);
    assert_eq!(divdf3(-7.5, 2.5), -3.0);
    assert_eq!(divdf3(1.0, 0.0).to_bits(), F64_INF);
    assert_eq!(divdf3(0.0, 0.0).to_bits(), 0);
    assert_eq!(divdf3(-0.0, 3.0).to_bits(), 1 << 63);
    println!("✓ 128-bit restoring division");
}

#[test]
fn test_div_f64_non_finite_operand_is_infinite() {
    assert_eq!(divdf3(f64::INFINITY, 2.0).to_bits(), F64_INF);
    assert_eq!(divdf3(-2.0, f64::INFINITY), f64::NEG_INFINITY);
    assert_eq!(divdf3(f64::NAN, 2.0).to_bits(), F64_INF);
}

#[test]
fn test_bit_level_entry_points_agree_with_abi() {
    let (a, b) = (3.25f32, -0.75f32);
    assert_eq!(single::add(a.to_bits(), b.to_bits()), addsf3(a, b).to_bits());
    assert_eq!(single::mul(a.to_bits(), b.to_bits()), mulsf3(a, b).to_bits());

    let (c, d) = (3.25f64, -0.75f64);
    assert_eq!(double::sub(c.to_bits(), d.to_bits()), subdf3(c, d).to_bits());
    assert_eq!(double::div(c.to_bits(), d.to_bits()), divdf3(c, d).to_bits());
}
