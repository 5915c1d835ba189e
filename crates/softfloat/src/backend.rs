//! Arithmetic backends. Guest code written against [`FloatBackend`] runs on
//! either the software engine or the hardware FPU; the crate-level
//! [`Backend`](crate::Backend) alias picks one at build time.

use crate::{Comparison, abi, double, single};

/// The primitive operations a compiler expects for `f32` and `f64`.
pub trait FloatBackend {
    fn add_f32(a: f32, b: f32) -> f32;
    fn sub_f32(a: f32, b: f32) -> f32;
    fn mul_f32(a: f32, b: f32) -> f32;
    fn div_f32(a: f32, b: f32) -> f32;
    fn neg_f32(a: f32) -> f32;
    fn cmp_f32(a: f32, b: f32) -> Comparison;

    fn f32_to_i32(a: f32) -> i32;
    fn f32_to_u32(a: f32) -> u32;
    fn f32_to_i64(a: f32) -> i64;
    fn f32_to_u64(a: f32) -> u64;
    fn i32_to_f32(a: i32) -> f32;
    fn u32_to_f32(a: u32) -> f32;
    fn i64_to_f32(a: i64) -> f32;
    fn u64_to_f32(a: u64) -> f32;

    fn add_f64(a: f64, b: f64) -> f64;
    fn sub_f64(a: f64, b: f64) -> f64;
    fn mul_f64(a: f64, b: f64) -> f64;
    fn div_f64(a: f64, b: f64) -> f64;
    fn neg_f64(a: f64) -> f64;
    fn cmp_f64(a: f64, b: f64) -> Comparison;

    fn f64_to_i32(a: f64) -> i32;
    fn f64_to_u32(a: f64) -> u32;
    fn f64_to_i64(a: f64) -> i64;
    fn f64_to_u64(a: f64) -> u64;
    fn i32_to_f64(a: i32) -> f64;
    fn u32_to_f64(a: u32) -> f64;
    fn i64_to_f64(a: i64) -> f64;
    fn u64_to_f64(a: u64) -> f64;

    fn f32_to_f64(a: f32) -> f64;
    fn f64_to_f32(a: f64) -> f32;
}

/// Bit-exact software emulation with truncating rounding.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftFloat;

impl FloatBackend for SoftFloat {
    fn add_f32(a: f32, b: f32) -> f32 {
        abi::addsf3(a, b)
    }
    fn sub_f32(a: f32, b: f32) -> f32 {
        abi::subsf3(a, b)
    }
    fn mul_f32(a: f32, b: f32) -> f32 {
        abi::mulsf3(a, b)
    }
    fn div_f32(a: f32, b: f32) -> f32 {
        abi::divsf3(a, b)
    }
    fn neg_f32(a: f32) -> f32 {
        abi::negsf2(a)
    }
    fn cmp_f32(a: f32, b: f32) -> Comparison {
        single::compare(a.to_bits(), b.to_bits())
    }

    fn f32_to_i32(a: f32) -> i32 {
        abi::fixsfsi(a)
    }
    fn f32_to_u32(a: f32) -> u32 {
        abi::fixunssfsi(a)
    }
    fn f32_to_i64(a: f32) -> i64 {
        abi::fixsfdi(a)
    }
    fn f32_to_u64(a: f32) -> u64 {
        abi::fixunssfdi(a)
    }
    fn i32_to_f32(a: i32) -> f32 {
        abi::floatsisf(a)
    }
    fn u32_to_f32(a: u32) -> f32 {
        abi::floatunsisf(a)
    }
    fn i64_to_f32(a: i64) -> f32 {
        abi::floatdisf(a)
    }
    fn u64_to_f32(a: u64) -> f32 {
        abi::floatundisf(a)
    }

    fn add_f64(a: f64, b: f64) -> f64 {
        abi::adddf3(a, b)
    }
    fn sub_f64(a: f64, b: f64) -> f64 {
        abi::subdf3(a, b)
    }
    fn mul_f64(a: f64, b: f64) -> f64 {
        abi::muldf3(a, b)
    }
    fn div_f64(a: f64, b: f64) -> f64 {
        abi::divdf3(a, b)
    }
    fn neg_f64(a: f64) -> f64 {
        abi::negdf2(a)
    }
    fn cmp_f64(a: f64, b: f64) -> Comparison {
        double::compare(a.to_bits(), b.to_bits())
    }

    fn f64_to_i32(a: f64) -> i32 {
        abi::fixdfsi(a)
    }
    fn f64_to_u32(a: f64) -> u32 {
        abi::fixunsdfsi(a)
    }
    fn f64_to_i64(a: f64) -> i64 {
        abi::fixdfdi(a)
    }
    fn f64_to_u64(a: f64) -> u64 {
        abi::fixunsdfdi(a)
    }
    fn i32_to_f64(a: i32) -> f64 {
        abi::floatsidf(a)
    }
    fn u32_to_f64(a: u32) -> f64 {
        abi::floatunsidf(a)
    }
    fn i64_to_f64(a: i64) -> f64 {
        abi::floatdidf(a)
    }
    fn u64_to_f64(a: u64) -> f64 {
        abi::floatundidf(a)
    }

    fn f32_to_f64(a: f32) -> f64 {
        abi::extendsfdf2(a)
    }
    fn f64_to_f32(a: f64) -> f32 {
        abi::truncdfsf2(a)
    }
}

/// Whatever the target's FPU (or its toolchain builtins) produce.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFloat;

fn native_cmp<T: PartialOrd>(a: T, b: T) -> Comparison {
    match a.partial_cmp(&b) {
        Some(core::cmp::Ordering::Less) => Comparison::Less,
        Some(core::cmp::Ordering::Equal) => Comparison::Equal,
        Some(core::cmp::Ordering::Greater) => Comparison::Greater,
        None => Comparison::Unordered,
    }
}

impl FloatBackend for NativeFloat {
    fn add_f32(a: f32, b: f32) -> f32 {
        a + b
    }
    fn sub_f32(a: f32, b: f32) -> f32 {
        a - b
    }
    fn mul_f32(a: f32, b: f32) -> f32 {
        a * b
    }
    fn div_f32(a: f32, b: f32) -> f32 {
        a / b
    }
    fn neg_f32(a: f32) -> f32 {
        -a
    }
    fn cmp_f32(a: f32, b: f32) -> Comparison {
        native_cmp(a, b)
    }

    fn f32_to_i32(a: f32) -> i32 {
        a as i32
    }
    fn f32_to_u32(a: f32) -> u32 {
        a as u32
    }
    fn f32_to_i64(a: f32) -> i64 {
        a as i64
    }
    fn f32_to_u64(a: f32) -> u64 {
        a as u64
    }
    fn i32_to_f32(a: i32) -> f32 {
        a as f32
    }
    fn u32_to_f32(a: u32) -> f32 {
        a as f32
    }
    fn i64_to_f32(a: i64) -> f32 {
        a as f32
    }
    fn u64_to_f32(a: u64) -> f32 {
        a as f32
    }

    fn add_f64(a: f64, b: f64) -> f64 {
        a + b
    }
    fn sub_f64(a: f64, b: f64) -> f64 {
        a - b
    }
    fn mul_f64(a: f64, b: f64) -> f64 {
        a * b
    }
    fn div_f64(a: f64, b: f64) -> f64 {
        a / b
    }
    fn neg_f64(a: f64) -> f64 {
        -a
    }
    fn cmp_f64(a: f64, b: f64) -> Comparison {
        native_cmp(a, b)
    }

    fn f64_to_i32(a: f64) -> i32 {
        a as i32
    }
    fn f64_to_u32(a: f64) -> u32 {
        a as u32
    }
    fn f64_to_i64(a: f64) -> i64 {
        a as i64
    }
    fn f64_to_u64(a: f64) -> u64 {
        a as u64
    }
    fn i32_to_f64(a: i32) -> f64 {
        a as f64
    }
    fn u32_to_f64(a: u32) -> f64 {
        a as f64
    }
    fn i64_to_f64(a: i64) -> f64 {
        a as f64
    }
    fn u64_to_f64(a: u64) -> f64 {
        a as f64
    }

    fn f32_to_f64(a: f32) -> f64 {
        a as f64
    }
    fn f64_to_f32(a: f64) -> f32 {
        a as f32
    }
}
