//! Entry points with the calling convention of the compiler's soft-float
//! builtins (`__addsf3`, `__gtdf2`, ...).
//!
//! Comparison builtins return an `i32` whose sign encodes the ordering. The
//! value reported for NaN operands depends on the predicate the compiler is
//! about to test, so that the test comes out false for every ordered
//! predicate:
//!
//! | builtin          | unordered result |
//! |------------------|------------------|
//! | `gt*2`, `ge*2`   | `-1`             |
//! | `lt*2`, `le*2`   | `1`              |
//! | `eq*2`, `ne*2`   | `1` (not equal)  |
//! | `unord*2`        | `1`              |
//!
//! With the `export-builtins` feature the functions are also exported under
//! their C symbol names for targets whose toolchain does not ship them.

use crate::{convert, double, single};

macro_rules! builtins {
    ($( $sym:ident => fn $name:ident($($arg:ident: $ty:ty),*) -> $ret:ty $body:block )*) => {
        $(
            #[inline]
            pub fn $name($($arg: $ty),*) -> $ret $body
        )*

        #[cfg(feature = "export-builtins")]
        mod exports {
            $(
                #[unsafe(no_mangle)]
                pub extern "C" fn $sym($($arg: $ty),*) -> $ret {
                    super::$name($($arg),*)
                }
            )*
        }
    };
}

builtins! {
    // ---- binary32 comparisons ----
    __gtsf2 => fn gtsf2(a: f32, b: f32) -> i32 { single::compare(a.to_bits(), b.to_bits()).to_abi(-1) }
    __gesf2 => fn gesf2(a: f32, b: f32) -> i32 { single::compare(a.to_bits(), b.to_bits()).to_abi(-1) }
    __ltsf2 => fn ltsf2(a: f32, b: f32) -> i32 { single::compare(a.to_bits(), b.to_bits()).to_abi(1) }
    __lesf2 => fn lesf2(a: f32, b: f32) -> i32 { single::compare(a.to_bits(), b.to_bits()).to_abi(1) }
    __eqsf2 => fn eqsf2(a: f32, b: f32) -> i32 { single::compare(a.to_bits(), b.to_bits()).ne() as i32 }
    __nesf2 => fn nesf2(a: f32, b: f32) -> i32 { single::compare(a.to_bits(), b.to_bits()).ne() as i32 }
    __unordsf2 => fn unordsf2(a: f32, b: f32) -> i32 { single::is_unordered(a.to_bits(), b.to_bits()) as i32 }

    // ---- binary32 arithmetic ----
    __addsf3 => fn addsf3(a: f32, b: f32) -> f32 { f32::from_bits(single::add(a.to_bits(), b.to_bits())) }
    __subsf3 => fn subsf3(a: f32, b: f32) -> f32 { f32::from_bits(single::sub(a.to_bits(), b.to_bits())) }
    __mulsf3 => fn mulsf3(a: f32, b: f32) -> f32 { f32::from_bits(single::mul(a.to_bits(), b.to_bits())) }
    __divsf3 => fn divsf3(a: f32, b: f32) -> f32 { f32::from_bits(single::div(a.to_bits(), b.to_bits())) }
    __negsf2 => fn negsf2(a: f32) -> f32 { f32::from_bits(single::neg(a.to_bits())) }

    // ---- binary32 conversions ----
    __fixsfsi => fn fixsfsi(a: f32) -> i32 { single::to_i32(a.to_bits()) }
    __fixunssfsi => fn fixunssfsi(a: f32) -> u32 { single::to_u32(a.to_bits()) }
    __fixsfdi => fn fixsfdi(a: f32) -> i64 { single::to_i64(a.to_bits()) }
    __fixunssfdi => fn fixunssfdi(a: f32) -> u64 { single::to_u64(a.to_bits()) }
    __floatsisf => fn floatsisf(a: i32) -> f32 { f32::from_bits(single::from_i32(a)) }
    __floatunsisf => fn floatunsisf(a: u32) -> f32 { f32::from_bits(single::from_u32(a)) }
    __floatdisf => fn floatdisf(a: i64) -> f32 { f32::from_bits(single::from_i64(a)) }
    __floatundisf => fn floatundisf(a: u64) -> f32 { f32::from_bits(single::from_u64(a)) }

    // ---- binary64 comparisons ----
    __gtdf2 => fn gtdf2(a: f64, b: f64) -> i32 { double::compare(a.to_bits(), b.to_bits()).to_abi(-1) }
    __gedf2 => fn gedf2(a: f64, b: f64) -> i32 { double::compare(a.to_bits(), b.to_bits()).to_abi(-1) }
    __ltdf2 => fn ltdf2(a: f64, b: f64) -> i32 { double::compare(a.to_bits(), b.to_bits()).to_abi(1) }
    __ledf2 => fn ledf2(a: f64, b: f64) -> i32 { double::compare(a.to_bits(), b.to_bits()).to_abi(1) }
    __eqdf2 => fn eqdf2(a: f64, b: f64) -> i32 { double::compare(a.to_bits(), b.to_bits()).ne() as i32 }
    __nedf2 => fn nedf2(a: f64, b: f64) -> i32 { double::compare(a.to_bits(), b.to_bits()).ne() as i32 }
    __unorddf2 => fn unorddf2(a: f64, b: f64) -> i32 { double::is_unordered(a.to_bits(), b.to_bits()) as i32 }

    // ---- binary64 arithmetic ----
    __adddf3 => fn adddf3(a: f64, b: f64) -> f64 { f64::from_bits(double::add(a.to_bits(), b.to_bits())) }
    __subdf3 => fn subdf3(a: f64, b: f64) -> f64 { f64::from_bits(double::sub(a.to_bits(), b.to_bits())) }
    __muldf3 => fn muldf3(a: f64, b: f64) -> f64 { f64::from_bits(double::mul(a.to_bits(), b.to_bits())) }
    __divdf3 => fn divdf3(a: f64, b: f64) -> f64 { f64::from_bits(double::div(a.to_bits(), b.to_bits())) }
    __negdf2 => fn negdf2(a: f64) -> f64 { f64::from_bits(double::neg(a.to_bits())) }

    // ---- binary64 conversions ----
    __fixdfsi => fn fixdfsi(a: f64) -> i32 { double::to_i32(a.to_bits()) }
    __fixunsdfsi => fn fixunsdfsi(a: f64) -> u32 { double::to_u32(a.to_bits()) }
    __fixdfdi => fn fixdfdi(a: f64) -> i64 { double::to_i64(a.to_bits()) }
    __fixunsdfdi => fn fixunsdfdi(a: f64) -> u64 { double::to_u64(a.to_bits()) }
    __floatsidf => fn floatsidf(a: i32) -> f64 { f64::from_bits(double::from_i32(a)) }
    __floatunsidf => fn floatunsidf(a: u32) -> f64 { f64::from_bits(double::from_u32(a)) }
    __floatdidf => fn floatdidf(a: i64) -> f64 { f64::from_bits(double::from_i64(a)) }
    __floatundidf => fn floatundidf(a: u64) -> f64 { f64::from_bits(double::from_u64(a)) }

    // ---- precision changes ----
    __extendsfdf2 => fn extendsfdf2(a: f32) -> f64 { f64::from_bits(convert::f32_to_f64(a.to_bits())) }
    __truncdfsf2 => fn truncdfsf2(a: f64) -> f32 { f32::from_bits(convert::f64_to_f32(a.to_bits())) }
}
