use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{convert, double, single};

/// An `f32` whose operators go through the software engine.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default)]
pub struct SoftF32(pub f32);

/// An `f64` whose operators go through the software engine.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default)]
pub struct SoftF64(pub f64);

macro_rules! soft_float {
    (@binop $ty:ident, $engine:ident, $trait:ident $method:ident $assign:ident $assign_method:ident) => {
        impl $trait for $ty {
            type Output = Self;
            fn $method(self, rhs: Self) -> Self {
                Self::from_bits($engine::$method(self.to_bits(), rhs.to_bits()))
            }
        }

        impl $assign for $ty {
            fn $assign_method(&mut self, rhs: Self) {
                *self = $trait::$method(*self, rhs);
            }
        }
    };

    ($ty:ident, $prim:ty, $bits:ty, $engine:ident) => {
        impl $ty {
            pub const fn from_bits(bits: $bits) -> Self {
                Self(<$prim>::from_bits(bits))
            }

            pub const fn to_bits(self) -> $bits {
                self.0.to_bits()
            }

            pub const fn is_nan(self) -> bool {
                $engine::is_nan(self.to_bits())
            }

            pub fn trunc_i32(self) -> i32 {
                $engine::to_i32(self.to_bits())
            }

            pub fn trunc_i64(self) -> i64 {
                $engine::to_i64(self.to_bits())
            }

            pub fn trunc_u32(self) -> u32 {
                $engine::to_u32(self.to_bits())
            }

            pub fn trunc_u64(self) -> u64 {
                $engine::to_u64(self.to_bits())
            }
        }

        impl From<$prim> for $ty {
            fn from(value: $prim) -> Self {
                Self(value)
            }
        }

        impl From<$ty> for $prim {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl From<i32> for $ty {
            fn from(value: i32) -> Self {
                Self::from_bits($engine::from_i32(value))
            }
        }

        impl From<u32> for $ty {
            fn from(value: u32) -> Self {
                Self::from_bits($engine::from_u32(value))
            }
        }

        impl From<i64> for $ty {
            fn from(value: i64) -> Self {
                Self::from_bits($engine::from_i64(value))
            }
        }

        impl From<u64> for $ty {
            fn from(value: u64) -> Self {
                Self::from_bits($engine::from_u64(value))
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $engine::compare(self.to_bits(), other.to_bits()).eq()
            }
        }

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                $engine::compare(self.to_bits(), other.to_bits()).to_ordering()
            }
        }

        impl Neg for $ty {
            type Output = Self;
            fn neg(self) -> Self {
                Self::from_bits($engine::neg(self.to_bits()))
            }
        }

        soft_float!(@binop $ty, $engine, Add add AddAssign add_assign);
        soft_float!(@binop $ty, $engine, Sub sub SubAssign sub_assign);
        soft_float!(@binop $ty, $engine, Mul mul MulAssign mul_assign);
        soft_float!(@binop $ty, $engine, Div div DivAssign div_assign);
    };
}

soft_float!(SoftF32, f32, u32, single);
soft_float!(SoftF64, f64, u64, double);

impl From<SoftF32> for SoftF64 {
    fn from(value: SoftF32) -> Self {
        SoftF64::from_bits(convert::f32_to_f64(value.to_bits()))
    }
}

impl From<SoftF64> for SoftF32 {
    fn from(value: SoftF64) -> Self {
        SoftF32::from_bits(convert::f64_to_f32(value.to_bits()))
    }
}
