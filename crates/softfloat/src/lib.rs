#![cfg_attr(not(test), no_std)]
//! Software IEEE-754 binary32/binary64 arithmetic for guests without an FPU.
//!
//! Every routine is a pure function from operand bit patterns to a result bit
//! pattern. There is no rounding-mode register and no exception flags.
//!
//! The engine deliberately trades exactness for size:
//! - rounding truncates (no guard/sticky bits, no round-to-nearest-even);
//! - subnormal operands are not renormalized;
//! - multiplication returns a signed infinity for any operand with the
//!   maximum exponent, NaN included.
//!
//! Guest code links against [`abi`] (the compiler-builtin entry points), the
//! [`SoftF32`]/[`SoftF64`] operator types, or a [`FloatBackend`] chosen at
//! build time through [`Backend`].

pub mod abi;
pub mod backend;
pub mod comparison;
pub mod convert;
pub mod double;
pub mod ops;
pub mod single;
mod wide;

pub use backend::{FloatBackend, NativeFloat, SoftFloat};
pub use comparison::Comparison;
pub use ops::{SoftF32, SoftF64};

cfg_if::cfg_if! {
    if #[cfg(feature = "hard-float")] {
        /// Backend selected by the `hard-float` feature.
        pub type Backend = NativeFloat;
    } else {
        /// Backend used when the `hard-float` feature is off.
        pub type Backend = SoftFloat;
    }
}
