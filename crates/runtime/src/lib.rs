#![cfg_attr(not(test), no_std)]
//! Runtime support linked into every guest: the segmented heap, the
//! host-call boundary, logging and fatal termination. The float engine and
//! the boundary types are re-exported so a guest depends on this crate alone.

#[macro_use]
pub mod log;

pub mod allocator;
#[cfg(feature = "c-abi")]
pub mod c_abi;
pub mod config;
pub mod error;
pub mod fatal;
pub mod global;
pub mod heap;
pub mod host;
pub mod mem;
#[cfg(all(feature = "panic-handler", any(target_arch = "riscv32", target_arch = "riscv64")))]
mod panic;

pub use allocator::{HeapAllocator, free, heap_init, heap_init_segment, heap_init_segments, malloc};
pub use config::HeapConfig;
pub use error::HeapError;
pub use fatal::fatal;
pub use heap::SegmentedHeap;
pub use host::{Ecall, HostCall};

pub use softfloat;
pub use types;
pub use types::SegmentAddress;
