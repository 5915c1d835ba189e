//! The process-wide heap and the entry points guests use to reach it.

use core::alloc::{GlobalAlloc, Layout};
use core::ptr;

use types::SegmentAddress;

use crate::config::HeapConfig;
use crate::error::HeapError;
use crate::fatal::fatal;
use crate::global::Global;
use crate::heap::SegmentedHeap;
use crate::host::Ecall;

/// The guest's single heap.
pub static HEAP: Global<SegmentedHeap> = Global::new(SegmentedHeap::new());

/// Global allocator over [`HEAP`], for guests that use `alloc`:
///
/// ```ignore
/// #[global_allocator]
/// static ALLOC: runtime::HeapAllocator = runtime::HeapAllocator;
/// ```
///
/// `dealloc` does nothing; exhaustion yields a null pointer.
pub struct HeapAllocator;

unsafe impl GlobalAlloc for HeapAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let heap = unsafe { HEAP.get_mut() };
        match heap.allocate_aligned(layout.size(), layout.align()) {
            Some(addr) => addr.as_mut_ptr(),
            None => ptr::null_mut(),
        }
    }

    unsafe fn dealloc(&self, _ptr: *mut u8, _layout: Layout) {}
}

fn or_fatal(context: &str, result: Result<(), HeapError>) {
    if let Err(err) = result {
        fatal(&Ecall, context, &err);
    }
}

/// Point the heap at `[base, base + size)`. Terminates the process if `base`
/// is not a segment address. A null `base` or zero `size` restores the
/// compiled-in defaults.
pub fn heap_init(base: SegmentAddress, size: u64) {
    let result = unsafe { HEAP.with(|heap| heap.init_flat(base, size)) };
    or_fatal("heap_init", result);
}

/// Spread the heap over a segment range. Terminates the process on an
/// invalid layout.
pub fn heap_init_segments(config: HeapConfig) {
    let result = unsafe { HEAP.with(|heap| heap.init_segments(config)) };
    or_fatal("heap_init_segments", result);
}

pub fn heap_init_segment(segment: u32, bytes: u64) {
    heap_init_segments(HeapConfig::single(segment, bytes));
}

pub fn malloc(size: usize) -> Option<SegmentAddress> {
    unsafe { HEAP.with(|heap| heap.allocate(size)) }
}

pub fn free(addr: SegmentAddress) {
    unsafe { HEAP.with(|heap| heap.free(addr)) }
}
