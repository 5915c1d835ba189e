//! C entry points for guests written in C or C++.

use core::ptr;

use types::SegmentAddress;

use crate::allocator;
use crate::config::HeapConfig;
use crate::mem;

#[unsafe(no_mangle)]
pub extern "C" fn fb_heap_init(base: *mut u8, size: usize) {
    allocator::heap_init(SegmentAddress::from_ptr(base), size as u64);
}

#[unsafe(no_mangle)]
pub extern "C" fn fb_heap_init_segments(
    start_segment: u32,
    count: u32,
    offset: usize,
    bytes_per_segment: usize,
) {
    allocator::heap_init_segments(HeapConfig {
        segment_start: start_segment,
        segment_count: count,
        first_segment_offset: offset as u64,
        bytes_per_segment: bytes_per_segment as u64,
    });
}

#[unsafe(no_mangle)]
pub extern "C" fn fb_heap_init_segment(segment: u32, size: usize) {
    allocator::heap_init_segment(segment, size as u64);
}

/// Null when `size` is 0 or the heap is exhausted.
#[unsafe(no_mangle)]
pub extern "C" fn fb_malloc(size: usize) -> *mut u8 {
    match allocator::malloc(size) {
        Some(addr) => addr.as_mut_ptr(),
        None => ptr::null_mut(),
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn fb_free(ptr: *mut u8) {
    allocator::free(SegmentAddress::from_ptr(ptr));
}

/// # Safety
/// See [`mem::copy_bytes`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fb_memcpy(dst: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    unsafe { mem::copy_bytes(dst, src, n) }
}

/// Only the low byte of `c` is stored.
///
/// # Safety
/// See [`mem::fill_bytes`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fb_memset(dst: *mut u8, c: i32, n: usize) -> *mut u8 {
    unsafe { mem::fill_bytes(dst, c as u8, n) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memset_keeps_low_byte_only() {
        let mut buf = [0u8; 4];
        let out = unsafe { fb_memset(buf.as_mut_ptr(), 0x1FF, 3) };
        assert_eq!(out, buf.as_mut_ptr());
        assert_eq!(buf, [0xFF, 0xFF, 0xFF, 0]);
    }

    #[test]
    fn memcpy_returns_destination() {
        let src = [1u8, 2, 3];
        let mut dst = [0u8; 3];
        let out = unsafe { fb_memcpy(dst.as_mut_ptr(), src.as_ptr(), 3) };
        assert_eq!(out, dst.as_mut_ptr());
        assert_eq!(dst, src);
    }
}
