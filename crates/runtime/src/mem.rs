//! Byte-at-a-time memory helpers for guests without a libc.

/// Copy `n` bytes from `src` to `dst` front to back. Returns `dst`.
///
/// # Safety
/// `src` must be readable and `dst` writable for `n` bytes. Overlapping
/// ranges are only safe when `dst` precedes `src`.
pub unsafe fn copy_bytes(dst: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    for i in 0..n {
        unsafe { dst.add(i).write_volatile(src.add(i).read_volatile()) };
    }
    dst
}

/// Set `n` bytes at `dst` to `value`. Returns `dst`.
///
/// # Safety
/// `dst` must be writable for `n` bytes.
pub unsafe fn fill_bytes(dst: *mut u8, value: u8, n: usize) -> *mut u8 {
    for i in 0..n {
        unsafe { dst.add(i).write_volatile(value) };
    }
    dst
}
