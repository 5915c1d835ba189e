//! Guest logging over the host WRITE and DEBUG_LOG calls. Nothing here
//! allocates: formatted lines are rendered into a fixed stack buffer.

use core::fmt;

use crate::host::HostCall;

/// Longest line `logf!` renders; the rest is cut off.
pub const LOG_LINE_BYTES: usize = 256;

/// Fixed-capacity `fmt::Write` sink that silently truncates.
pub struct LineBuffer<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> LineBuffer<N> {
    pub const fn new() -> Self {
        Self { buf: [0; N], len: 0 }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The buffered text, cut back to the last complete character if
    /// truncation split one.
    pub fn as_str(&self) -> &str {
        match core::str::from_utf8(self.as_bytes()) {
            Ok(s) => s,
            Err(e) => {
                // valid_up_to() marks a char boundary
                core::str::from_utf8(&self.buf[..e.valid_up_to()]).unwrap_or_default()
            }
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.len == N
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for LineBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let space = N - self.len;
        let len = core::cmp::min(s.len(), space);
        self.buf[self.len..self.len + len].copy_from_slice(&s.as_bytes()[..len]);
        self.len += len;
        Ok(())
    }
}

/// Render `args` into a [`LOG_LINE_BYTES`] buffer and write it to `host`.
pub fn write_fmt<H: HostCall + ?Sized>(host: &H, args: fmt::Arguments<'_>) {
    let mut line = LineBuffer::<LOG_LINE_BYTES>::new();
    let _ = fmt::Write::write_fmt(&mut line, args);
    host.write(line.as_bytes());
}

/// Message types `log!` accepts.
pub trait AsBytes {
    fn as_bytes_ref(&self) -> &[u8];
}

impl AsBytes for str {
    fn as_bytes_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsBytes for [u8] {
    fn as_bytes_ref(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> AsBytes for [u8; N] {
    fn as_bytes_ref(&self) -> &[u8] {
        self
    }
}

impl<T: AsBytes + ?Sized> AsBytes for &T {
    fn as_bytes_ref(&self) -> &[u8] {
        (**self).as_bytes_ref()
    }
}

/// Write a string or byte string to the host log as is.
#[macro_export]
macro_rules! log {
    ($msg:expr) => {{
        let msg: &[u8] = $crate::log::AsBytes::as_bytes_ref(&$msg);
        $crate::host::HostCall::write(&$crate::host::Ecall, msg);
    }};
}

/// `format!`-style logging into a fixed stack buffer.
#[macro_export]
macro_rules! logf {
    ($($arg:tt)+) => {
        $crate::log::write_fmt(&$crate::host::Ecall, format_args!($($arg)+))
    };
}

/// Forward a tag and up to four register values to the host DEBUG_LOG call.
#[macro_export]
macro_rules! debug_log {
    ($tag:expr) => {
        $crate::debug_log!($tag, 0, 0, 0, 0)
    };
    ($tag:expr, $a:expr) => {
        $crate::debug_log!($tag, $a, 0, 0, 0)
    };
    ($tag:expr, $a:expr, $b:expr) => {
        $crate::debug_log!($tag, $a, $b, 0, 0)
    };
    ($tag:expr, $a:expr, $b:expr, $c:expr) => {
        $crate::debug_log!($tag, $a, $b, $c, 0)
    };
    ($tag:expr, $a:expr, $b:expr, $c:expr, $d:expr) => {
        $crate::host::HostCall::debug_log(
            &$crate::host::Ecall,
            $tag as usize,
            [$a as usize, $b as usize, $c as usize, $d as usize],
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn line_buffer_truncates_at_capacity() {
        let mut line = LineBuffer::<8>::new();
        write!(line, "segment {} exhausted", 3).unwrap();
        assert_eq!(line.as_bytes(), b"segment ");
        assert!(line.is_truncated());
    }

    #[test]
    fn line_buffer_drops_split_character() {
        let mut line = LineBuffer::<4>::new();
        line.write_str("ab\u{e9}\u{e9}").unwrap();
        // "ab" + 2-byte é fills exactly 4 bytes; the second é is cut.
        assert_eq!(line.as_str(), "ab\u{e9}");

        let mut line = LineBuffer::<3>::new();
        line.write_str("ab\u{e9}").unwrap();
        assert_eq!(line.as_str(), "ab");
    }
}
