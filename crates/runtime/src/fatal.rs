use core::fmt::{self, Write};

use crate::error::HeapError;
use crate::host::HostCall;
use crate::log::{LOG_LINE_BYTES, LineBuffer};

/// Exit status reported for configuration errors.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Report `err` as `"<context>: <err>"` on the host log and terminate.
pub fn fatal<H: HostCall + ?Sized>(host: &H, context: &str, err: &HeapError) -> ! {
    terminate(host, FATAL_EXIT_CODE, format_args!("{context}: {err}\n"))
}

/// Write `message`, then EXIT with `code`.
pub fn terminate<H: HostCall + ?Sized>(host: &H, code: i32, message: fmt::Arguments<'_>) -> ! {
    let mut line = LineBuffer::<LOG_LINE_BYTES>::new();
    let _ = line.write_fmt(message);
    host.write(line.as_bytes());
    host.exit(code);
    halt(line.as_str().trim_end())
}

/// Reached only when the host returned from EXIT.
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
fn halt(_message: &str) -> ! {
    loop {
        unsafe { core::arch::asm!("ebreak", options(nomem, nostack)) };
    }
}

#[cfg(not(any(target_arch = "riscv32", target_arch = "riscv64")))]
fn halt(message: &str) -> ! {
    panic!("fatal: {message}");
}
