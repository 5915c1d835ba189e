//! The host-call boundary: an operation id plus up to seven register-width
//! arguments, answered synchronously with one register-width result.

use types::host::{HOST_CALL_MAX_ARGS, STDOUT_FD, SYS_DEBUG_LOG, SYS_EXIT, SYS_PUTCHAR, SYS_WRITE};

pub type HostArgs = [usize; HOST_CALL_MAX_ARGS];

pub trait HostCall {
    fn call(&self, id: u32, args: HostArgs) -> usize;

    /// Write `bytes` to the guest log stream. Returns the byte count the host
    /// accepted.
    fn write(&self, bytes: &[u8]) -> usize {
        self.call(SYS_WRITE, [STDOUT_FD, bytes.as_ptr() as usize, bytes.len(), 0, 0, 0, 0])
    }

    fn putchar(&self, byte: u8) {
        self.call(SYS_PUTCHAR, [byte as usize, 0, 0, 0, 0, 0, 0]);
    }

    /// Ask the host to terminate the process. A well-behaved host never
    /// returns from this call.
    fn exit(&self, code: i32) {
        self.call(SYS_EXIT, [code as isize as usize, 0, 0, 0, 0, 0, 0]);
    }

    /// Tagged register dump, rendered by the host.
    fn debug_log(&self, tag: usize, values: [usize; 4]) {
        let [a, b, c, d] = values;
        self.call(SYS_DEBUG_LOG, [tag, a, b, c, d, 0, 0]);
    }
}

impl<H: HostCall + ?Sized> HostCall for &H {
    fn call(&self, id: u32, args: HostArgs) -> usize {
        (**self).call(id, args)
    }
}

/// Traps into the host with `ecall`. Off RISC-V every call is a no-op that
/// returns 0, so host-side builds and tests link.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ecall;

impl HostCall for Ecall {
    fn call(&self, id: u32, args: HostArgs) -> usize {
        unsafe { ecall(id, args) }
    }
}

cfg_if::cfg_if! {
    if #[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))] {
        unsafe fn ecall(id: u32, args: HostArgs) -> usize {
            let mut a0 = args[0];
            unsafe {
                core::arch::asm!(
                    "ecall",
                    inlateout("a0") a0,
                    in("a1") args[1],
                    in("a2") args[2],
                    in("a3") args[3],
                    in("a4") args[4],
                    in("a5") args[5],
                    in("a6") args[6],
                    in("a7") id as usize,
                    options(nostack),
                );
            }
            a0
        }
    } else {
        unsafe fn ecall(_id: u32, _args: HostArgs) -> usize {
            0
        }
    }
}
