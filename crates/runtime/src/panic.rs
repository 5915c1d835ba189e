use core::panic::PanicInfo;

use crate::fatal::terminate;
use crate::host::Ecall;

/// Exit status of a panicking guest.
const PANIC_EXIT_CODE: i32 = 101;

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    match info.location() {
        Some(location) => terminate(
            &Ecall,
            PANIC_EXIT_CODE,
            format_args!(
                "panic at {}:{}:{}: {}\n",
                location.file(),
                location.line(),
                location.column(),
                info.message()
            ),
        ),
        None => terminate(&Ecall, PANIC_EXIT_CODE, format_args!("panic: {}\n", info.message())),
    }
}
