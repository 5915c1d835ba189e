use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};

use runtime::fatal::terminate;
use runtime::host::HostArgs;
use runtime::log::{LOG_LINE_BYTES, write_fmt};
use runtime::types::host::{STDOUT_FD, SYS_DEBUG_LOG, SYS_EXIT, SYS_PUTCHAR, SYS_WRITE};
use runtime::{HeapConfig, HeapError, HostCall, SegmentAddress, fatal};

/// Host double that records every call; WRITE payloads are copied out.
#[derive(Default)]
struct RecordingHost {
    calls: RefCell<Vec<(u32, HostArgs)>>,
    output: RefCell<Vec<u8>>,
}

impl HostCall for RecordingHost {
    fn call(&self, id: u32, args: HostArgs) -> usize {
        self.calls.borrow_mut().push((id, args));
        if id == SYS_WRITE {
            let bytes = unsafe { std::slice::from_raw_parts(args[1] as *const u8, args[2]) };
            self.output.borrow_mut().extend_from_slice(bytes);
            return args[2];
        }
        0
    }
}

impl RecordingHost {
    fn output(&self) -> String {
        String::from_utf8(self.output.borrow().clone()).unwrap()
    }

    fn ids(&self) -> Vec<u32> {
        self.calls.borrow().iter().map(|(id, _)| *id).collect()
    }
}

#[test]
fn test_write_goes_to_stdout_descriptor() {
    let host = RecordingHost::default();
    assert_eq!(host.write(b"hello"), 5);
    let calls = host.calls.borrow();
    assert_eq!(calls[0].0, SYS_WRITE);
    assert_eq!(calls[0].1[0], STDOUT_FD);
    assert_eq!(host.output(), "hello");
}

#[test]
fn test_putchar_exit_and_debug_log_arguments() {
    let host = RecordingHost::default();
    host.putchar(b'x');
    host.exit(-2);
    host.debug_log(7, [1, 2, 3, 4]);

    let calls = host.calls.borrow();
    assert_eq!(calls[0], (SYS_PUTCHAR, [b'x' as usize, 0, 0, 0, 0, 0, 0]));
    assert_eq!(calls[1], (SYS_EXIT, [-2isize as usize, 0, 0, 0, 0, 0, 0]));
    assert_eq!(calls[2], (SYS_DEBUG_LOG, [7, 1, 2, 3, 4, 0, 0]));
}

#[test]
fn test_formatted_log_line_is_truncated() {
    println!("=== logf! renders into a fixed buffer ===");
    let host = RecordingHost::default();
    write_fmt(&host, format_args!("segment {} at {:?}", 2, SegmentAddress::encode(2, 0x40)));
    assert_eq!(host.output(), "segment 2 at 2:0x0000040");

    let host = RecordingHost::default();
    let long = "x".repeat(LOG_LINE_BYTES * 2);
    write_fmt(&host, format_args!("{long}"));
    assert_eq!(host.output().len(), LOG_LINE_BYTES);
    println!("✓ long lines are cut at {LOG_LINE_BYTES} bytes");
}

#[test]
fn test_fatal_reports_then_exits_with_status_one() {
    println!("=== configuration errors terminate the guest ===");
    let host = RecordingHost::default();
    let err = HeapConfig { segment_count: 0, ..HeapConfig::single(1, 64) }
        .validate()
        .unwrap_err();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        fatal(&host, "fb_malloc", &err);
    }));
    let message = outcome.unwrap_err();
    let message = message.downcast_ref::<String>().unwrap();
    println!("host build panicked with: {message}");
    assert!(message.contains("fb_malloc: RAM heap not configured"));

    assert_eq!(host.ids(), vec![SYS_WRITE, SYS_EXIT]);
    assert_eq!(host.calls.borrow()[1].1[0], 1);
    assert_eq!(
        host.output(),
        "fb_malloc: RAM heap not configured: segment start and count must be non-zero\n"
    );
    println!("✓ diagnostic written, EXIT(1) requested");
}

#[test]
fn test_fatal_message_for_bad_flat_base() {
    let host = RecordingHost::default();
    let err = HeapError::NotSegmentAddress { base: SegmentAddress(0x40) };
    let _ = panic::catch_unwind(AssertUnwindSafe(|| {
        fatal(&host, "heap_init", &err);
    }));
    assert_eq!(host.output(), "heap_init: heap base 0x40 is not a RAM segment address\n");
}

#[test]
fn test_fatal_message_for_flat_region_past_segment() {
    let host = RecordingHost::default();
    let err = HeapError::FlatRegionOverflow { base: SegmentAddress(0xFFFF_FFF0), size: 256 };
    let _ = panic::catch_unwind(AssertUnwindSafe(|| {
        fatal(&host, "heap_init", &err);
    }));
    assert_eq!(
        host.output(),
        "heap_init: flat heap of 256 bytes at 0xfffffff0 runs past the end of its segment\n"
    );
}

#[test]
fn test_terminate_with_custom_code() {
    let host = RecordingHost::default();
    let _ = panic::catch_unwind(AssertUnwindSafe(|| {
        terminate(&host, 101, format_args!("panic at {}:{}\n", "main.rs", 3));
    }));
    assert_eq!(host.output(), "panic at main.rs:3\n");
    assert_eq!(host.calls.borrow()[1], (SYS_EXIT, [101, 0, 0, 0, 0, 0, 0]));
}
