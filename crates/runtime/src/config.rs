use types::{MAX_SEGMENT_ID, SEGMENT_SPAN, SegmentAddress};

use crate::error::HeapError;

/// Layout of the memory segments the heap carves allocations from.
///
/// Segments `segment_start .. segment_start + segment_count` are used in
/// order. Each holds `bytes_per_segment` bytes; the first one starts
/// `first_segment_offset` bytes in, the others at offset 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeapConfig {
    pub segment_start: u32,
    pub segment_count: u32,
    pub first_segment_offset: u64,
    pub bytes_per_segment: u64,
}

const DEFAULT_RAM_BYTES: u64 = 4 * 1024 * 1024;

impl HeapConfig {
    /// Compiled-in layout applied on the first allocation when the guest never
    /// configured the heap. Overridable at build time through
    /// `FB_HEAP_SEGMENT`, `FB_HEAP_SEGMENT_COUNT`, `FB_HEAP_OFFSET` and
    /// `FB_RAM_BYTES`.
    pub const DEFAULT: HeapConfig = HeapConfig {
        segment_start: narrow(setting(option_env!("FB_HEAP_SEGMENT"), 1)),
        segment_count: narrow(setting(option_env!("FB_HEAP_SEGMENT_COUNT"), 1)),
        first_segment_offset: setting(option_env!("FB_HEAP_OFFSET"), 0),
        bytes_per_segment: setting(option_env!("FB_RAM_BYTES"), DEFAULT_RAM_BYTES),
    };

    /// One whole segment.
    pub const fn single(segment: u32, bytes: u64) -> Self {
        Self {
            segment_start: segment,
            segment_count: 1,
            first_segment_offset: 0,
            bytes_per_segment: bytes,
        }
    }

    pub const fn validate(&self) -> Result<(), HeapError> {
        if self.segment_start == 0 || self.segment_count == 0 {
            return Err(HeapError::NotConfigured);
        }
        if self.bytes_per_segment == 0 {
            return Err(HeapError::ZeroSegmentSize);
        }
        if self.bytes_per_segment > SEGMENT_SPAN {
            return Err(HeapError::SegmentTooLarge {
                bytes: self.bytes_per_segment,
            });
        }
        if self.first_segment_offset >= self.bytes_per_segment {
            return Err(HeapError::OffsetExceedsSegment {
                offset: self.first_segment_offset,
                bytes: self.bytes_per_segment,
            });
        }
        let last = self.segment_start as u64 + self.segment_count as u64 - 1;
        if last > MAX_SEGMENT_ID as u64 {
            return Err(HeapError::SegmentRangeOverflow {
                start: self.segment_start,
                count: self.segment_count,
            });
        }
        Ok(())
    }

    /// Bytes available across all segments.
    pub const fn capacity(&self) -> u64 {
        self.segment_count as u64 * self.bytes_per_segment - self.first_segment_offset
    }

    /// First usable address and exclusive end of segment `index` (0-based).
    /// Only meaningful for a validated config and `index < segment_count`.
    pub const fn segment_bounds(&self, index: u32) -> (SegmentAddress, u64) {
        let offset = if index == 0 { self.first_segment_offset } else { 0 };
        let base = SegmentAddress::encode(self.segment_start + index, offset);
        (base, base.raw() + (self.bytes_per_segment - offset))
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const _: () = assert!(
    HeapConfig::DEFAULT.validate().is_ok(),
    "compiled-in heap settings are invalid: check FB_HEAP_SEGMENT, FB_HEAP_SEGMENT_COUNT, FB_HEAP_OFFSET and FB_RAM_BYTES"
);

const fn setting(value: Option<&str>, default: u64) -> u64 {
    match value {
        Some(text) => parse_setting(text),
        None => default,
    }
}

const fn narrow(value: u64) -> u32 {
    assert!(value <= u32::MAX as u64, "heap setting does not fit in 32 bits");
    value as u32
}

/// Parse a numeric build setting: decimal, or hexadecimal with a `0x`
/// prefix. Underscores are skipped. Panics on anything else, which turns a
/// bad setting into a compile error when evaluated in a const.
pub const fn parse_setting(text: &str) -> u64 {
    let bytes = text.as_bytes();
    let hex = bytes.len() > 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X');
    let radix: u64 = if hex { 16 } else { 10 };
    let mut i = if hex { 2 } else { 0 };
    assert!(i < bytes.len(), "empty heap setting");

    let mut value: u64 = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        i += 1;
        let digit = match byte {
            b'_' => continue,
            b'0'..=b'9' => (byte - b'0') as u64,
            b'a'..=b'f' if hex => (byte - b'a' + 10) as u64,
            b'A'..=b'F' if hex => (byte - b'A' + 10) as u64,
            _ => panic!("heap setting is not a number"),
        };
        value = match value.checked_mul(radix) {
            Some(v) => v,
            None => panic!("heap setting overflows u64"),
        };
        value = match value.checked_add(digit) {
            Some(v) => v,
            None => panic!("heap setting overflows u64"),
        };
    }
    value
}
