//! Bump allocator spanning one or more numbered RAM segments.
//!
//! Allocations are carved from the active segment in address order. When a
//! request does not fit, the heap moves on to the next configured segment
//! and never returns to the previous one; the unused tail of a segment is
//! abandoned. Nothing is ever freed.

use types::{SEGMENT_SPAN, SegmentAddress};

use crate::config::HeapConfig;
use crate::error::HeapError;

/// Every request is rounded up to a multiple of this.
pub const HEAP_ALIGN: u64 = 8;

macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "heap-trace")]
        {
            $crate::logf!($($arg)+);
        }
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Defaults are applied on the next allocation.
    Unconfigured,
    Segments(HeapConfig),
    /// A single caller-supplied region; never advances.
    Flat,
}

#[derive(Clone, Debug)]
pub struct SegmentedHeap {
    mode: Mode,
    /// Index of the active segment within the configured range.
    index: u32,
    /// First usable address of the active segment (or flat region).
    base: u64,
    cursor: u64,
    end: u64,
}

impl SegmentedHeap {
    pub const fn new() -> Self {
        Self {
            mode: Mode::Unconfigured,
            index: 0,
            base: 0,
            cursor: 0,
            end: 0,
        }
    }

    pub fn with_config(config: HeapConfig) -> Result<Self, HeapError> {
        let mut heap = Self::new();
        heap.init_segments(config)?;
        Ok(heap)
    }

    /// Use the segment range described by `config`, starting over at its
    /// first segment.
    pub fn init_segments(&mut self, config: HeapConfig) -> Result<(), HeapError> {
        config.validate()?;
        self.mode = Mode::Segments(config);
        self.enter_segment(&config, 0);
        trace!(
            "heap: segments {}..{} x {} bytes, offset {}\n",
            config.segment_start,
            config.segment_start + config.segment_count,
            config.bytes_per_segment,
            config.first_segment_offset
        );
        Ok(())
    }

    /// Use the whole of one segment.
    pub fn init_segment(&mut self, segment: u32, bytes: u64) -> Result<(), HeapError> {
        self.init_segments(HeapConfig::single(segment, bytes))
    }

    /// Use the flat region `[base, base + size)`, which must stay inside the
    /// segment `base` names. A null `base` or a zero `size` drops any
    /// configuration, so the next allocation applies the compiled-in
    /// defaults.
    pub fn init_flat(&mut self, base: SegmentAddress, size: u64) -> Result<(), HeapError> {
        if base.is_null() || size == 0 {
            *self = Self::new();
            return Ok(());
        }
        if !SegmentAddress::is_segment_address(base.raw()) {
            return Err(HeapError::NotSegmentAddress { base });
        }
        if size > SEGMENT_SPAN - base.offset() {
            return Err(HeapError::FlatRegionOverflow { base, size });
        }
        self.mode = Mode::Flat;
        self.index = 0;
        self.base = base.raw();
        self.cursor = base.raw();
        self.end = base.raw().saturating_add(size);
        Ok(())
    }

    /// Reserve `size` bytes, rounded up to [`HEAP_ALIGN`]. `None` for a
    /// zero-size request or once the configured segments are exhausted.
    pub fn allocate(&mut self, size: usize) -> Option<SegmentAddress> {
        self.allocate_aligned(size, HEAP_ALIGN as usize)
    }

    /// Like [`allocate`](Self::allocate), additionally rounding the cursor up
    /// to `align` when it exceeds [`HEAP_ALIGN`]. `align` must be a power of
    /// two.
    pub fn allocate_aligned(&mut self, size: usize, align: usize) -> Option<SegmentAddress> {
        if size == 0 || !align.is_power_of_two() {
            return None;
        }
        if self.mode == Mode::Unconfigured {
            self.apply_defaults();
        }
        let size = align_up(size as u64, HEAP_ALIGN)?;
        let align = align as u64;

        loop {
            if let Some(start) = self.fit(size, align) {
                self.cursor = start + size;
                return Some(SegmentAddress(start));
            }
            if !self.advance() {
                trace!("heap: exhausted, {} bytes requested\n", size);
                return None;
            }
        }
    }

    /// Memory is never reclaimed.
    pub fn free(&mut self, _addr: SegmentAddress) {}

    pub fn cursor(&self) -> SegmentAddress {
        SegmentAddress(self.cursor)
    }

    pub fn segment_end(&self) -> SegmentAddress {
        SegmentAddress(self.end)
    }

    /// Identifier of the active segment, 0 while unconfigured.
    pub fn current_segment(&self) -> u32 {
        SegmentAddress(self.base).segment()
    }

    /// Bytes left in the active segment.
    pub fn remaining(&self) -> u64 {
        self.end - self.cursor
    }

    pub fn is_configured(&self) -> bool {
        self.mode != Mode::Unconfigured
    }

    pub fn is_flat(&self) -> bool {
        self.mode == Mode::Flat
    }

    /// The segment layout in use, if any.
    pub fn config(&self) -> Option<HeapConfig> {
        match self.mode {
            Mode::Segments(config) => Some(config),
            _ => None,
        }
    }

    fn apply_defaults(&mut self) {
        // DEFAULT is checked by `validate` at compile time.
        let config = HeapConfig::DEFAULT;
        self.mode = Mode::Segments(config);
        self.enter_segment(&config, 0);
    }

    fn enter_segment(&mut self, config: &HeapConfig, index: u32) {
        let (base, end) = config.segment_bounds(index);
        self.index = index;
        self.base = base.raw();
        self.cursor = base.raw();
        self.end = end;
    }

    /// Start address for `size` bytes in the active segment, if they fit.
    fn fit(&self, size: u64, align: u64) -> Option<u64> {
        let start = if align > HEAP_ALIGN {
            align_up(self.cursor, align)?
        } else {
            self.cursor
        };
        let next = start.checked_add(size)?;
        (next <= self.end).then_some(start)
    }

    /// Move to the next configured segment. False when none is left.
    fn advance(&mut self) -> bool {
        let Mode::Segments(config) = self.mode else {
            return false;
        };
        if self.index + 1 >= config.segment_count {
            return false;
        }
        self.enter_segment(&config, self.index + 1);
        trace!(
            "heap: advanced to segment {} ({} of {})\n",
            self.current_segment(),
            self.index + 1,
            config.segment_count
        );
        true
    }
}

impl Default for SegmentedHeap {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
const fn align_up(value: u64, align: u64) -> Option<u64> {
    match value.checked_add(align - 1) {
        Some(v) => Some(v & !(align - 1)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_up_rounds_to_multiple() {
        assert_eq!(align_up(0, 8), Some(0));
        assert_eq!(align_up(1, 8), Some(8));
        assert_eq!(align_up(48, 8), Some(48));
        assert_eq!(align_up(0x1000_0001, 64), Some(0x1000_0040));
        assert_eq!(align_up(u64::MAX, 8), None);
    }

    #[test]
    fn unconfigured_heap_reports_nothing() {
        let heap = SegmentedHeap::new();
        assert!(!heap.is_configured());
        assert_eq!(heap.current_segment(), 0);
        assert_eq!(heap.remaining(), 0);
        assert!(heap.config().is_none());
    }
}
