use types::SegmentAddress;

/// Heap configuration failures. Running out of memory is not an error: it is
/// reported as a `None` allocation.
#[derive(onlyerror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// Segment start or segment count is zero.
    #[error("RAM heap not configured: segment start and count must be non-zero")]
    NotConfigured,
    #[error("RAM segment size must be non-zero")]
    ZeroSegmentSize,
    /// The first-segment offset leaves no room in the segment.
    #[error("heap offset {offset} exceeds RAM segment size {bytes}")]
    OffsetExceedsSegment { offset: u64, bytes: u64 },
    /// A segment cannot hold more than 2^28 addressable bytes.
    #[error("RAM segment size {bytes} exceeds the segment address span")]
    SegmentTooLarge { bytes: u64 },
    /// The segment range runs past the highest encodable segment id.
    #[error("{count} segments starting at segment {start} run past segment 15")]
    SegmentRangeOverflow { start: u32, count: u32 },
    /// An explicit heap base whose segment field is zero.
    #[error("heap base {base} is not a RAM segment address")]
    NotSegmentAddress { base: SegmentAddress },
    /// A flat region must end inside the segment its base names.
    #[error("flat heap of {size} bytes at {base} runs past the end of its segment")]
    FlatRegionOverflow { base: SegmentAddress, size: u64 },
}
