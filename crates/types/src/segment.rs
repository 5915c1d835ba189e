use core::fmt;

/// Bit position of the segment identifier inside a segment address.
pub const SEGMENT_SHIFT: u32 = 28;
/// Low bits holding the byte offset within a segment.
pub const OFFSET_MASK: u64 = 0x0FFF_FFFF;
/// Segment identifiers occupy four bits above the offset.
pub const SEGMENT_ID_MASK: u64 = 0xF;
/// Highest encodable segment identifier. Identifier 0 is reserved.
pub const MAX_SEGMENT_ID: u32 = 15;
/// Number of bytes addressable inside one segment (256 MiB).
pub const SEGMENT_SPAN: u64 = 1 << SEGMENT_SHIFT;

/// A guest virtual address in the segmented address space.
///
/// The identifier of the backing memory segment lives in bits 28..32 and the
/// byte offset inside that segment in bits 0..28:
///
/// ```text
/// address = (segment_id << 28) | (offset & 0x0FFF_FFFF)
/// ```
///
/// Segment 0 is reserved, so any address whose segment field decodes to 0 is
/// not a segment address (the null address included).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SegmentAddress(pub u64);

impl SegmentAddress {
    /// Encode `segment`/`offset` without range checks. The offset is masked to
    /// 28 bits, matching what the host does with the same pair.
    pub const fn encode(segment: u32, offset: u64) -> Self {
        Self(((segment as u64) << SEGMENT_SHIFT) | (offset & OFFSET_MASK))
    }

    /// Checked variant of [`SegmentAddress::encode`].
    pub const fn new(segment: u32, offset: u64) -> Option<Self> {
        if segment > MAX_SEGMENT_ID || offset >= SEGMENT_SPAN {
            return None;
        }
        Some(Self::encode(segment, offset))
    }

    pub const fn null() -> Self {
        Self(0)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    pub const fn segment(self) -> u32 {
        ((self.0 >> SEGMENT_SHIFT) & SEGMENT_ID_MASK) as u32
    }

    pub const fn offset(self) -> u64 {
        self.0 & OFFSET_MASK
    }

    /// True when the segment field is non-zero.
    pub const fn is_segment_address(raw: u64) -> bool {
        (raw >> SEGMENT_SHIFT) & SEGMENT_ID_MASK != 0
    }

    pub const fn checked_add(self, bytes: u64) -> Option<Self> {
        match self.0.checked_add(bytes) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    pub fn from_ptr<T>(ptr: *const T) -> Self {
        Self(ptr as usize as u64)
    }

    pub fn as_ptr<T>(self) -> *const T {
        self.0 as usize as *const T
    }

    pub fn as_mut_ptr<T>(self) -> *mut T {
        self.0 as usize as *mut T
    }
}

impl From<SegmentAddress> for u64 {
    fn from(addr: SegmentAddress) -> u64 {
        addr.0
    }
}

impl fmt::Debug for SegmentAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:#09x}", self.segment(), self.offset())
    }
}

impl fmt::Display for SegmentAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
