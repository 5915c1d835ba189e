#![cfg_attr(not(test), no_std)]

pub mod segment;
pub use segment::{
    SegmentAddress, MAX_SEGMENT_ID, OFFSET_MASK, SEGMENT_ID_MASK, SEGMENT_SHIFT, SEGMENT_SPAN,
};

pub mod host;
