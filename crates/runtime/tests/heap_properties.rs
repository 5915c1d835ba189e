use proptest::prelude::*;
use runtime::{HeapConfig, SegmentedHeap};

fn layout() -> impl Strategy<Value = HeapConfig> {
    (1u32..=8, 1u32..=4, 1u64..=64).prop_flat_map(|(start, count, words)| {
        let bytes = words * 8;
        (0..bytes).prop_map(move |offset| HeapConfig {
            segment_start: start,
            segment_count: count,
            first_segment_offset: offset,
            bytes_per_segment: bytes,
        })
    })
}

proptest! {
    #[test]
    fn allocations_never_overlap_and_stay_in_one_segment(
        config in layout(),
        sizes in proptest::collection::vec(0usize..200, 1..40),
    ) {
        let mut heap = SegmentedHeap::with_config(config).unwrap();
        let mut ranges: Vec<(u64, u64)> = Vec::new();
        for size in sizes {
            let Some(addr) = heap.allocate(size) else { continue };
            let rounded = (size as u64).div_ceil(8) * 8;
            let (start, end) = (addr.raw(), addr.raw() + rounded);

            let index = addr.segment() - config.segment_start;
            prop_assert!(index < config.segment_count);
            let (seg_base, seg_end) = config.segment_bounds(index);
            prop_assert!(start >= seg_base.raw() && end <= seg_end);

            for &(s, e) in &ranges {
                prop_assert!(end <= s || start >= e, "[{:#x},{:#x}) overlaps [{:#x},{:#x})", start, end, s, e);
            }
            ranges.push((start, end));
        }
    }

    #[test]
    fn cursor_never_moves_backwards(
        config in layout(),
        sizes in proptest::collection::vec(1usize..100, 1..40),
    ) {
        let mut heap = SegmentedHeap::with_config(config).unwrap();
        let mut last = heap.cursor().raw();
        let mut segment = heap.current_segment();
        for size in sizes {
            heap.allocate(size);
            prop_assert!(heap.current_segment() >= segment);
            if heap.current_segment() == segment {
                prop_assert!(heap.cursor().raw() >= last);
            }
            last = heap.cursor().raw();
            segment = heap.current_segment();
        }
    }

    /// Filling every segment exactly leaves nothing, for any request size.
    #[test]
    fn full_heap_stays_exhausted(
        start in 1u32..=8,
        count in 1u32..=4,
        words in 1u64..=16,
        later in proptest::collection::vec(1usize..64, 1..10),
    ) {
        let bytes = words * 8;
        let mut heap = SegmentedHeap::with_config(HeapConfig {
            segment_start: start,
            segment_count: count,
            first_segment_offset: 0,
            bytes_per_segment: bytes,
        })
        .unwrap();
        for _ in 0..count {
            prop_assert!(heap.allocate(bytes as usize).is_some());
        }
        for size in later {
            prop_assert_eq!(heap.allocate(size), None);
        }
    }
}
