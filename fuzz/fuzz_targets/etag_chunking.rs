#![no_main]

use etagrs::{EtagSink, PartHints, etag_of};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, u8, Vec<u8>)| {
    let (part_size, step, data) = input;
    let step = usize::from(step.max(1));

    let hints_list = [
        PartHints::new(),
        PartHints::new().with_part_size(u64::from(part_size.max(1))).with_part_count(1),
        PartHints::new().with_part_count(3).with_total_size(data.len() as u64),
    ];

    for hints in hints_list {
        let whole = etag_of(&data, hints);

        // Verify: chunking never changes the etag
        let mut sink = EtagSink::new(hints);
        for buf in data.chunks(step) {
            sink.consume(buf);
        }
        let chunked = sink.calculate();
        assert_eq!(whole, chunked);

        // Verify: calculate is idempotent
        assert_eq!(chunked, sink.calculate());

        // Verify: suffix present exactly when more than one part closed
        let text = chunked.to_string();
        assert_eq!(text.contains('-'), chunked.part_count() > 1);
        if let Some(plan) = sink.plan() {
            let expected = (data.len() as u64).div_ceil(plan.part_size()).max(1);
            assert_eq!(chunked.part_count() as u64, expected);
        }
    }
});
