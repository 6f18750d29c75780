//! Basic synchronous ETag example with the streaming sink API.
//!
//! Run with:
//!     cargo run --example sync_basic

use etagrs::{EtagSink, MIB, PartHints};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 20 MiB of sample data
    let data: Vec<u8> = (0..20 * MIB as usize).map(|i| (i % 251) as u8).collect();

    // Uploaded in 8 MiB parts
    let hints = PartHints::new()
        .with_part_size(8 * MIB)
        .with_total_size(data.len() as u64);
    let mut sink = EtagSink::new(hints);

    println!("Hashing {} bytes of data...\n", data.len());

    // Simulate a transport delivering 64 KB buffers
    let batch_size = 64 * 1024;
    for batch in data.chunks(batch_size) {
        let before = sink.parts_closed();
        sink.consume(batch);

        for (i, part) in sink.part_digests().iter().enumerate().skip(before) {
            println!("Part {}: md5={}", i + 1, part);
        }
    }

    let etag = sink.calculate();
    println!("Part {}: md5={}", etag.part_count(), sink.part_digests()[etag.part_count() - 1]);

    println!("\nETag: {}", etag);
    println!("Parts: {}, bytes: {}", etag.part_count(), sink.bytes_consumed());

    Ok(())
}
