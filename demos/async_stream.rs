//! Async filter example: a stream of buffers in, one ETag out.
//!
//! Run with:
//!     cargo run --example async_stream --features async-io

use bytes::Bytes;
use etagrs::{PartHints, filter_async};
use futures_util::{StreamExt, stream};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A transport delivering uneven buffers
    let buffers: Vec<Result<Bytes, std::io::Error>> = (0..100u32)
        .map(|i| Ok(Bytes::from(vec![i as u8; 1000 + (i as usize * 37) % 5000])))
        .collect();
    let total: usize = buffers
        .iter()
        .map(|b| b.as_ref().map_or(0, |b| b.len()))
        .sum();

    let mut filter = filter_async(stream::iter(buffers), PartHints::new());

    // Options may change until the first buffer is pulled
    let plan = filter.set_options(
        PartHints::new()
            .with_part_count(4)
            .with_total_size(total as u64),
    )?;
    println!("Plan: {:?}", plan);

    while let Some(out) = filter.next().await {
        let out = out?;
        println!("ETag: {}", String::from_utf8_lossy(&out));
    }

    Ok(())
}
