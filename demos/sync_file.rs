//! Computes the ETag of a file.
//!
//! Run with:
//!     cargo run --example sync_file -- <path> [part-size-mib]

use std::env;
use std::fs::File;
use std::io::BufReader;

use etagrs::{EtagSink, MIB, PartHints};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let path = args.next().ok_or("usage: sync_file <path> [part-size-mib]")?;
    let part_size_mib: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(8);

    let file = File::open(&path)?;
    let total = file.metadata()?.len();
    let hints = PartHints::new()
        .with_part_size(part_size_mib * MIB)
        .with_total_size(total);

    let etag = EtagSink::from_reader(BufReader::new(file), hints)?;

    println!("{}  {}", etag, path);
    Ok(())
}
