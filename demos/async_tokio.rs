//! Async ETag computation over tokio files.
//!
//! Several files are hashed concurrently; each gets its own independent
//! sink.
//!
//! Run with:
//!     cargo run --example async_tokio --features async-io -- <path>...

use etagrs::{MIB, PartHints, calculate_async};
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        return Err("usage: async_tokio <path>...".into());
    }

    println!("Hashing {} files concurrently...\n", paths.len());

    let handles: Vec<_> = paths
        .into_iter()
        .map(|path| {
            tokio::spawn(async move {
                let file = tokio::fs::File::open(&path).await?;
                let total = file.metadata().await?.len();
                let hints = PartHints::new().with_part_size(8 * MIB).with_total_size(total);
                let etag = calculate_async(file.compat(), hints).await?;
                Ok::<_, Box<dyn std::error::Error + Send + Sync>>((path, etag))
            })
        })
        .collect();

    for handle in handles {
        let (path, etag) = handle.await??;
        println!("{}  {}", etag, path);
    }

    Ok(())
}
