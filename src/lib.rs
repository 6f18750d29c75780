//! etagrs
//!
//! Streaming computation of object-storage ETags for Rust.
//!
//! `etagrs` computes, incrementally and without buffering the payload, the
//! content checksum an object-storage service assigns to an uploaded object.
//! Both single-part and multi-part uploads are supported:
//!
//! - single part: the MD5 of the object, as 32 lowercase hex characters
//! - multi-part: the MD5 of the concatenated per-part MD5s, followed by
//!   `-<part count>`
//!
//! Input may arrive in any chunking; chunk boundaries need not line up with
//! part boundaries. Part boundaries come from [`PartHints`], any two of part
//! size, part count and total size.
//!
//! The crate intentionally:
//! - does NOT perform network I/O
//! - does NOT fetch object metadata
//! - does NOT manage concurrency
//!
//! It only does one thing: **bytes in → ETag out**
//!
//! # Sink
//!
//! ```no_run
//! use std::fs::File;
//! use etagrs::{EtagSink, EtagError, PartHints};
//!
//! fn main() -> Result<(), EtagError> {
//!     let file = File::open("object.bin")?;
//!     let len = file.metadata()?.len();
//!     let hints = PartHints::new()
//!         .with_part_size(8 * 1024 * 1024)
//!         .with_total_size(len);
//!
//!     let etag = EtagSink::from_reader(file, hints)?;
//!     println!("etag {}", etag);
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use etagrs::{calculate_async, PartHints};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead>(reader: R) -> Result<(), etagrs::EtagError> {
//!     let etag = calculate_async(reader, PartHints::new()).await?;
//!     println!("etag {}", etag);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod etag;
mod hash;
mod hasher;
mod part;
mod plan;
mod stream;

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface
//

pub use config::PartHints;
pub use error::EtagError;
pub use etag::ETag;
pub use hash::{Md5Hasher, PartDigest};
pub use hasher::PartHasher;
pub use part::PartHash;
pub use plan::{MIB, PartPlan};
pub use stream::{EtagFilter, EtagSink, StreamState, etag_of};

#[cfg(feature = "async-io")]
pub use async_stream::{CalculateAsync, EtagFilterStream, calculate_async, filter_async};
