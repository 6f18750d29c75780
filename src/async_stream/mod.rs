//! Async adapters for ETag computation.
//!
//! This module exposes the engine over `futures-core::Stream` and
//! `futures-io::AsyncRead`/`AsyncWrite`, making it runtime-agnostic and
//! compatible with tokio, async-std, smol, and other async runtimes.
//!
//! - [`filter_async`] - Filter shape over a stream of buffers
//! - [`calculate_async`] - Pull an async reader to the end and return its ETag
//! - `AsyncWrite` for [`EtagSink`](crate::EtagSink) - Push-based sink
//!
//! This module requires the `async-io` feature to be enabled.

mod read;
mod stream;
mod write;

pub use read::{CalculateAsync, calculate_async};
pub use stream::{EtagFilterStream, filter_async};
