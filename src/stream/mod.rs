//! Adapters that expose the hashing engine to a byte transport.
//!
//! - [`EtagSink`] - Sink shape: feed buffers, then pull the ETag
//! - [`EtagFilter`] - Filter shape: swallow the input, emit the ETag once
//! - [`etag_of`] - One-shot helper for in-memory data

mod filter;
mod sink;

pub use filter::EtagFilter;
pub use sink::{EtagSink, StreamState, etag_of};
