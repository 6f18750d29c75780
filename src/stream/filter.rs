//! Filter adapter - EtagFilter over an iterator of buffers.
//!
//! The filter forwards none of its input. Once the upstream iterator is
//! exhausted it yields exactly one item: the ETag text.
//!
//! # Example
//!
//! ```
//! use etagrs::{EtagFilter, PartHints};
//!
//! let upstream = vec![&b"hel"[..], &b"lo"[..]];
//! let out: Vec<_> = EtagFilter::new(upstream.into_iter(), PartHints::new()).collect();
//!
//! assert_eq!(out.len(), 1);
//! assert_eq!(&out[0][..], b"5d41402abc4b2a76b9719d911017c592");
//! ```

use std::iter::FusedIterator;

use bytes::Bytes;

use super::sink::{EtagSink, StreamState};
use crate::config::PartHints;
use crate::error::EtagError;
use crate::hash::{Md5Hasher, PartDigest};
use crate::plan::PartPlan;

/// An iterator that replaces its upstream buffers with their ETag.
#[derive(Debug)]
pub struct EtagFilter<I, D = Md5Hasher> {
    upstream: I,
    sink: EtagSink<D>,
    done: bool,
}

impl<I> EtagFilter<I, Md5Hasher> {
    /// Creates a filter computing MD5-based ETags.
    pub fn new(upstream: I, hints: PartHints) -> Self {
        Self::with_sink(upstream, EtagSink::new(hints))
    }
}

impl<I, D: PartDigest> EtagFilter<I, D> {
    /// Creates a filter around a preconfigured sink.
    pub fn with_sink(upstream: I, sink: EtagSink<D>) -> Self {
        Self {
            upstream,
            sink,
            done: false,
        }
    }

    /// Replaces the part plan. Only allowed before the first item is pulled.
    pub fn set_options(&mut self, hints: PartHints) -> Result<Option<PartPlan>, EtagError> {
        self.sink.set_options(hints)
    }

    /// Returns the lifecycle state of the underlying sink.
    pub fn state(&self) -> StreamState {
        self.sink.state()
    }

    /// Returns the underlying sink.
    pub fn sink(&self) -> &EtagSink<D> {
        &self.sink
    }
}

impl<I, D> Iterator for EtagFilter<I, D>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
    D: PartDigest,
{
    type Item = Bytes;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for buf in self.upstream.by_ref() {
            self.sink.consume(buf);
        }

        self.done = true;
        Some(Bytes::from(self.sink.calculate().to_string()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done { (0, Some(0)) } else { (1, Some(1)) }
    }
}

impl<I, D> FusedIterator for EtagFilter<I, D>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
    D: PartDigest,
{
}
