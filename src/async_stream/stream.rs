//! Async filter adapter over a stream of buffers.
//!
//! # Example
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use etagrs::{filter_async, PartHints};
//!
//! async fn demo<S>(upstream: S) -> Result<(), std::io::Error>
//! where
//!     S: futures_core::Stream<Item = Result<bytes::Bytes, std::io::Error>>,
//! {
//!     let mut out = Box::pin(filter_async(upstream, PartHints::new()));
//!     while let Some(etag) = out.next().await {
//!         println!("etag {:?}", etag?);
//!     }
//!     Ok(())
//! }
//! ```

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures_core::Stream;
use futures_core::stream::FusedStream;
use pin_project_lite::pin_project;

use crate::config::PartHints;
use crate::error::EtagError;
use crate::hash::{Md5Hasher, PartDigest};
use crate::plan::PartPlan;
use crate::stream::{EtagSink, StreamState};

pin_project! {
    /// A stream that swallows its upstream buffers and yields their ETag.
    ///
    /// Upstream errors are forwarded as-is and end the stream without an
    /// ETag. When the upstream ends cleanly, exactly one item is yielded:
    /// the ETag text.
    pub struct EtagFilterStream<S, D> {
        #[pin]
        upstream: S,
        sink: EtagSink<D>,
        done: bool,
    }
}

impl<S, D: PartDigest> EtagFilterStream<S, D> {
    /// Creates a filter stream around a preconfigured sink.
    pub fn with_sink(upstream: S, sink: EtagSink<D>) -> Self {
        Self {
            upstream,
            sink,
            done: false,
        }
    }

    /// Replaces the part plan. Only allowed before the first buffer arrives.
    pub fn set_options(&mut self, hints: PartHints) -> Result<Option<PartPlan>, EtagError> {
        self.sink.set_options(hints)
    }

    /// Returns the lifecycle state of the underlying sink.
    pub fn state(&self) -> StreamState {
        self.sink.state()
    }
}

impl<S, B, E, D> Stream for EtagFilterStream<S, D>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    D: PartDigest,
{
    type Item = Result<Bytes, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        loop {
            match this.upstream.as_mut().poll_next(cx) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Some(Ok(buf))) => this.sink.consume(buf),
                Poll::Ready(Some(Err(e))) => {
                    *this.done = true;
                    return Poll::Ready(Some(Err(e)));
                }
                Poll::Ready(None) => {
                    *this.done = true;
                    let etag = this.sink.calculate();
                    return Poll::Ready(Some(Ok(Bytes::from(etag.to_string()))));
                }
            }
        }
    }
}

impl<S, B, E, D> FusedStream for EtagFilterStream<S, D>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    D: PartDigest,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

/// Wraps a stream of buffers so that it yields their ETag instead.
///
/// # Arguments
///
/// * `upstream` - A stream of `Result<B, E>` where `B: AsRef<[u8]>`
/// * `hints` - Part size hints for multi-part ETags
pub fn filter_async<S>(upstream: S, hints: PartHints) -> EtagFilterStream<S, Md5Hasher> {
    EtagFilterStream::with_sink(upstream, EtagSink::new(hints))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use futures_util::stream;

    #[tokio::test]
    async fn test_filter_emits_single_etag() {
        let upstream = stream::iter(vec![
            Ok::<_, std::io::Error>(Bytes::from_static(b"hello")),
            Ok(Bytes::from_static(b" world")),
        ]);
        let out: Vec<_> = filter_async(upstream, PartHints::new().with_part_size(5).with_total_size(11))
            .collect()
            .await;

        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].as_ref().unwrap(),
            &Bytes::from_static(b"df349a9519959b17a605009540f4b31d-3")
        );
    }

    #[tokio::test]
    async fn test_filter_empty_upstream() {
        let upstream = stream::iter(Vec::<Result<Vec<u8>, std::io::Error>>::new());
        let out: Vec<_> = filter_async(upstream, PartHints::new()).collect().await;
        assert_eq!(out.len(), 1);
        assert_eq!(
            &out[0].as_ref().unwrap()[..],
            b"d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[tokio::test]
    async fn test_filter_forwards_error_and_stops() {
        let upstream = stream::iter(vec![
            Ok(Bytes::from_static(b"partial")),
            Err("aborted"),
            Ok(Bytes::from_static(b"never")),
        ]);
        let mut filter = filter_async(upstream, PartHints::new());

        assert_eq!(filter.next().await, Some(Err("aborted")));
        assert!(filter.is_terminated());
        assert_eq!(filter.next().await, None);
    }

    #[tokio::test]
    async fn test_set_options_locked_after_first_buffer() {
        let upstream = stream::iter(vec![Ok::<_, std::io::Error>(vec![0u8; 4])]);
        let mut filter = filter_async(upstream, PartHints::new());
        assert!(filter.set_options(PartHints::new().with_part_size(2).with_part_count(2)).is_ok());

        let out: Vec<_> = (&mut filter).collect().await;
        assert_eq!(out.len(), 1);
        assert_eq!(filter.state(), StreamState::Finalized);
        assert!(filter.set_options(PartHints::new()).is_err());
    }
}
