//! Async pull adapter over a `futures_io::AsyncRead`.

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::config::PartHints;
use crate::error::EtagError;
use crate::etag::ETag;
use crate::hash::{Md5Hasher, PartDigest};
use crate::stream::EtagSink;

/// Read size used by [`calculate_async`].
const READ_BUFFER_SIZE: usize = 8 * 1024;

pin_project! {
    /// Future returned by [`calculate_async`].
    #[must_use = "futures do nothing unless polled"]
    pub struct CalculateAsync<R, D> {
        #[pin]
        reader: R,
        sink: EtagSink<D>,
        buffer: Vec<u8>,
    }
}

impl<R, D: PartDigest> CalculateAsync<R, D> {
    /// Creates the future around a preconfigured sink.
    pub fn with_sink(reader: R, sink: EtagSink<D>) -> Self {
        Self {
            reader,
            sink,
            buffer: vec![0u8; READ_BUFFER_SIZE],
        }
    }
}

impl<R: AsyncRead, D: PartDigest> Future for CalculateAsync<R, D> {
    type Output = Result<ETag, EtagError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            match this.reader.as_mut().poll_read(cx, &mut this.buffer[..]) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) if e.kind() == io::ErrorKind::Interrupted => continue,
                Poll::Ready(Err(e)) => return Poll::Ready(Err(EtagError::Io(e))),
                Poll::Ready(Ok(0)) => return Poll::Ready(Ok(this.sink.calculate())),
                Poll::Ready(Ok(n)) => this.sink.consume(&this.buffer[..n]),
            }
        }
    }
}

/// Reads an async reader to the end and resolves to its ETag.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O. For tokio
/// readers, use `tokio_util::compat`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use etagrs::{calculate_async, PartHints};
///
/// let file = tokio::fs::File::open("object.bin").await?;
/// let etag = calculate_async(file.compat(), PartHints::new().with_part_size(8 << 20).with_total_size(len)).await?;
/// ```
pub fn calculate_async<R: AsyncRead>(reader: R, hints: PartHints) -> CalculateAsync<R, Md5Hasher> {
    CalculateAsync::with_sink(reader, EtagSink::new(hints))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_calculate_empty_reader() {
        let reader: &[u8] = &[];
        let etag = calculate_async(reader, PartHints::new()).await.unwrap();
        assert_eq!(etag, "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[tokio::test]
    async fn test_calculate_multipart() {
        let data: Vec<u8> = (0..1000).map(|i| (i % 256) as u8).collect();
        let reader: &[u8] = &data;
        let etag = calculate_async(reader, PartHints::new().with_part_size(64).with_part_count(16))
            .await
            .unwrap();
        assert_eq!(etag, "7717772ff6c5a004a5b88e7501ffdd65-16");
    }
}
