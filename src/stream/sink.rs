//! Sink adapter - EtagSink with a configuration guard.
//!
//! # Example
//!
//! ```
//! use etagrs::{EtagSink, PartHints};
//!
//! let mut sink = EtagSink::new(PartHints::new().with_part_size(5).with_part_count(3));
//!
//! sink.consume(b"hello");
//! sink.consume(b" world");
//!
//! assert_eq!(sink.calculate().to_string(), "df349a9519959b17a605009540f4b31d-3");
//! ```

use std::io::{self, Read};

use tracing::debug;

use crate::config::PartHints;
use crate::error::EtagError;
use crate::etag::ETag;
use crate::hash::{Md5Hasher, PartDigest};
use crate::hasher::PartHasher;
use crate::part::PartHash;
use crate::plan::PartPlan;

/// Read size used by [`EtagSink::from_reader`].
const READ_BUFFER_SIZE: usize = 8 * 1024;

/// Lifecycle of a sink or filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamState {
    /// No data consumed yet; options may still change.
    Configurable,
    /// Data is flowing; options are locked.
    Processing,
    /// An ETag has been produced. `calculate()` stays callable.
    Finalized,
}

/// Computes the ETag of a stream that is pushed into it buffer by buffer.
///
/// The part plan may be changed with [`set_options`](Self::set_options)
/// until the first [`consume`](Self::consume) call. After that it is locked,
/// since part boundaries already crossed could not be moved.
///
/// `EtagSink` also implements [`std::io::Write`], so it can be the target of
/// [`std::io::copy`].
#[derive(Debug, Clone)]
pub struct EtagSink<D = Md5Hasher> {
    hasher: PartHasher<D>,
    state: StreamState,
}

impl EtagSink<Md5Hasher> {
    /// Creates a sink computing MD5-based ETags.
    pub fn new(hints: PartHints) -> Self {
        Self::with_digest(hints, Md5Hasher::new())
    }

    /// Reads `reader` to the end and returns its ETag.
    ///
    /// # Example
    ///
    /// ```
    /// use etagrs::{EtagSink, PartHints};
    /// use std::io::Cursor;
    ///
    /// let etag = EtagSink::from_reader(Cursor::new(b"hello"), PartHints::new())?;
    /// assert_eq!(etag.to_string(), "5d41402abc4b2a76b9719d911017c592");
    /// # Ok::<(), etagrs::EtagError>(())
    /// ```
    pub fn from_reader<R: Read>(mut reader: R, hints: PartHints) -> Result<ETag, EtagError> {
        let mut sink = Self::new(hints);
        let mut buf = vec![0u8; READ_BUFFER_SIZE];
        loop {
            match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => sink.consume(&buf[..n]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(sink.calculate())
    }
}

impl<D: PartDigest> EtagSink<D> {
    /// Creates a sink using an explicit digest context.
    pub fn with_digest(hints: PartHints, digest: D) -> Self {
        Self {
            hasher: PartHasher::with_digest(PartPlan::resolve(&hints), digest),
            state: StreamState::Configurable,
        }
    }

    /// Replaces the part plan with one resolved from `hints`.
    ///
    /// Returns the new plan (`None` = single part).
    ///
    /// # Errors
    ///
    /// Returns [`EtagError::ConfigurationLocked`] once any data has been
    /// consumed or an ETag has been calculated. The current plan is kept.
    ///
    /// Locking after `calculate()` applies even when no data was consumed:
    /// the empty trailing part has already been closed under the old plan,
    /// so a new plan could not be applied consistently. This is stricter
    /// than locking on the first buffer alone.
    pub fn set_options(&mut self, hints: PartHints) -> Result<Option<PartPlan>, EtagError> {
        if self.state != StreamState::Configurable {
            debug!(state = ?self.state, "rejected late set_options");
            return Err(EtagError::ConfigurationLocked);
        }
        let plan = PartPlan::resolve(&hints);
        self.hasher.set_plan(plan);
        Ok(plan)
    }

    /// Feeds the next buffer of the stream.
    pub fn consume(&mut self, data: impl AsRef<[u8]>) {
        if self.state == StreamState::Configurable {
            self.state = StreamState::Processing;
        }
        self.hasher.consume(data.as_ref());
    }

    /// Closes the trailing part and returns the ETag.
    ///
    /// Call once the input has ended. Repeated calls without more data in
    /// between return the same ETag.
    pub fn calculate(&mut self) -> ETag {
        let etag = ETag::combine::<D>(self.hasher.finalize());
        self.state = StreamState::Finalized;
        etag
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Returns the active part plan.
    pub fn plan(&self) -> Option<PartPlan> {
        self.hasher.plan()
    }

    /// Returns the digests of parts closed so far.
    pub fn part_digests(&self) -> &[PartHash] {
        self.hasher.parts()
    }

    /// Returns the number of parts closed so far.
    pub fn parts_closed(&self) -> usize {
        self.hasher.parts().len()
    }

    /// Returns the total number of bytes consumed.
    pub fn bytes_consumed(&self) -> u64 {
        self.hasher.bytes_consumed()
    }
}

impl<D: PartDigest> Default for EtagSink<D> {
    fn default() -> Self {
        Self::with_digest(PartHints::default(), D::default())
    }
}

impl<D: PartDigest> io::Write for EtagSink<D> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.consume(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Computes the ETag of in-memory data in one shot.
///
/// # Example
///
/// ```
/// use etagrs::{etag_of, PartHints};
///
/// let etag = etag_of(b"hello", PartHints::new().with_part_size(3).with_total_size(5));
/// assert_eq!(etag.to_string(), "554a2f6105cc700b8cc987b5ddfb8102-2");
/// ```
pub fn etag_of(data: impl AsRef<[u8]>, hints: PartHints) -> ETag {
    let mut sink = EtagSink::new(hints);
    sink.consume(data);
    sink.calculate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_state_transitions() {
        let mut sink = EtagSink::new(PartHints::new());
        assert_eq!(sink.state(), StreamState::Configurable);

        sink.consume(b"x");
        assert_eq!(sink.state(), StreamState::Processing);

        let _ = sink.calculate();
        assert_eq!(sink.state(), StreamState::Finalized);

        // Late data does not leave the finalized state
        sink.consume(b"y");
        assert_eq!(sink.state(), StreamState::Finalized);
    }

    #[test]
    fn test_set_options_before_data() {
        let mut sink = EtagSink::new(PartHints::new());
        assert_eq!(sink.plan(), None);

        let plan = sink
            .set_options(PartHints::new().with_part_size(3).with_part_count(2))
            .unwrap();
        assert_eq!(plan, PartPlan::new(3, 2));
        assert_eq!(sink.plan(), plan);

        // Replanning is allowed as often as needed before data flows
        assert_eq!(sink.set_options(PartHints::new()).unwrap(), None);
        assert_eq!(sink.plan(), None);
    }

    #[test]
    fn test_set_options_locked_by_empty_buffer() {
        let mut sink = EtagSink::new(PartHints::new());
        sink.consume(b"");
        let err = sink
            .set_options(PartHints::new().with_part_size(3).with_part_count(2))
            .unwrap_err();
        assert!(matches!(err, EtagError::ConfigurationLocked));
        assert_eq!(sink.plan(), None);
    }

    #[test]
    fn test_set_options_locked_after_calculate() {
        let mut sink = EtagSink::new(PartHints::new());
        let _ = sink.calculate();
        assert_eq!(sink.bytes_consumed(), 0);
        assert!(matches!(
            sink.set_options(PartHints::new()),
            Err(EtagError::ConfigurationLocked)
        ));
    }

    #[test]
    fn test_write_impl() {
        let mut sink = EtagSink::new(PartHints::new());
        let mut reader = Cursor::new(b"hello world".to_vec());
        std::io::copy(&mut reader, &mut sink).unwrap();
        sink.flush().unwrap();
        assert_eq!(sink.calculate(), "5eb63bbbe01eeed093cb22bb8f5acdc3");
    }

    #[test]
    fn test_from_reader_multipart() {
        let etag = EtagSink::from_reader(
            Cursor::new(b"hello world"),
            PartHints::new().with_part_size(5).with_total_size(11),
        )
        .unwrap();
        assert_eq!(etag, "df349a9519959b17a605009540f4b31d-3");
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("boom"))
        }
    }

    #[test]
    fn test_from_reader_propagates_io_error() {
        let err = EtagSink::from_reader(FailingReader, PartHints::new()).unwrap_err();
        assert!(matches!(err, EtagError::Io(_)));
    }

    #[test]
    fn test_counters() {
        let mut sink = EtagSink::new(PartHints::new().with_part_size(4).with_part_count(3));
        sink.consume(b"0123456789");
        assert_eq!(sink.bytes_consumed(), 10);
        assert_eq!(sink.parts_closed(), 2);
        assert_eq!(sink.part_digests().len(), 2);

        let etag = sink.calculate();
        assert_eq!(sink.parts_closed(), 3);
        assert_eq!(etag.part_count(), 3);
    }
}
