//! Core hashing engine - PartHasher with streaming API.
//!
//! The engine re-segments an arbitrarily chunked byte stream at part
//! boundaries and digests each part exactly once:
//!
//! - [`PartHasher`] - Stateful engine that processes streaming bytes
//! - `consume()` - Feed data in any size (1 byte, 8KB, 1GB, etc.)
//! - `finalize()` - Close the trailing part and return all part digests
//!
//! # Example
//!
//! ```
//! use etagrs::{PartHasher, PartPlan};
//!
//! let mut hasher: PartHasher = PartHasher::new(PartPlan::new(4, 3));
//!
//! hasher.consume(b"hel");
//! hasher.consume(b"lo wor"); // closes the first part, then the second
//! hasher.consume(b"ld");
//!
//! // "hell", "o wo", "rld"
//! assert_eq!(hasher.finalize().len(), 3);
//! ```

use tracing::{debug, trace};

use crate::hash::{Md5Hasher, PartDigest};
use crate::part::PartHash;
use crate::plan::PartPlan;

/// Splits a byte stream into parts and digests each part.
///
/// `PartHasher` owns one live digest context at a time. Bytes go into it
/// until the current part reaches the plan's part size, at which point the
/// digest is finalized, appended to the list of part digests, and a fresh
/// context starts the next part. Without a plan the whole input is one part.
///
/// # Determinism
///
/// Part digests depend only on the concatenated input, never on how it was
/// split into `consume()` calls. A single call may close any number of parts.
///
/// # Invariants
///
/// - `current_part_len() < part_size` between calls: a part that becomes
///   full is closed before `consume()` returns.
/// - Part digests are append-only, in part order.
#[derive(Debug, Clone)]
pub struct PartHasher<D = Md5Hasher> {
    digest: D,
    plan: Option<PartPlan>,
    current_len: u64,
    total_len: u64,
    parts: Vec<PartHash>,
    begun: bool,
}

impl<D: PartDigest> PartHasher<D> {
    /// Creates a hasher for the given plan (`None` = single part).
    pub fn new(plan: Option<PartPlan>) -> Self {
        Self::with_digest(plan, D::default())
    }

    /// Creates a hasher using an explicit digest context.
    ///
    /// The context must be in its initial state.
    pub fn with_digest(plan: Option<PartPlan>, digest: D) -> Self {
        Self {
            digest,
            plan,
            current_len: 0,
            total_len: 0,
            parts: Vec::new(),
            begun: false,
        }
    }

    /// Feeds the next buffer of the stream.
    ///
    /// Buffers must arrive in stream order. An empty buffer still marks the
    /// hasher as having begun.
    pub fn consume(&mut self, data: &[u8]) {
        self.begun = true;
        self.total_len += data.len() as u64;
        trace!(len = data.len(), total = self.total_len, "consume");

        let mut buf = data;
        while !buf.is_empty() {
            let Some(plan) = self.plan else {
                self.feed(buf);
                break;
            };

            let remaining = plan.part_size() - self.current_len;
            if (buf.len() as u64) < remaining {
                self.feed(buf);
                break;
            }

            // `remaining` <= buf.len() here, so it fits in usize
            let (head, tail) = buf.split_at(remaining as usize);
            self.feed(head);
            self.close_part();
            buf = tail;
        }
    }

    /// Closes the trailing part and returns every part digest.
    ///
    /// The trailing part is closed if it holds any bytes, or if no part has
    /// been closed yet (so empty input yields the digest of zero bytes).
    /// Calling this again without consuming more data returns the same
    /// digests unchanged.
    pub fn finalize(&mut self) -> &[PartHash] {
        if self.current_len > 0 || self.parts.is_empty() {
            self.close_part();
        }
        &self.parts
    }

    /// Returns the digests of all parts closed so far.
    pub fn parts(&self) -> &[PartHash] {
        &self.parts
    }

    /// Returns the plan this hasher splits on.
    pub fn plan(&self) -> Option<PartPlan> {
        self.plan
    }

    /// Returns `true` once `consume()` has been called.
    pub fn has_begun(&self) -> bool {
        self.begun
    }

    /// Returns the number of bytes in the currently open part.
    pub fn current_part_len(&self) -> u64 {
        self.current_len
    }

    /// Returns the total number of bytes consumed.
    pub fn bytes_consumed(&self) -> u64 {
        self.total_len
    }

    /// Replaces the plan. Callers are responsible for only doing this
    /// before the first `consume()`.
    pub(crate) fn set_plan(&mut self, plan: Option<PartPlan>) {
        debug_assert!(!self.begun);
        self.plan = plan;
    }

    fn feed(&mut self, data: &[u8]) {
        self.digest.update(data);
        self.current_len += data.len() as u64;
    }

    fn close_part(&mut self) {
        let hash = self.digest.finalize_reset();
        debug!(
            part = self.parts.len() + 1,
            size = self.current_len,
            %hash,
            "closed part"
        );
        self.parts.push(hash);
        self.current_len = 0;
    }
}

impl<D: PartDigest> Default for PartHasher<D> {
    fn default() -> Self {
        Self::new(None)
    }
}
