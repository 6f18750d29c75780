//! The final checksum value.
//!
//! - [`ETag`] - Object-storage ETag, combined from per-part digests

use std::fmt;

use tracing::debug;

use crate::hash::PartDigest;
use crate::part::PartHash;

/// An object-storage ETag.
///
/// Renders as 32 lowercase hex characters for a single-part object, or as
/// `<32 hex>-<part count>` for a multi-part object.
///
/// # Example
///
/// ```
/// use etagrs::{ETag, Md5Hasher, PartDigest};
///
/// let part = Md5Hasher::digest(b"hello");
/// let etag = ETag::combine::<Md5Hasher>(&[part]);
/// assert_eq!(etag.to_string(), "5d41402abc4b2a76b9719d911017c592");
/// assert!(!etag.is_multipart());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ETag {
    digest: PartHash,
    part_count: usize,
}

impl ETag {
    /// Combines per-part digests into the final ETag.
    ///
    /// One digest is used as-is. For several, the raw digests are
    /// concatenated in part order and digested again, and the part count
    /// becomes the suffix.
    ///
    /// # Panics
    ///
    /// Panics if `parts` is empty. [`PartHasher::finalize`](crate::PartHasher::finalize)
    /// always yields at least one digest.
    pub fn combine<D: PartDigest>(parts: &[PartHash]) -> Self {
        assert!(!parts.is_empty(), "cannot combine an empty list of part digests");

        let etag = if let [single] = parts {
            Self {
                digest: *single,
                part_count: 1,
            }
        } else {
            let mut combined = Vec::with_capacity(parts.len() * PartHash::SIZE);
            for part in parts {
                combined.extend_from_slice(part.as_bytes());
            }
            Self {
                digest: D::digest(&combined),
                part_count: parts.len(),
            }
        };

        debug!(%etag, "combined etag");
        etag
    }

    /// Returns the digest part of the ETag (without the count suffix).
    pub fn digest(&self) -> &PartHash {
        &self.digest
    }

    /// Returns the number of parts the ETag was combined from.
    pub fn part_count(&self) -> usize {
        self.part_count
    }

    /// Returns `true` if the ETag carries a part count suffix.
    pub fn is_multipart(&self) -> bool {
        self.part_count > 1
    }

    /// Returns the digest as a lowercase hex string, without the suffix.
    pub fn to_hex(&self) -> String {
        self.digest.to_hex()
    }
}

impl fmt::Display for ETag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digest)?;
        if self.is_multipart() {
            write!(f, "-{}", self.part_count)?;
        }
        Ok(())
    }
}

impl PartialEq<str> for ETag {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for ETag {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}
