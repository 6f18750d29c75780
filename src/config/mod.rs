//! Configuration for part geometry.
//!
//! - [`PartHints`] - Optional size hints describing how the upload was split
//!
//! # Example
//!
//! ```
//! use etagrs::PartHints;
//!
//! // 8 MiB parts, total size known
//! let hints = PartHints::new()
//!     .with_part_size(8 * 1024 * 1024)
//!     .with_total_size(100 * 1024 * 1024);
//!
//! assert_eq!(hints.part_size(), Some(8 * 1024 * 1024));
//! assert_eq!(hints.part_count(), None);
//! ```

/// Size hints describing where the storage service's part boundaries fall.
///
/// All hints are optional and in bytes (except `part_count`). Any two of the
/// three are enough to derive a [`PartPlan`](crate::PartPlan); see
/// [`PartPlan::resolve`](crate::PartPlan::resolve) for the rules.
///
/// A hint of zero is treated the same as an absent hint.
///
/// With the `serde` feature the hints (de)serialize as an options object with
/// `partSize`, `partCount` and `totalSize` keys, all optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PartHints {
    /// Size of every part except possibly the last.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    part_size: Option<u64>,

    /// Number of parts in the upload.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    part_count: Option<u64>,

    /// Total size of the object.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    total_size: Option<u64>,
}

impl PartHints {
    /// Creates an empty set of hints (single-part mode).
    pub const fn new() -> Self {
        Self {
            part_size: None,
            part_count: None,
            total_size: None,
        }
    }

    /// Sets the part size in bytes.
    pub const fn with_part_size(mut self, size: u64) -> Self {
        self.part_size = Some(size);
        self
    }

    /// Sets the number of parts.
    pub const fn with_part_count(mut self, count: u64) -> Self {
        self.part_count = Some(count);
        self
    }

    /// Sets the total object size in bytes.
    pub const fn with_total_size(mut self, size: u64) -> Self {
        self.total_size = Some(size);
        self
    }

    /// Returns the part size hint, if set and non-zero.
    pub fn part_size(&self) -> Option<u64> {
        self.part_size.filter(|&v| v > 0)
    }

    /// Returns the part count hint, if set and non-zero.
    pub fn part_count(&self) -> Option<u64> {
        self.part_count.filter(|&v| v > 0)
    }

    /// Returns the total size hint, if set and non-zero.
    pub fn total_size(&self) -> Option<u64> {
        self.total_size.filter(|&v| v > 0)
    }

    /// Returns `true` if no usable hint is set.
    pub fn is_empty(&self) -> bool {
        self.part_size().is_none() && self.part_count().is_none() && self.total_size().is_none()
    }
}
