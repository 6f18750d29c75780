//! Part plan resolution.
//!
//! Turns [`PartHints`] into a concrete [`PartPlan`], or `None` when the hints
//! do not pin down the part geometry (the whole input is then one part).

use tracing::debug;

use crate::config::PartHints;

/// One mebibyte. Derived part sizes are rounded up to a multiple of this.
pub const MIB: u64 = 1024 * 1024;

/// Resolved part geometry.
///
/// `part_size` is always non-zero. `part_count` is informational: hashing
/// splits on `part_size` only and never stops after `part_count` parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartPlan {
    part_size: u64,
    part_count: u64,
}

impl PartPlan {
    /// Creates a plan from an explicit part size and count.
    ///
    /// Returns `None` if either value is zero.
    pub fn new(part_size: u64, part_count: u64) -> Option<Self> {
        if part_size == 0 || part_count == 0 {
            return None;
        }
        Some(Self {
            part_size,
            part_count,
        })
    }

    /// Resolves size hints into a plan.
    ///
    /// Exactly one of three hint combinations yields a plan, checked in this
    /// order (first match wins):
    ///
    /// 1. `part_size` + `part_count`: used verbatim.
    /// 2. `part_size` + `total_size`: `part_count = ceil(total_size / part_size)`.
    /// 3. `part_count` + `total_size`: `part_size` is `total_size / part_count`
    ///    rounded up to a whole number of mebibytes.
    ///
    /// When all three hints are set, rule 1 wins and `total_size` is ignored,
    /// even if it contradicts the other two. Any other combination returns
    /// `None`, as does rule 3 when the rounded part size does not fit in a
    /// `u64`.
    ///
    /// # Example
    ///
    /// ```
    /// use etagrs::{PartHints, PartPlan};
    ///
    /// let plan = PartPlan::resolve(&PartHints::new().with_part_count(3).with_total_size(5_000_000))
    ///     .unwrap();
    /// assert_eq!(plan.part_size(), 2 * 1024 * 1024);
    /// assert_eq!(plan.part_count(), 3);
    ///
    /// assert!(PartPlan::resolve(&PartHints::new().with_part_size(1024)).is_none());
    /// ```
    pub fn resolve(hints: &PartHints) -> Option<Self> {
        let plan = match (hints.part_size(), hints.part_count(), hints.total_size()) {
            (Some(part_size), Some(part_count), _) => Self {
                part_size,
                part_count,
            },
            (Some(part_size), None, Some(total_size)) => Self {
                part_size,
                part_count: total_size.div_ceil(part_size),
            },
            (None, Some(part_count), Some(total_size)) => {
                let Some(part_size) = total_size.div_ceil(part_count).div_ceil(MIB).checked_mul(MIB)
                else {
                    debug!(?hints, "derived part size overflows, hashing as a single part");
                    return None;
                };
                Self {
                    part_size,
                    part_count,
                }
            }
            _ => {
                debug!(?hints, "no part plan, hashing as a single part");
                return None;
            }
        };

        debug!(
            part_size = plan.part_size,
            part_count = plan.part_count,
            "resolved part plan"
        );
        Some(plan)
    }

    /// Returns the part size in bytes.
    pub fn part_size(&self) -> u64 {
        self.part_size
    }

    /// Returns the expected number of parts.
    pub fn part_count(&self) -> u64 {
        self.part_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_and_count_verbatim() {
        let plan = PartPlan::resolve(&PartHints::new().with_part_size(1000).with_part_count(7));
        assert_eq!(plan, PartPlan::new(1000, 7));
    }

    #[test]
    fn test_size_and_total_derives_count() {
        let plan =
            PartPlan::resolve(&PartHints::new().with_part_size(1000).with_total_size(2500)).unwrap();
        assert_eq!(plan.part_size(), 1000);
        assert_eq!(plan.part_count(), 3);

        let exact =
            PartPlan::resolve(&PartHints::new().with_part_size(1000).with_total_size(3000)).unwrap();
        assert_eq!(exact.part_count(), 3);
    }

    #[test]
    fn test_count_and_total_rounds_to_mib() {
        let plan = PartPlan::resolve(
            &PartHints::new()
                .with_part_count(4)
                .with_total_size(10 * MIB + 1),
        )
        .unwrap();
        // 10 MiB + 1 over 4 parts is just over 2.5 MiB
        assert_eq!(plan.part_size(), 3 * MIB);
        assert_eq!(plan.part_count(), 4);
    }

    #[test]
    fn test_count_and_total_exact_mib() {
        let plan =
            PartPlan::resolve(&PartHints::new().with_part_count(2).with_total_size(16 * MIB))
                .unwrap();
        assert_eq!(plan.part_size(), 8 * MIB);
    }

    #[test]
    fn test_count_and_total_tiny_object() {
        let plan =
            PartPlan::resolve(&PartHints::new().with_part_count(1).with_total_size(1)).unwrap();
        assert_eq!(plan.part_size(), MIB);
    }

    #[test]
    fn test_count_and_total_overflow_yields_no_plan() {
        let hints = PartHints::new().with_part_count(1).with_total_size(u64::MAX);
        assert!(PartPlan::resolve(&hints).is_none());

        // Largest total whose rounded part size still fits
        let max_mib = u64::MAX / MIB * MIB;
        let plan =
            PartPlan::resolve(&PartHints::new().with_part_count(1).with_total_size(max_mib)).unwrap();
        assert_eq!(plan.part_size(), max_mib);
    }

    #[test]
    fn test_all_three_prefers_size_and_count() {
        let plan = PartPlan::resolve(
            &PartHints::new()
                .with_part_size(100)
                .with_part_count(2)
                .with_total_size(10_000),
        )
        .unwrap();
        assert_eq!(plan.part_size(), 100);
        assert_eq!(plan.part_count(), 2);
    }

    #[test]
    fn test_insufficient_hints() {
        assert!(PartPlan::resolve(&PartHints::new()).is_none());
        assert!(PartPlan::resolve(&PartHints::new().with_part_size(10)).is_none());
        assert!(PartPlan::resolve(&PartHints::new().with_part_count(10)).is_none());
        assert!(PartPlan::resolve(&PartHints::new().with_total_size(10)).is_none());
    }

    #[test]
    fn test_zero_hints_ignored() {
        let hints = PartHints::new().with_part_size(0).with_part_count(3);
        assert!(PartPlan::resolve(&hints).is_none());
    }

    #[test]
    fn test_new_rejects_zero() {
        assert!(PartPlan::new(0, 1).is_none());
        assert!(PartPlan::new(1, 0).is_none());
    }
}
