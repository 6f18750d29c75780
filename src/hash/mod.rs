//! Digest algorithm used for parts and for combining part digests.
//!
//! - [`PartDigest`] - The digest algorithm seam
//! - [`Md5Hasher`] - MD5, the algorithm behind object-storage ETags

mod md5;

pub use self::md5::Md5Hasher;

use crate::part::PartHash;

/// An incremental 128-bit digest.
///
/// The hasher and the combiner are generic over this trait so that the
/// algorithm can be swapped (for example with a stub in tests) without
/// touching the part-splitting loop. [`Md5Hasher`] is the only implementation
/// that reproduces real ETags.
pub trait PartDigest: Default {
    /// Feeds more bytes into the running digest.
    fn update(&mut self, data: &[u8]);

    /// Returns the digest of everything fed so far and resets to the
    /// initial state.
    fn finalize_reset(&mut self) -> PartHash;

    /// Convenience method to digest data in one shot.
    fn digest(data: &[u8]) -> PartHash {
        let mut state = Self::default();
        state.update(data);
        state.finalize_reset()
    }
}
