//! MD5-based part hashing.

use ::md5::{Digest, Md5};

use super::PartDigest;
use crate::part::PartHash;

/// A hasher that computes MD5 digests.
#[derive(Debug, Clone, Default)]
pub struct Md5Hasher {
    state: Md5,
}

impl Md5Hasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PartDigest for Md5Hasher {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.state, data);
    }

    fn finalize_reset(&mut self) -> PartHash {
        PartHash::new(Digest::finalize_reset(&mut self.state).into())
    }
}
