//! Part digest types.
//!
//! - [`PartHash`] - 16-byte digest of one part

mod hash;

pub use hash::PartHash;
