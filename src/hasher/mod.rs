//! Incremental, boundary-aware part hashing.
//!
//! - [`PartHasher`] - Stateful engine with `consume()`/`finalize()` API

mod engine;

pub use engine::PartHasher;
