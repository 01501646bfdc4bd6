//! Caching layer for normalized data.
//!
//! One Arrow IPC payload file per key plus a single JSON index recording the
//! expiry date of every key.

pub mod disk;

pub use disk::{CacheIndex, CacheStats, DiskCache, INDEX_FILE};
