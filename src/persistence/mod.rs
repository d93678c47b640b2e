//! Persistence: the key/value store boundary and snapshot history.
//!
//! - `KeyValueStore`: string store supplied by the environment
//! - `MemoryStore`: in-memory implementation for tests and embedding
//! - `Snapshot` / `SnapshotHistory`: what gets saved, and its FIFO bound

pub mod store;
pub mod snapshot;

pub use store::{KeyValueStore, MemoryStore};
pub use snapshot::{Snapshot, SnapshotHistory};
