//! Key-value storage for notebook state
//!
//! The notebook persists as two JSON blobs under fixed string keys, one per
//! collection. Stores move opaque strings; blob shape handling lives in the
//! decoding layer.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Result;

/// Storage key for the categories blob
pub const CATEGORIES_KEY: &str = "categories";

/// Storage key for the notes blob
pub const NOTES_KEY: &str = "notes";

/// String key-value storage
///
/// An absent key is not an error: `get` returns `Ok(None)` and the caller
/// falls back to its default state. Read and write failures surface as
/// errors rather than being swallowed.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
