//! Durable key-value storage for the session record.
//!
//! The session store only ever needs three primitives: read a value, write a
//! value, and erase a value, each addressed by a string key. Two backends
//! are provided:
//!
//! - [`MemoryStorage`]: process-local map, used by tests and by hosts that
//!   do not want anything written to disk.
//! - [`FileStorage`]: one JSON file per key inside a data directory.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::Result;

/// Backend for persisted session state.
///
/// Implementations must make `set` and `remove` all-or-nothing: after an
/// error the previously stored value (or its absence) is still observable.
pub trait SessionStorage: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Erase `key`. Erasing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
