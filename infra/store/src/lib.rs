//! Persistence for ordered configuration entries.
//!
//! The core hands an ordered array of entries to an [`EntryStore`] and gets the
//! same array back on load. The entry type is whatever the host persists
//! (usually a tagged union of service records and controller mappings).
//!
//! - **[`JsonFileStore`]**: one pretty-printed JSON document per profile, written
//!   with an atomic swap (unique temp file + `fsync` + `rename`).
//! - **[`MemoryStore`]**: keeps the last saved array in memory, for tests and tools.
//!
//! ```rust
//! use xrkit_store::{EntryStore, JsonFileStore, StoreError};
//!
//! # fn main() -> Result<(), StoreError> {
//! # let tmp = tempfile::tempdir().unwrap();
//! let store = JsonFileStore::new(tmp.path().join("profile.json"));
//! let entries = vec!["first".to_owned(), "second".to_owned()];
//! store.save_entries(entries.as_slice())?;
//!
//! let entries: Vec<String> = store.load_entries()?;
//! assert_eq!(entries, ["first", "second"]);
//! # Ok(())
//! # }
//! ```

mod error;
mod file;
mod memory;

pub use error::{StoreError, StoreErrorExt};
pub use file::{DOCUMENT_VERSION, JsonFileStore};
pub use memory::MemoryStore;

/// Loads and saves an ordered array of entries.
pub trait EntryStore<E> {
    /// Loads every entry in stored order.
    ///
    /// # Errors
    /// Implementation specific; see [`StoreError`].
    fn load_entries(&self) -> Result<Vec<E>, StoreError>;

    /// Replaces the stored array with `entries`.
    ///
    /// # Errors
    /// Implementation specific; see [`StoreError`].
    fn save_entries(&self, entries: &[E]) -> Result<(), StoreError>;
}
