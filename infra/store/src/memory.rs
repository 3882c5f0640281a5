use crate::EntryStore;
use crate::error::StoreError;
use parking_lot::Mutex;

/// In-memory [`EntryStore`].
#[derive(Debug)]
pub struct MemoryStore<E> {
    entries: Mutex<Vec<E>>,
}

impl<E> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<E> MemoryStore<E> {
    #[must_use]
    pub fn new(entries: Vec<E>) -> Self {
        Self { entries: Mutex::new(entries) }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl<E: Clone> EntryStore<E> for MemoryStore<E> {
    fn load_entries(&self) -> Result<Vec<E>, StoreError> {
        Ok(self.entries.lock().clone())
    }

    fn save_entries(&self, entries: &[E]) -> Result<(), StoreError> {
        *self.entries.lock() = entries.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Opaque(u8);

    #[test]
    fn default_needs_no_default_entries() {
        let store = MemoryStore::<Opaque>::default();
        assert!(store.is_empty());

        store.save_entries(&[Opaque(7)]).unwrap();
        assert_eq!(store.load_entries().unwrap(), [Opaque(7)]);
    }
}
