//! The shared list and its write-through persistence.
//!
//! One process-wide list, shared by every user of the bot. Every mutation
//! saves the full snapshot through the [`ListStore`], so in-memory and
//! on-disk state converge after each successful operation. When a save
//! fails the in-memory mutation still applies; the failure is returned to
//! the caller instead of being swallowed.

use crate::error::{ListError, StoreError};
use crate::store::ListStore;

/// The shared list of items, with user-facing 1-based indices.
#[derive(Debug)]
pub struct SharedList {
    items: Vec<String>,
    store: ListStore,
}

impl SharedList {
    /// Load the list from the store. Called once at startup.
    pub fn load(store: ListStore) -> Self {
        let items = store.load();
        Self { items, store }
    }

    /// Append an item to the end of the list and save.
    ///
    /// On `Err` the item is in memory but not on disk.
    pub fn append(&mut self, item: String) -> Result<(), StoreError> {
        self.items.push(item);
        self.store.save(&self.items)
    }

    /// Remove the item at the given 1-based index and save.
    ///
    /// An out-of-range index leaves the list unchanged. A failed save still
    /// reports the removed item via [`ListError::SaveFailed`].
    pub fn remove_at(&mut self, index: i64) -> Result<String, ListError> {
        let len = self.items.len();
        if index < 1 || index as usize > len {
            return Err(ListError::IndexOutOfRange { index, len });
        }

        let item = self.items.remove(index as usize - 1);
        match self.store.save(&self.items) {
            Ok(()) => Ok(item),
            Err(source) => Err(ListError::SaveFailed { item, source }),
        }
    }

    /// Empty the list and save. Returns the number of items removed.
    ///
    /// On `Err` the list is empty in memory but not on disk.
    pub fn clear(&mut self) -> Result<usize, StoreError> {
        let removed = self.items.len();
        self.items.clear();
        self.store.save(&self.items)?;
        Ok(removed)
    }

    /// Read-only copy of the current items, in display order.
    pub fn snapshot(&self) -> Vec<String> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
