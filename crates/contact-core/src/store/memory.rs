// # Memory Contact Store
//
// In-memory implementation of ContactStore.
//
// ## Purpose
//
// Provides a simple, fast store that doesn't persist across restarts.
// Useful for tests, demos, or deployments where losing the contact list
// on restart is acceptable.
//
// ## Ordering
//
// The collection is a plain `Vec`, so it keeps the same ordered-sequence
// semantics as the file store: adds append, updates re-append at the end.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::Error;
use crate::contact::Contact;
use crate::traits::contact_store::ContactStore;

/// In-memory contact store implementation
///
/// All state lives in a `Vec` protected by a `RwLock`. Clones share the
/// same underlying collection.
///
/// # Example
///
/// ```rust,no_run
/// use contact_core::{Contact, ContactStore, MemoryContactStore};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = MemoryContactStore::new();
///
///     store.add(Contact::new("Ada", "ada@example.com", "+6281234567890")).await?;
///     assert_eq!(store.len().await, 1);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MemoryContactStore {
    inner: Arc<RwLock<Vec<Contact>>>,
}

impl MemoryContactStore {
    /// Create a new empty memory contact store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store pre-populated with the given contacts
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(contacts)),
        }
    }

    /// Get the number of contacts in the store
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Check if the store is empty
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Clear all contacts from the store
    pub async fn clear(&self) {
        self.inner.write().await.clear();
    }
}

impl Default for MemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn load_all(&self) -> Result<Vec<Contact>, Error> {
        let guard = self.inner.read().await;
        Ok(guard.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, Error> {
        let guard = self.inner.read().await;
        Ok(guard.iter().find(|c| c.name == name).cloned())
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, Error> {
        let guard = self.inner.read().await;
        Ok(guard.iter().any(|c| c.name == name))
    }

    async fn add(&self, contact: Contact) -> Result<(), Error> {
        let mut guard = self.inner.write().await;
        guard.push(contact);
        Ok(())
    }

    async fn update(&self, old_name: &str, contact: Contact) -> Result<(), Error> {
        let mut guard = self.inner.write().await;
        let before = guard.len();
        guard.retain(|c| c.name != old_name);
        if guard.len() == before {
            return Err(Error::not_found(old_name));
        }
        guard.push(contact);
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), Error> {
        let mut guard = self.inner.write().await;
        guard.retain(|c| c.name != name);
        Ok(())
    }
}
