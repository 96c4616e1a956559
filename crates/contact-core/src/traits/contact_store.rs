// # Contact Store Trait
//
// Defines the interface for durable CRUD over the contact collection.
//
// ## Purpose
//
// The store owns the persisted collection and nothing else: it does not
// validate input, render views, or decide what a duplicate means. Those
// rules live with the callers (the validation layer and the HTTP
// handlers), so the store can stay a thin capability that tests swap for
// an in-memory implementation.
//
// ## Implementations
//
// - File-based: one JSON array on disk, rewritten whole on every mutation
// - In-memory: a locked `Vec` for tests and ephemeral deployments
//
// ## Usage
//
// ```rust,no_run
// use contact_core::{Contact, ContactStore, MemoryContactStore};
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let store = MemoryContactStore::new();
//
//     store.add(Contact::new("Ada", "ada@example.com", "+6281234567890")).await?;
//
//     let found = store.find_by_name("Ada").await?;
//     assert!(found.is_some());
//
//     Ok(())
// }
// ```

use async_trait::async_trait;

use crate::contact::Contact;

/// Trait for contact store implementations
///
/// This trait defines the interface for persistent storage of the contact
/// collection. Implementations must be thread-safe and usable across async
/// tasks.
///
/// # Ordering
///
/// The collection is an ordered sequence: `load_all` returns records in
/// insertion order, and `update` re-appends the replacement record at the
/// end rather than preserving the original position.
///
/// # Duplicates
///
/// `add` appends unconditionally; it is the caller's job to check
/// [`exists_by_name`](ContactStore::exists_by_name) first. Repeated `add`
/// calls with the same name produce duplicate entries.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Load the full collection
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Contact>)`: every record, in collection order
    /// - `Err(Error)`: storage read or parse error
    async fn load_all(&self) -> Result<Vec<Contact>, crate::Error>;

    /// Find the first contact with the given name (exact, case-sensitive)
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Contact))`: the matching record
    /// - `Ok(None)`: no record found (absence, not an error)
    /// - `Err(Error)`: storage error
    async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, crate::Error>;

    /// Check whether a contact with the given name exists
    ///
    /// Semantically the same scan as [`find_by_name`](ContactStore::find_by_name);
    /// used at the duplicate-check boundary before an insert.
    async fn exists_by_name(&self, name: &str) -> Result<bool, crate::Error>;

    /// Append a contact to the collection
    ///
    /// The store does not reject duplicate names; see the trait-level notes.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: persisted
    /// - `Err(Error)`: storage error
    async fn add(&self, contact: Contact) -> Result<(), crate::Error>;

    /// Replace the contact named `old_name` with `contact`
    ///
    /// The old record is removed and the replacement appended, so the
    /// record moves to the end of the collection.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: persisted
    /// - `Err(Error::NotFound)`: no record named `old_name`; nothing written
    /// - `Err(Error)`: storage error
    async fn update(&self, old_name: &str, contact: Contact) -> Result<(), crate::Error>;

    /// Remove every contact with the given name
    ///
    /// Silent success when nothing matches; callers that need a not-found
    /// signal check [`exists_by_name`](ContactStore::exists_by_name) first.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: persisted (or nothing matched)
    /// - `Err(Error)`: storage error
    async fn delete(&self, name: &str) -> Result<(), crate::Error>;
}
