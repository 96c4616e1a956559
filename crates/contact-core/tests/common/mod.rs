//! Shared fixtures for the contact-core contract tests

use contact_core::{Contact, FileContactStore};
use tempfile::TempDir;

/// Sample contact used across tests
pub fn ada() -> Contact {
    Contact::new("Ada", "ada@example.com", "+6281234567890")
}

/// Second sample contact
pub fn grace() -> Contact {
    Contact::new("Grace", "grace@example.com", "081234567891")
}

/// Third sample contact
pub fn linus() -> Contact {
    Contact::new("Linus", "linus@example.com", "6281234567892")
}

/// A file store rooted in a fresh temporary directory
///
/// The directory guard is returned alongside the store and must be kept
/// alive for the store's lifetime.
pub async fn temp_file_store() -> (TempDir, FileContactStore) {
    let dir = tempfile::tempdir().expect("create tempdir");
    let store = FileContactStore::new(dir.path().join("contacts.json"))
        .await
        .expect("create file store");
    (dir, store)
}
