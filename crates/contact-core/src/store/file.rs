// # File Contact Store
//
// File-based implementation of ContactStore.
//
// ## Purpose
//
// Persists the contact collection as a single JSON array on disk. The file
// is the single source of truth: every operation re-reads and re-parses it,
// and every mutation rewrites it in full. No state is cached across calls.
//
// ## Durability
//
// - Atomic writes: new collection written to a temporary file, then renamed
// - First use: the containing directory and an empty `[]` file are created
//   when absent
// - Corruption is not repaired: a file that fails to parse surfaces as an
//   error to the caller
//
// ## Concurrency
//
// Mutations serialize their read-modify-write cycle through an in-process
// mutex. Writers in other processes are not coordinated with; the deployment
// model is a single low-concurrency process.
//
// ## File Format
//
// ```json
// [
//   { "name": "Ada", "email": "ada@example.com", "phone": "+6281234567890" }
// ]
// ```

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::Error;
use crate::contact::Contact;
use crate::traits::contact_store::ContactStore;

/// File-based contact store
///
/// # Example
///
/// ```rust,no_run
/// use contact_core::{Contact, ContactStore, FileContactStore};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = FileContactStore::new("data/contacts.json").await?;
///
///     store.add(Contact::new("Ada", "ada@example.com", "+6281234567890")).await?;
///
///     let all = store.load_all().await?;
///     assert_eq!(all.len(), 1);
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct FileContactStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileContactStore {
    /// Create or open a file contact store
    ///
    /// This will:
    /// 1. Create the parent directory if it doesn't exist
    /// 2. Initialize the file to an empty collection if it doesn't exist
    pub async fn new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    Error::store(format!(
                        "failed to create store directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        if !path.exists() {
            tracing::debug!("initializing empty collection file: {}", path.display());
            fs::write(&path, b"[]").await.map_err(|e| {
                Error::store(format!(
                    "failed to initialize store file {}: {}",
                    path.display(),
                    e
                ))
            })?;
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Read and parse the full collection from disk
    ///
    /// A missing or unparseable file is an error; the file's existence is
    /// normally guaranteed by [`FileContactStore::new`].
    async fn read_collection(&self) -> Result<Vec<Contact>, Error> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            Error::store(format!(
                "failed to read store file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let contacts: Vec<Contact> = serde_json::from_str(&content)?;
        tracing::trace!(
            "loaded {} contact(s) from {}",
            contacts.len(),
            self.path.display()
        );
        Ok(contacts)
    }

    /// Write the full collection to disk atomically
    async fn write_collection(&self, contacts: &[Contact]) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(contacts)?;

        // Write to temporary file first
        let temp_path = self.temp_path();
        {
            let mut file = fs::File::create(&temp_path).await.map_err(|e| {
                Error::store(format!(
                    "failed to create temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;

            file.write_all(json.as_bytes()).await.map_err(|e| {
                Error::store(format!(
                    "failed to write to temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;

            file.flush().await.map_err(|e| {
                Error::store(format!(
                    "failed to flush temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;
        }

        // Atomic rename (temp -> actual)
        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            Error::store(format!(
                "failed to rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            ))
        })?;

        tracing::trace!(
            "wrote {} contact(s) to {}",
            contacts.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Get path to temporary file for atomic writes
    fn temp_path(&self) -> PathBuf {
        let mut temp = self.path.clone();
        temp.set_extension("tmp");
        temp
    }
}

#[async_trait]
impl ContactStore for FileContactStore {
    async fn load_all(&self) -> Result<Vec<Contact>, Error> {
        self.read_collection().await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, Error> {
        let contacts = self.read_collection().await?;
        Ok(contacts.into_iter().find(|c| c.name == name))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, Error> {
        let contacts = self.read_collection().await?;
        Ok(contacts.iter().any(|c| c.name == name))
    }

    async fn add(&self, contact: Contact) -> Result<(), Error> {
        let _guard = self.write_lock.lock().await;

        let mut contacts = self.read_collection().await?;
        contacts.push(contact);
        self.write_collection(&contacts).await
    }

    async fn update(&self, old_name: &str, contact: Contact) -> Result<(), Error> {
        let _guard = self.write_lock.lock().await;

        let mut contacts = self.read_collection().await?;
        let before = contacts.len();
        contacts.retain(|c| c.name != old_name);
        if contacts.len() == before {
            // Nothing matched; refuse to turn an edit into an insert.
            return Err(Error::not_found(old_name));
        }
        contacts.push(contact);
        self.write_collection(&contacts).await
    }

    async fn delete(&self, name: &str) -> Result<(), Error> {
        let _guard = self.write_lock.lock().await;

        let mut contacts = self.read_collection().await?;
        contacts.retain(|c| c.name != name);
        self.write_collection(&contacts).await
    }
}
