// # Contact Store Implementations
//
// This module provides implementations of the ContactStore trait for
// different persistence strategies, plus a constructor that picks one
// from configuration.

use std::sync::Arc;

use crate::config::StoreConfig;
use crate::traits::ContactStore;

pub mod file;
pub mod memory;

pub use file::FileContactStore;
pub use memory::MemoryContactStore;

/// Open a contact store described by the given configuration
///
/// The file variant creates the backing file (and its directory) on first
/// use; see [`FileContactStore::new`].
pub async fn open(config: &StoreConfig) -> Result<Arc<dyn ContactStore>, crate::Error> {
    config.validate()?;

    match config {
        StoreConfig::File { path } => {
            let store = FileContactStore::new(path).await?;
            Ok(Arc::new(store))
        }
        StoreConfig::Memory => Ok(Arc::new(MemoryContactStore::new())),
    }
}
