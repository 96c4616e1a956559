// # contact-core
//
// Core library for the contact book.
//
// ## Architecture Overview
//
// This library provides everything the HTTP daemon needs short of the
// routes themselves:
// - **Contact**: The record type persisted to the collection
// - **ContactStore**: Trait for contact persistence
// - **FileContactStore / MemoryContactStore**: The two store implementations
// - **validate**: Field rules for contact submissions, collected in full
// - **FlashStore**: One-shot notices handed across a redirect
//
// ## Design Principles
//
// 1. **Separation of Concerns**: Storage, validation, and notices are
//    independent of any HTTP framework
// 2. **Storage Behind a Trait**: Handlers and tests run against the same
//    interface whether contacts live in a file or in memory
// 3. **Library-First**: All behavior is callable without a running server

pub mod config;
pub mod contact;
pub mod error;
pub mod flash;
pub mod store;
pub mod traits;
pub mod validate;

// Re-export core types for convenience
pub use config::{AppConfig, FlashConfig, StoreConfig};
pub use contact::Contact;
pub use error::{Error, Result};
pub use flash::FlashStore;
pub use store::{FileContactStore, MemoryContactStore};
pub use traits::ContactStore;
