//! Core traits for the contact book
//!
//! This module defines the abstract interfaces that all implementations must follow.
//!
//! - [`ContactStore`]: durable CRUD over the contact collection

pub mod contact_store;

pub use contact_store::ContactStore;
