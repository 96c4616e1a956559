//! The contact record
//!
//! A [`Contact`] is the sole entity of the system. Its `name` acts as the
//! unique key within the collection: lookups, updates, and deletes all
//! address records by exact, case-sensitive name match.

use serde::{Deserialize, Serialize};

/// A single contact record
///
/// Serialized to the collection file as a flat mapping with the keys
/// `name`, `email`, and `phone`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique display name; the record's key within the collection
    pub name: String,

    /// Email address (validated on submission, stored as entered)
    pub email: String,

    /// Mobile phone number (validated on submission, stored as entered)
    pub phone: String,
}

impl Contact {
    /// Create a new contact record
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}
