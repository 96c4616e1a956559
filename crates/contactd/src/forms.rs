// # Form Payloads
//
// Typed bodies for the contact forms. Field names match the HTML inputs,
// which is what browsers submit as `application/x-www-form-urlencoded`.
// Values are carried verbatim; the validation layer decides what is
// acceptable.

use contact_core::Contact;
use serde::Deserialize;

/// Body of the add-contact form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactForm {
    /// The record this submission describes
    pub fn to_contact(&self) -> Contact {
        Contact::new(&self.name, &self.email, &self.phone)
    }
}

/// Body of the edit-contact form
///
/// `old_name` is a hidden input carrying the record's name as it was when
/// the form was rendered; it identifies which record to replace even when
/// the visible name field holds a rename.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateForm {
    pub old_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl UpdateForm {
    /// The record this submission describes
    pub fn to_contact(&self) -> Contact {
        Contact::new(&self.name, &self.email, &self.phone)
    }

    /// The visible fields, for re-rendering the form after a rejection
    pub fn fields(&self) -> ContactForm {
        ContactForm {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}
