// # Submission Validation
//
// Field-validation rules for contact submissions.
//
// ## Rules
//
// - `name`: must not be blank, and must not collide with an existing
//   contact's name. During an edit the collision check is skipped when the
//   candidate name equals the record's own pre-edit name, so saving a
//   contact without renaming it is always allowed.
// - `email`: must be a syntactically valid address.
// - `phone`: must be a valid Indonesian mobile number.
//
// All failing rules are collected, not just the first, so a form can be
// redisplayed with every problem itemized.
//
// ## Grammar notes
//
// The email and phone checks are deliberately small hand-rolled grammars,
// not full RFC implementations. The phone grammar follows the Indonesian
// mobile numbering plan: an optional `+62`/`62`/`0` country prefix, the
// mobile `8`, a recognised two-digit operator code, then 5 to 11 further
// digits (spaces between digits are tolerated).

use std::fmt;

use crate::contact::Contact;
use crate::error::Result;
use crate::traits::ContactStore;

/// Which submitted field a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The contact name
    Name,
    /// The email address
    Email,
    /// The mobile phone number
    Phone,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Email => write!(f, "email"),
            Field::Phone => write!(f, "phone"),
        }
    }
}

/// A single failed validation rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field the rule applies to
    pub field: Field,
    /// Human-readable message for the form
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a brand-new contact submission
///
/// Runs every rule and returns the full list of failures; an empty list
/// means the submission is acceptable. The duplicate check consults the
/// store, which is the only way this can fail with an error.
pub async fn check_new(store: &dyn ContactStore, candidate: &Contact) -> Result<Vec<FieldError>> {
    let mut errors = check_fields(candidate);

    if !candidate.name.trim().is_empty() && store.exists_by_name(&candidate.name).await? {
        errors.insert(
            0,
            FieldError::new(Field::Name, "Contact name is already taken."),
        );
    }

    Ok(errors)
}

/// Validate an edit of the contact currently named `old_name`
///
/// Identical to [`check_new`] except for the self-exemption: a candidate
/// that keeps its own name is not a duplicate of itself.
pub async fn check_update(
    store: &dyn ContactStore,
    old_name: &str,
    candidate: &Contact,
) -> Result<Vec<FieldError>> {
    let mut errors = check_fields(candidate);

    if candidate.name != old_name
        && !candidate.name.trim().is_empty()
        && store.exists_by_name(&candidate.name).await?
    {
        errors.insert(
            0,
            FieldError::new(Field::Name, "Contact name is already taken."),
        );
    }

    Ok(errors)
}

/// Run the store-independent field rules
fn check_fields(candidate: &Contact) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if candidate.name.trim().is_empty() {
        errors.push(FieldError::new(Field::Name, "Name must not be empty."));
    }

    if !is_valid_email(&candidate.email) {
        errors.push(FieldError::new(
            Field::Email,
            "Email address is not valid.",
        ));
    }

    if !is_valid_mobile_phone(&candidate.phone) {
        errors.push(FieldError::new(
            Field::Phone,
            "Mobile phone number is not valid.",
        ));
    }

    errors
}

/// Check whether a string is a syntactically plausible email address
///
/// Accepts `local@domain` where the local part is non-empty, at most 64
/// characters, and drawn from the usual unquoted set, and the domain is a
/// dot-separated sequence of at least two labels ending in an alphabetic
/// top-level label of two or more characters.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 {
        return false;
    }

    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'))
    {
        return false;
    }

    // Dots separate atoms; they cannot lead, trail, or double up
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    is_valid_email_domain(domain)
}

/// Check the domain half of an email address
///
/// Label rules per RFC 1035: at most 63 characters each, alphanumeric and
/// hyphen only, no leading or trailing hyphen, 253 characters total.
fn is_valid_email_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > 253 {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    for label in &labels {
        if label.is_empty() || label.len() > 63 {
            return false;
        }

        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return false;
        }

        if label.starts_with('-') || label.ends_with('-') {
            return false;
        }
    }

    let tld = labels[labels.len() - 1];
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Check whether a string is a valid Indonesian mobile number
///
/// Structure: optional `+62`, `62`, or `0` prefix; the mobile trunk `8`;
/// a two-digit operator code from the recognised ranges; then 5 to 11
/// further characters, each a digit or a space.
pub fn is_valid_mobile_phone(value: &str) -> bool {
    let rest = if let Some(r) = value.strip_prefix("+62") {
        r
    } else if let Some(r) = value.strip_prefix("62") {
        r
    } else if let Some(r) = value.strip_prefix('0') {
        r
    } else {
        return false;
    };

    let mut chars = rest.chars();
    if chars.next() != Some('8') {
        return false;
    }

    let (Some(d1), Some(d2)) = (chars.next(), chars.next()) else {
        return false;
    };
    if !operator_code_ok(d1, d2) {
        return false;
    }

    let tail = chars.as_str();
    let len = tail.chars().count();
    if !(5..=11).contains(&len) {
        return false;
    }

    tail.chars().all(|c| c.is_ascii_digit() || c == ' ')
}

/// Operator code ranges of the Indonesian mobile numbering plan
fn operator_code_ok(d1: char, d2: char) -> bool {
    match d1 {
        '1' | '8' => d2.is_ascii_digit() && d2 != '0',
        '2' | '3' => matches!(d2, '1' | '2' | '3' | '8'),
        '5' => matches!(d2, '1' | '2' | '3' | '5' | '6' | '7' | '8' | '9'),
        '7' => matches!(d2, '7' | '8'),
        '9' => matches!(d2, '5' | '6' | '7' | '8' | '9'),
        _ => false,
    }
}
