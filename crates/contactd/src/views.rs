// # Page Rendering
//
// Server-rendered HTML for every page. Pages are plain formatted strings
// inside a shared layout; all dynamic text goes through `escape_html` and
// every contact name placed in a URL goes through `encode_path_segment`.

use axum::response::Html;
use contact_core::validate::FieldError;
use contact_core::Contact;

use crate::forms::ContactForm;

/// Wrap a page body in the shared chrome
fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{} - Contact Book</title></head><body>\
<nav><a href=\"/\">Home</a> | <a href=\"/about\">About</a> | <a href=\"/contact\">Contacts</a></nav>\
{}\
</body></html>",
        escape_html(title),
        body
    ))
}

pub fn home_page() -> Html<String> {
    layout(
        "Home",
        "<h1>Contact Book</h1>\
<p>A small address book. Browse the <a href=\"/contact\">contact list</a> \
or <a href=\"/contact/add\">add a contact</a>.</p>",
    )
}

pub fn about_page() -> Html<String> {
    layout(
        "About",
        "<h1>About</h1>\
<p>Contacts are kept in a single JSON file on the server. Every page is \
rendered server-side; no scripts, no accounts.</p>",
    )
}

/// The contact list, with an optional one-shot notice on top
pub fn contact_list_page(contacts: &[Contact], notice: Option<&str>) -> Html<String> {
    let mut body = String::from("<h1>Contact List</h1>");
    body.push_str(&notice_block(notice));
    body.push_str("<p><a href=\"/contact/add\">Add Contact</a></p>");

    if contacts.is_empty() {
        body.push_str("<p>No contacts yet.</p>");
    } else {
        body.push_str("<table><thead><tr><th>#</th><th>Name</th></tr></thead><tbody>");
        for (i, contact) in contacts.iter().enumerate() {
            body.push_str(&format!(
                "<tr><td>{}</td><td><a href=\"/contact/{}\">{}</a></td></tr>",
                i + 1,
                encode_path_segment(&contact.name),
                escape_html(&contact.name)
            ));
        }
        body.push_str("</tbody></table>");
    }

    layout("Contacts", &body)
}

pub fn contact_detail_page(contact: &Contact) -> Html<String> {
    let encoded = encode_path_segment(&contact.name);
    let body = format!(
        "<h1>{name}</h1>\
<dl>\
<dt>Email</dt><dd>{email}</dd>\
<dt>Phone</dt><dd>{phone}</dd>\
</dl>\
<p><a href=\"/contact/edit/{enc}\">Edit</a> | \
<a href=\"/contact/delete/{enc}\">Delete</a></p>\
<p><a href=\"/contact\">Back to list</a></p>",
        name = escape_html(&contact.name),
        email = escape_html(&contact.email),
        phone = escape_html(&contact.phone),
        enc = encoded
    );
    layout(&contact.name, &body)
}

/// The add form, optionally re-rendered with errors and the rejected input
pub fn add_form_page(form: &ContactForm, errors: &[FieldError]) -> Html<String> {
    let body = format!(
        "<h1>Add Contact</h1>\
{errors}\
<form method=\"post\" action=\"/contact\">\
{fields}\
<p><button type=\"submit\">Add</button></p>\
</form>\
<p><a href=\"/contact\">Back to list</a></p>",
        errors = errors_block(errors),
        fields = field_inputs(form)
    );
    layout("Add Contact", &body)
}

/// The edit form for the record still stored under `old_name`
pub fn edit_form_page(old_name: &str, form: &ContactForm, errors: &[FieldError]) -> Html<String> {
    let body = format!(
        "<h1>Edit Contact</h1>\
{errors}\
<form method=\"post\" action=\"/contact/update\">\
<input type=\"hidden\" name=\"old_name\" value=\"{old}\">\
{fields}\
<p><button type=\"submit\">Save</button></p>\
</form>\
<p><a href=\"/contact\">Back to list</a></p>",
        errors = errors_block(errors),
        old = escape_html(old_name),
        fields = field_inputs(form)
    );
    layout("Edit Contact", &body)
}

pub fn not_found_page() -> Html<String> {
    layout(
        "Not Found",
        "<h1>404</h1>\
<p>The page you asked for does not exist. \
<a href=\"/contact\">Back to the contact list</a>.</p>",
    )
}

pub fn error_page() -> Html<String> {
    layout(
        "Error",
        "<h1>Something went wrong</h1>\
<p>The server could not complete the request. Try again in a moment.</p>",
    )
}

/// The three visible form fields, pre-filled with the submitted values
fn field_inputs(form: &ContactForm) -> String {
    format!(
        "<p><label>Name <input type=\"text\" name=\"name\" value=\"{}\"></label></p>\
<p><label>Email <input type=\"text\" name=\"email\" value=\"{}\"></label></p>\
<p><label>Phone <input type=\"text\" name=\"phone\" value=\"{}\"></label></p>",
        escape_html(&form.name),
        escape_html(&form.email),
        escape_html(&form.phone)
    )
}

/// Itemized validation failures, or nothing
fn errors_block(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let mut block = String::from("<ul class=\"errors\">");
    for error in errors {
        block.push_str(&format!("<li>{}</li>", escape_html(&error.message)));
    }
    block.push_str("</ul>");
    block
}

/// A one-shot notice, or nothing
fn notice_block(notice: Option<&str>) -> String {
    match notice {
        Some(message) => format!("<p class=\"notice\">{}</p>", escape_html(message)),
        None => String::new(),
    }
}

/// Replace the five HTML-significant characters with entities
fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a string for use as one path segment
///
/// Unreserved characters pass through; everything else, including `/` and
/// space, is encoded byte-wise so names survive a round trip through a URL.
fn encode_path_segment(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
