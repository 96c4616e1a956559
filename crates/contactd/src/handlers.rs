// # Request Handlers
//
// One handler per route. Handlers stay thin: extract the request, call
// into contact-core, pick a page. Mutations follow POST-redirect-GET,
// bouncing to the list with a flash token so a refresh cannot repeat the
// mutation or the notice.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use contact_core::{validate, Error};

use crate::forms::{ContactForm, UpdateForm};
use crate::views;
use crate::AppState;

/// Error wrapper that turns library failures into rendered pages
///
/// A missing record renders the 404 page; anything else (store I/O, a
/// collection file that no longer parses) is logged and rendered as a 500.
pub struct AppError(Error);

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.0 {
            Error::NotFound(_) => not_found_response(),
            err => {
                tracing::error!("request failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, views::error_page()).into_response()
            }
        }
    }
}

/// GET /
pub async fn home() -> impl IntoResponse {
    views::home_page()
}

/// GET /about
pub async fn about() -> impl IntoResponse {
    views::about_page()
}

/// GET /contact
///
/// Renders the list; when the query carries a flash token the notice is
/// collected here, so reloading the same URL shows the list without it.
pub async fn contact_list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let contacts = state.store.load_all().await?;
    tracing::debug!("rendering contact list: {} record(s)", contacts.len());

    let notice = match params.get("flash") {
        Some(token) => state.flash.take(token).await,
        None => None,
    };

    Ok(views::contact_list_page(&contacts, notice.as_deref()).into_response())
}

/// GET /contact/add
pub async fn contact_add_form() -> impl IntoResponse {
    views::add_form_page(&ContactForm::default(), &[])
}

/// POST /contact
///
/// A rejected submission re-renders the form with every failure and the
/// submitted values, as a plain 200.
pub async fn contact_create(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let candidate = form.to_contact();

    let errors = validate::check_new(state.store.as_ref(), &candidate).await?;
    if !errors.is_empty() {
        return Ok(views::add_form_page(&form, &errors).into_response());
    }

    state.store.add(candidate).await?;
    tracing::info!("contact added: {}", form.name);

    let token = state.flash.stash("Contact added.").await;
    Ok(redirect_to_list(&token))
}

/// POST /contact/update
///
/// `old_name` names the record to replace. If it was deleted between
/// rendering the form and submitting it, the store reports the record
/// missing and the 404 page is rendered.
pub async fn contact_update(
    State(state): State<AppState>,
    Form(form): Form<UpdateForm>,
) -> Result<Response, AppError> {
    let candidate = form.to_contact();

    let errors = validate::check_update(state.store.as_ref(), &form.old_name, &candidate).await?;
    if !errors.is_empty() {
        return Ok(views::edit_form_page(&form.old_name, &form.fields(), &errors).into_response());
    }

    state.store.update(&form.old_name, candidate).await?;
    tracing::info!("contact updated: {} -> {}", form.old_name, form.name);

    let token = state.flash.stash("Contact updated.").await;
    Ok(redirect_to_list(&token))
}

/// GET /contact/edit/:name
pub async fn contact_edit_form(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    match state.store.find_by_name(&name).await? {
        Some(contact) => {
            let form = ContactForm {
                name: contact.name.clone(),
                email: contact.email.clone(),
                phone: contact.phone.clone(),
            };
            Ok(views::edit_form_page(&contact.name, &form, &[]).into_response())
        }
        None => Ok(not_found_response()),
    }
}

/// GET /contact/delete/:name
pub async fn contact_delete(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    if !state.store.exists_by_name(&name).await? {
        return Ok(not_found_response());
    }

    state.store.delete(&name).await?;
    tracing::info!("contact deleted: {}", name);

    let token = state.flash.stash("Contact deleted.").await;
    Ok(redirect_to_list(&token))
}

/// GET /contact/:name
pub async fn contact_detail(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    tracing::debug!("rendering detail for {name}");
    match state.store.find_by_name(&name).await? {
        Some(contact) => Ok(views::contact_detail_page(&contact).into_response()),
        None => Ok(not_found_response()),
    }
}

/// Fallback for every unrouted path
pub async fn not_found() -> impl IntoResponse {
    not_found_response()
}

fn not_found_response() -> Response {
    (StatusCode::NOT_FOUND, views::not_found_page()).into_response()
}

/// 303 See Other back to the list, carrying the flash token
fn redirect_to_list(token: &str) -> Response {
    Redirect::to(&format!("/contact?flash={token}")).into_response()
}
