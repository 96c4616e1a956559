// # contactd
//
// HTTP daemon for the contact book. This crate is a thin integration
// layer: routing, form decoding, and page rendering live here, while
// storage, validation, and flash notices come from contact-core.
//
// ## Route Table
//
// | Method | Path                   | Page                              |
// |--------|------------------------|-----------------------------------|
// | GET    | `/`                    | Home                              |
// | GET    | `/about`               | About                             |
// | GET    | `/contact`             | Contact list (collects `?flash=`) |
// | POST   | `/contact`             | Create, then redirect to the list |
// | GET    | `/contact/add`         | Blank add form                    |
// | POST   | `/contact/update`      | Update, then redirect to the list |
// | GET    | `/contact/edit/:name`  | Pre-filled edit form              |
// | GET    | `/contact/delete/:name`| Delete, then redirect to the list |
// | GET    | `/contact/:name`       | Contact detail                    |
// | *      | anything else          | 404 page                          |

pub mod forms;
pub mod handlers;
pub mod views;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use contact_core::{ContactStore, FlashStore};

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    /// Where contacts live; file-backed in production, memory in tests
    pub store: Arc<dyn ContactStore>,
    /// Pending one-shot notices
    pub flash: FlashStore,
}

impl AppState {
    pub fn new(store: Arc<dyn ContactStore>, flash: FlashStore) -> Self {
        Self { store, flash }
    }
}

/// Build the application router
///
/// Static segments win over parameters, so `/contact/add` never shadows
/// `/contact/:name`. Every route also carries the 404 page as its method
/// fallback: a matched path with the wrong verb renders the same
/// catch-all as an unknown path, not a bare 405.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home).fallback(handlers::not_found))
        .route("/about", get(handlers::about).fallback(handlers::not_found))
        .route(
            "/contact",
            get(handlers::contact_list)
                .post(handlers::contact_create)
                .fallback(handlers::not_found),
        )
        .route(
            "/contact/add",
            get(handlers::contact_add_form).fallback(handlers::not_found),
        )
        .route(
            "/contact/update",
            post(handlers::contact_update).fallback(handlers::not_found),
        )
        .route(
            "/contact/edit/:name",
            get(handlers::contact_edit_form).fallback(handlers::not_found),
        )
        .route(
            "/contact/delete/:name",
            get(handlers::contact_delete).fallback(handlers::not_found),
        )
        .route(
            "/contact/:name",
            get(handlers::contact_detail).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .with_state(state)
}
