//! Route Contract Test: The Whole HTTP Surface
//!
//! Drives the router directly, one request at a time, against a memory
//! store shared with the test so every page can be checked against the
//! collection behind it.
//!
//! Constraints verified:
//! - Every route renders, redirects, or 404s exactly as documented
//! - Rejected submissions re-render the form (200) with every failure
//!   and leave the collection untouched
//! - Successful mutations answer 303 to `/contact?flash=<token>` and the
//!   notice shows exactly once
//! - Path parameters round-trip percent-encoded names
//! - A matched path with the wrong verb renders the 404 page, same as an
//!   unknown path
//! - A collection file that no longer parses surfaces as the 500 page
//!
//! If this test fails, the browser-visible behavior has drifted.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use contact_core::{Contact, ContactStore, FlashConfig, FlashStore, MemoryContactStore, StoreConfig};
use contactd::{build_router, AppState};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn ada() -> Contact {
    Contact::new("Ada", "ada@example.com", "+6281234567890")
}

fn grace() -> Contact {
    Contact::new("Grace", "grace@example.com", "081234567891")
}

/// A router over a fresh memory store, plus a handle onto that store
fn test_app(seed: Vec<Contact>) -> (Router, MemoryContactStore) {
    let store = MemoryContactStore::with_contacts(seed);
    let state = AppState::new(
        Arc::new(store.clone()),
        FlashStore::new(&FlashConfig::default()),
    );
    (build_router(state), store)
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("route request")
}

async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .expect("build request"),
        )
        .await
        .expect("route request")
}

async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// The Location of a post-mutation redirect, asserted to carry a token
fn flash_location(response: &Response) -> String {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("redirect carries Location")
        .to_str()
        .expect("ascii Location")
        .to_string();
    assert!(
        location.starts_with("/contact?flash="),
        "unexpected redirect target: {}",
        location
    );
    location
}

#[tokio::test]
async fn home_and_about_render() {
    let (app, _store) = test_app(vec![]);

    let home = get(&app, "/").await;
    assert_eq!(home.status(), StatusCode::OK);
    assert!(body_text(home).await.contains("Contact Book"));

    let about = get(&app, "/about").await;
    assert_eq!(about.status(), StatusCode::OK);
    assert!(body_text(about).await.contains("About"));
}

#[tokio::test]
async fn empty_list_says_so() {
    let (app, _store) = test_app(vec![]);

    let response = get(&app, "/contact").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No contacts yet."));
}

#[tokio::test]
async fn list_shows_contacts_in_collection_order() {
    let (app, _store) = test_app(vec![ada(), grace()]);

    let page = body_text(get(&app, "/contact").await).await;
    let ada_at = page.find("Ada").expect("Ada listed");
    let grace_at = page.find("Grace").expect("Grace listed");
    assert!(ada_at < grace_at, "collection order must be preserved");
}

#[tokio::test]
async fn add_form_renders_blank() {
    let (app, _store) = test_app(vec![]);

    let response = get(&app, "/contact/add").await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains("action=\"/contact\""));
    assert!(page.contains("name=\"name\" value=\"\""));
}

#[tokio::test]
async fn create_redirects_and_notice_shows_once() {
    let (app, store) = test_app(vec![]);

    let response = post_form(
        &app,
        "/contact",
        "name=Ada&email=ada%40example.com&phone=%2B6281234567890",
    )
    .await;
    let location = flash_location(&response);

    assert_eq!(store.find_by_name("Ada").await.expect("find"), Some(ada()));

    // First load of the redirect target shows the notice
    let listed = body_text(get(&app, &location).await).await;
    assert!(listed.contains("Contact added."));
    assert!(listed.contains("Ada"));

    // Reloading the same URL does not repeat it
    let reloaded = body_text(get(&app, &location).await).await;
    assert!(!reloaded.contains("Contact added."));
    assert!(reloaded.contains("Ada"));
}

#[tokio::test]
async fn duplicate_name_rerenders_form_unchanged_collection() {
    let (app, store) = test_app(vec![ada()]);

    let response = post_form(
        &app,
        "/contact",
        "name=Ada&email=other%40example.com&phone=081234567890",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains("Contact name is already taken."));
    // The rejected values are echoed back into the form
    assert!(page.contains("value=\"other@example.com\""));

    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn invalid_submission_lists_every_failure() {
    let (app, store) = test_app(vec![]);

    let response = post_form(&app, "/contact", "name=&email=not-an-email&phone=12345").await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains("Name must not be empty."));
    assert!(page.contains("Email address is not valid."));
    assert!(page.contains("Mobile phone number is not valid."));

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn detail_renders_record_or_404() {
    let (app, _store) = test_app(vec![ada()]);

    let found = get(&app, "/contact/Ada").await;
    assert_eq!(found.status(), StatusCode::OK);
    let page = body_text(found).await;
    assert!(page.contains("ada@example.com"));
    assert!(page.contains("+6281234567890"));

    let missing = get(&app, "/contact/Nobody").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert!(body_text(missing).await.contains("404"));
}

#[tokio::test]
async fn encoded_names_round_trip_through_paths() {
    let (app, _store) = test_app(vec![Contact::new(
        "Ada Lovelace",
        "ada@example.com",
        "081234567890",
    )]);

    let response = get(&app, "/contact/Ada%20Lovelace").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Ada Lovelace"));
}

#[tokio::test]
async fn edit_form_prefills_or_404() {
    let (app, _store) = test_app(vec![ada()]);

    let found = get(&app, "/contact/edit/Ada").await;
    assert_eq!(found.status(), StatusCode::OK);
    let page = body_text(found).await;
    assert!(page.contains("name=\"old_name\" value=\"Ada\""));
    assert!(page.contains("value=\"ada@example.com\""));

    let missing = get(&app, "/contact/edit/Nobody").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_renames_and_reappends() {
    let (app, store) = test_app(vec![ada(), grace()]);

    let response = post_form(
        &app,
        "/contact/update",
        "old_name=Ada&name=Ada+Lovelace&email=ada%40example.com&phone=%2B6281234567890",
    )
    .await;
    let location = flash_location(&response);

    assert!(store.find_by_name("Ada").await.expect("find").is_none());
    let names: Vec<String> = store
        .load_all()
        .await
        .expect("load")
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Grace", "Ada Lovelace"]);

    assert!(body_text(get(&app, &location).await)
        .await
        .contains("Contact updated."));
}

#[tokio::test]
async fn update_keeping_own_name_is_allowed() {
    let (app, store) = test_app(vec![ada()]);

    let response = post_form(
        &app,
        "/contact/update",
        "old_name=Ada&name=Ada&email=new%40example.com&phone=%2B6281234567890",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let updated = store
        .find_by_name("Ada")
        .await
        .expect("find")
        .expect("still present");
    assert_eq!(updated.email, "new@example.com");
}

#[tokio::test]
async fn update_renaming_onto_existing_name_is_rejected() {
    let (app, store) = test_app(vec![ada(), grace()]);

    let response = post_form(
        &app,
        "/contact/update",
        "old_name=Grace&name=Ada&email=grace%40example.com&phone=081234567891",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("Contact name is already taken."));

    // Both records still there under their old names
    assert!(store.exists_by_name("Ada").await.expect("exists"));
    assert!(store.exists_by_name("Grace").await.expect("exists"));
}

#[tokio::test]
async fn update_of_vanished_record_is_404() {
    let (app, store) = test_app(vec![]);

    let response = post_form(
        &app,
        "/contact/update",
        "old_name=Nobody&name=Nobody&email=nobody%40example.com&phone=081234567890",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn delete_removes_and_notice_shows() {
    let (app, store) = test_app(vec![ada(), grace()]);

    let response = get(&app, "/contact/delete/Ada").await;
    let location = flash_location(&response);

    assert!(store.find_by_name("Ada").await.expect("find").is_none());
    assert_eq!(store.len().await, 1);

    assert!(body_text(get(&app, &location).await)
        .await
        .contains("Contact deleted."));
}

#[tokio::test]
async fn delete_of_absent_name_is_404() {
    let (app, store) = test_app(vec![ada()]);

    let response = get(&app, "/contact/delete/Nobody").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn unknown_routes_fall_back_to_404() {
    let (app, _store) = test_app(vec![]);

    for uri in ["/nope", "/contact/edit", "/a/b/c/d"] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri: {}", uri);
        assert!(body_text(response).await.contains("404"));
    }
}

#[tokio::test]
async fn wrong_method_falls_back_to_404() {
    let (app, store) = test_app(vec![ada()]);

    // Routed path, unmatched verb: the catch-all page, not a bare 405
    let response = get(&app, "/contact/update").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("404"));

    let response = post_form(&app, "/about", "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // A POST cannot reach the GET-only delete route
    let response = post_form(&app, "/contact/delete/Ada", "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(store.exists_by_name("Ada").await.expect("exists"));
}

#[tokio::test]
async fn stale_flash_token_renders_plain_list() {
    let (app, _store) = test_app(vec![ada()]);

    let response = get(&app, "/contact?flash=0000000000000000").await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(!page.contains("class=\"notice\""));
    assert!(page.contains("Ada"));
}

#[tokio::test]
async fn file_backed_router_persists_between_builds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = StoreConfig::File {
        path: dir.path().join("contacts.json").to_string_lossy().into_owned(),
    };

    // First process: add a contact through the HTTP surface
    let store = contact_core::store::open(&config).await.expect("open store");
    let app = build_router(AppState::new(store, FlashStore::new(&FlashConfig::default())));
    let response = post_form(
        &app,
        "/contact",
        "name=Ada&email=ada%40example.com&phone=%2B6281234567890",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // Second process over the same file sees it
    let store = contact_core::store::open(&config).await.expect("reopen store");
    let app = build_router(AppState::new(store, FlashStore::new(&FlashConfig::default())));
    let page = body_text(get(&app, "/contact").await).await;
    assert!(page.contains("Ada"));
}

#[tokio::test]
async fn corrupt_collection_file_renders_500() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("contacts.json");
    let config = StoreConfig::File {
        path: path.to_string_lossy().into_owned(),
    };

    let store = contact_core::store::open(&config).await.expect("open store");
    let app = build_router(AppState::new(store, FlashStore::new(&FlashConfig::default())));

    // Clobber the collection behind the running store
    std::fs::write(&path, "not json").expect("overwrite collection");

    let response = get(&app, "/contact").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("Something went wrong"));
}

#[tokio::test]
async fn lifecycle_through_the_browser_surface() {
    let (app, store) = test_app(vec![]);

    // Add
    let created = post_form(
        &app,
        "/contact",
        "name=Ada&email=ada%40example.com&phone=%2B6281234567890",
    )
    .await;
    assert_eq!(created.status(), StatusCode::SEE_OTHER);

    // Edit via the pre-filled form, renaming
    let edit_page = body_text(get(&app, "/contact/edit/Ada").await).await;
    assert!(edit_page.contains("value=\"Ada\""));

    let updated = post_form(
        &app,
        "/contact/update",
        "old_name=Ada&name=Ada+Lovelace&email=ada.lovelace%40example.com&phone=081234567890",
    )
    .await;
    assert_eq!(updated.status(), StatusCode::SEE_OTHER);

    // Detail reflects the rename
    let detail = body_text(get(&app, "/contact/Ada%20Lovelace").await).await;
    assert!(detail.contains("ada.lovelace@example.com"));

    // Delete
    let deleted = get(&app, "/contact/delete/Ada%20Lovelace").await;
    assert_eq!(deleted.status(), StatusCode::SEE_OTHER);
    assert!(store.is_empty().await);

    let empty = body_text(get(&app, "/contact").await).await;
    assert!(empty.contains("No contacts yet."));
}
