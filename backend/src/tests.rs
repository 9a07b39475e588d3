//! End-to-end flow tests exercising the HTTP surface over the real
//! in-process adapters.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web};
use serde_json::{Value, json};
use tempfile::TempDir;

use crate::domain::{User, UsersService};
use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::HttpState;
use crate::outbound::blobstore::FsImageStore;
use crate::outbound::persistence::InMemoryUserRepository;
use crate::server::build_app;

fn flow_state() -> (TempDir, web::Data<HttpState>) {
    let images_dir = tempfile::tempdir().expect("temp dir for image store");
    let service = UsersService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(FsImageStore::new(images_dir.path())),
    );
    (images_dir, web::Data::new(HttpState::new(Arc::new(service))))
}

macro_rules! flow_app {
    ($state:expr) => {
        actix_test::init_service(build_app($state, web::Data::new(HealthState::new()))).await
    };
}

macro_rules! create_user {
    ($app:expr, $name:expr) => {{
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({
                "name": $name,
                "email": format!("{}@example.com", $name),
                "age": 30,
            }))
            .to_request();
        let user: User = actix_test::call_and_read_body_json(&$app, request).await;
        user
    }};
}

#[actix_rt::test]
async fn empty_store_lists_an_empty_collection() {
    let (_guard, state) = flow_state();
    let app = flow_app!(state);

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/users")
        .to_request();
    let users: Vec<User> = actix_test::call_and_read_body_json(&app, request).await;
    assert!(users.is_empty());
}

#[actix_rt::test]
async fn creating_three_and_deleting_one_lists_two() {
    let (_guard, state) = flow_state();
    let app = flow_app!(state);

    let ada = create_user!(app, "ada");
    let grace = create_user!(app, "grace");
    let edsger = create_user!(app, "edsger");

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/api/v1/users/{}", grace.id))
        .to_request();
    let remaining: Vec<User> = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(remaining.len(), 2);

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/users")
        .to_request();
    let listed: Vec<User> = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().any(|u| u.id == ada.id));
    assert!(listed.iter().any(|u| u.id == edsger.id));
    assert!(!listed.iter().any(|u| u.id == grace.id));
}

#[actix_rt::test]
async fn fetch_image_is_404_after_backing_bytes_vanish() {
    let (images_dir, state) = flow_state();
    let app = flow_app!(state);
    let ada = create_user!(app, "ada");

    let request = actix_test::TestRequest::put()
        .uri(&format!("/api/v1/users/{}/image", ada.id))
        .insert_header(("content-type", "image/png"))
        .set_payload(vec![1u8, 2, 3])
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Delete the blob file behind the store's back; the attachment metadata
    // on the record now dangles.
    for entry in std::fs::read_dir(images_dir.path()).expect("read blob dir") {
        let entry = entry.expect("dir entry");
        std::fs::remove_file(entry.path()).expect("remove blob file");
    }

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}/image", ada.id))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "not_found");
}

#[actix_rt::test]
async fn deleting_a_user_removes_its_blob_file() {
    let (images_dir, state) = flow_state();
    let app = flow_app!(state);
    let ada = create_user!(app, "ada");

    let request = actix_test::TestRequest::put()
        .uri(&format!("/api/v1/users/{}/image", ada.id))
        .insert_header(("content-type", "image/png"))
        .set_payload(vec![1u8, 2, 3])
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(std::fs::read_dir(images_dir.path()).expect("blob dir").count(), 1);

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/api/v1/users/{}", ada.id))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(std::fs::read_dir(images_dir.path()).expect("blob dir").count(), 0);
}
