//! Route-level tests for the category handlers, driven against the
//! in-memory store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use stockroom::{create_router, AppState, HtmlRenderer, InventoryStore, MemoryStore};

fn test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), Arc::new(HtmlRenderer));
    (create_router(state), store)
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response) -> String {
    response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn create_inserts_and_redirects_to_new_record() {
    let (app, store) = test_app();

    let response = post_form(&app, "/inventory/category/create", "name=Tools").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let target = location(&response);

    let response = get(&app, &target).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Tools"));
    assert_eq!(store.count_categories().await.unwrap(), 1);
}

#[tokio::test]
async fn duplicate_name_redirects_to_existing_record() {
    let (app, store) = test_app();
    let existing = store.create_category("Tools").await.unwrap();

    let response = post_form(&app, "/inventory/category/create", "name=tOOls").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        format!("/inventory/category/{}", existing.id)
    );
    assert_eq!(store.count_categories().await.unwrap(), 1);
}

#[tokio::test]
async fn blank_name_rerenders_form_with_one_error() {
    let (app, store) = test_app();

    let response = post_form(&app, "/inventory/category/create", "name=++").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Name must not be empty."));
    assert_eq!(body.matches("<li>").count(), 1);
    assert_eq!(store.count_categories().await.unwrap(), 0);
}

#[tokio::test]
async fn detail_shows_referencing_products() {
    let (app, store) = test_app();
    let category = store.create_category("Hardware").await.unwrap();
    store
        .create_product(&new_product("Claw Hammer", category.id))
        .await
        .unwrap();

    let response = get(&app, &format!("/inventory/category/{}", category.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Hardware"));
    assert!(body.contains("Claw Hammer"));
}

#[tokio::test]
async fn detail_for_missing_category_is_not_found() {
    let (app, _store) = test_app();
    let response = get(&app, "/inventory/category/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Category not found"));
}

#[tokio::test]
async fn update_prefills_then_renames() {
    let (app, store) = test_app();
    let category = store.create_category("Grden").await.unwrap();

    let response = get(&app, &format!("/inventory/category/{}/update", category.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("value=\"Grden\""));

    let response = post_form(
        &app,
        &format!("/inventory/category/{}/update", category.id),
        "name=Garden",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        format!("/inventory/category/{}", category.id)
    );
    let renamed = store.find_category(category.id).await.unwrap().unwrap();
    assert_eq!(renamed.name, "Garden");
}

#[tokio::test]
async fn update_of_missing_category_is_not_found() {
    let (app, _store) = test_app();
    let response = get(&app, "/inventory/category/7/update").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_form(&app, "/inventory/category/7/update", "name=Garden").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_is_refused_while_products_reference_the_category() {
    let (app, store) = test_app();
    let category = store.create_category("Hardware").await.unwrap();
    store
        .create_product(&new_product("Claw Hammer", category.id))
        .await
        .unwrap();

    let response = post_form(
        &app,
        &format!("/inventory/category/{}/delete", category.id),
        "",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("Delete the following products"));
    assert_eq!(
        store
            .find_products_by_category(category.id)
            .await
            .unwrap()
            .len(),
        1
    );
    assert!(store.find_category(category.id).await.unwrap().is_some());
}

#[tokio::test]
async fn delete_of_unreferenced_category_removes_it() {
    let (app, store) = test_app();
    let category = store.create_category("Seasonal").await.unwrap();

    let response = post_form(
        &app,
        &format!("/inventory/category/{}/delete", category.id),
        "",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/inventory/categories");

    let response = get(&app, &format!("/inventory/category/{}", category.id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_get_for_missing_category_redirects_to_list() {
    let (app, _store) = test_app();
    let response = get(&app, "/inventory/category/999/delete").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/inventory/categories");
}

#[tokio::test]
async fn list_is_sorted_by_name() {
    let (app, store) = test_app();
    store.create_category("Plumbing").await.unwrap();
    store.create_category("Electrical").await.unwrap();

    let response = get(&app, "/inventory/categories").await;
    let body = body_text(response).await;
    let electrical = body.find("Electrical").unwrap();
    let plumbing = body.find("Plumbing").unwrap();
    assert!(electrical < plumbing);
}

fn new_product(name: &str, category_id: i64) -> stockroom::domain::NewProduct {
    stockroom::domain::NewProduct {
        name: name.to_string(),
        description: "test product".to_string(),
        category_id,
        price: 9.99,
        quantity_in_stock: 3,
    }
}
