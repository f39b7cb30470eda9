use crate::transport::http::handlers::{categories, health, products};
use axum::response::Redirect;
use axum::routing::get;
use axum::Router;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/inventory") }))
        .route("/health", get(health::healthcheck_handler))
        .route("/inventory", get(products::index))
        .route("/inventory/categories", get(categories::category_list))
        .route(
            "/inventory/category/create",
            get(categories::category_create_get).post(categories::category_create_post),
        )
        .route("/inventory/category/:id", get(categories::category_detail))
        .route(
            "/inventory/category/:id/update",
            get(categories::category_update_get).post(categories::category_update_post),
        )
        .route(
            "/inventory/category/:id/delete",
            get(categories::category_delete_get).post(categories::category_delete_post),
        )
        .route("/inventory/products", get(products::product_list))
        .route(
            "/inventory/product/create",
            get(products::product_create_get).post(products::product_create_post),
        )
        .route("/inventory/product/:id", get(products::product_detail))
        .route(
            "/inventory/product/:id/update",
            get(products::product_update_get).post(products::product_update_post),
        )
        .route(
            "/inventory/product/:id/delete",
            get(products::product_delete_get).post(products::product_delete_post),
        )
        .with_state(app_state)
}
