//! Category route handlers.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde_json::json;

use crate::domain::CategoryDraft;
use crate::transport::http::error::WebError;
use crate::transport::http::types::AppState;

/// GET /inventory/categories
pub async fn category_list(State(state): State<AppState>) -> Result<Response, WebError> {
    let categories = state.store.list_categories().await?;
    let page = state.renderer.render(
        "category_list",
        &json!({ "title": "Category List", "category_list": categories }),
    )?;
    Ok(Html(page).into_response())
}

/// GET /inventory/category/:id
pub async fn category_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    // The category and its products are independent reads; issue them together.
    let (category, products) = tokio::try_join!(
        state.store.find_category(id),
        state.store.find_products_by_category(id),
    )?;
    let category = category.ok_or(WebError::NotFound("Category"))?;
    let page = state.renderer.render(
        "category_detail",
        &json!({
            "title": category.name.clone(),
            "category": category,
            "category_products": products,
        }),
    )?;
    Ok(Html(page).into_response())
}

/// GET /inventory/category/create
pub async fn category_create_get(State(state): State<AppState>) -> Result<Response, WebError> {
    let page = state
        .renderer
        .render("category_form", &json!({ "title": "Create Category" }))?;
    Ok(Html(page).into_response())
}

/// POST /inventory/category/create
pub async fn category_create_post(
    State(state): State<AppState>,
    Form(draft): Form<CategoryDraft>,
) -> Result<Response, WebError> {
    let name = match draft.validate() {
        Ok(name) => name,
        Err(errors) => {
            let page = state.renderer.render(
                "category_form",
                &json!({ "title": "Create Category", "category": draft, "errors": errors }),
            )?;
            return Ok(Html(page).into_response());
        }
    };

    // A case-insensitive match means the record already exists; point the
    // client at it instead of inserting a duplicate.
    if let Some(existing) = state.store.find_category_by_name(&name).await? {
        return Ok(Redirect::to(&existing.url()).into_response());
    }
    let category = state.store.create_category(&name).await?;
    tracing::info!(id = category.id, "category created");
    Ok(Redirect::to(&category.url()).into_response())
}

/// GET /inventory/category/:id/update
pub async fn category_update_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let category = state
        .store
        .find_category(id)
        .await?
        .ok_or(WebError::NotFound("Category"))?;
    let page = state.renderer.render(
        "category_form",
        &json!({ "title": "Update Category", "category": category }),
    )?;
    Ok(Html(page).into_response())
}

/// POST /inventory/category/:id/update
pub async fn category_update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(draft): Form<CategoryDraft>,
) -> Result<Response, WebError> {
    let name = match draft.validate() {
        Ok(name) => name,
        Err(errors) => {
            let page = state.renderer.render(
                "category_form",
                &json!({ "title": "Update Category", "category": draft, "errors": errors }),
            )?;
            return Ok(Html(page).into_response());
        }
    };
    if !state.store.update_category(id, &name).await? {
        return Err(WebError::NotFound("Category"));
    }
    Ok(Redirect::to(&format!("/inventory/category/{id}")).into_response())
}

/// GET /inventory/category/:id/delete
pub async fn category_delete_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let (category, products) = tokio::try_join!(
        state.store.find_category(id),
        state.store.find_products_by_category(id),
    )?;
    // Nothing to confirm when the record is already gone.
    let Some(category) = category else {
        return Ok(Redirect::to("/inventory/categories").into_response());
    };
    let page = state.renderer.render(
        "category_delete",
        &json!({
            "title": "Delete Category",
            "category": category,
            "category_products": products,
        }),
    )?;
    Ok(Html(page).into_response())
}

/// POST /inventory/category/:id/delete
pub async fn category_delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let (category, products) = tokio::try_join!(
        state.store.find_category(id),
        state.store.find_products_by_category(id),
    )?;
    let Some(category) = category else {
        return Ok(Redirect::to("/inventory/categories").into_response());
    };
    // Refuse while products still reference the category.
    if !products.is_empty() {
        tracing::info!(id, blocked_by = products.len(), "category delete refused");
        let page = state.renderer.render(
            "category_delete",
            &json!({
                "title": "Delete Category",
                "category": category,
                "category_products": products,
            }),
        )?;
        return Ok(Html(page).into_response());
    }
    state.store.delete_category(id).await?;
    tracing::info!(id, "category deleted");
    Ok(Redirect::to("/inventory/categories").into_response())
}
