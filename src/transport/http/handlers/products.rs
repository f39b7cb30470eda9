//! Product route handlers, including the inventory index page.

use axum::extract::{Path, RawForm, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde_json::json;

use crate::domain::ProductDraft;
use crate::transport::http::error::WebError;
use crate::transport::http::forms;
use crate::transport::http::types::{category_choices, AppState};

/// GET /inventory
pub async fn index(State(state): State<AppState>) -> Result<Response, WebError> {
    let (category_count, product_count) = tokio::try_join!(
        state.store.count_categories(),
        state.store.count_products(),
    )?;
    let page = state.renderer.render(
        "index",
        &json!({
            "title": "Inventory Management",
            "category_count": category_count,
            "product_count": product_count,
        }),
    )?;
    Ok(Html(page).into_response())
}

/// GET /inventory/products
pub async fn product_list(State(state): State<AppState>) -> Result<Response, WebError> {
    let products = state.store.list_products().await?;
    let page = state.renderer.render(
        "product_list",
        &json!({ "title": "Product List", "product_list": products }),
    )?;
    Ok(Html(page).into_response())
}

/// GET /inventory/product/:id
pub async fn product_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let product = state
        .store
        .find_product(id)
        .await?
        .ok_or(WebError::NotFound("Product"))?;
    let page = state.renderer.render(
        "product_detail",
        &json!({ "title": product.name.clone(), "product": product }),
    )?;
    Ok(Html(page).into_response())
}

/// GET /inventory/product/create
pub async fn product_create_get(State(state): State<AppState>) -> Result<Response, WebError> {
    let categories = state.store.list_categories().await?;
    let page = state.renderer.render(
        "product_form",
        &json!({
            "title": "Create Product",
            "categories": category_choices(categories, &[]),
        }),
    )?;
    Ok(Html(page).into_response())
}

/// POST /inventory/product/create
pub async fn product_create_post(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> Result<Response, WebError> {
    let draft = forms::product_draft(forms::form_pairs(&body)?);
    let new_product = match draft.validate() {
        Ok(new_product) => new_product,
        Err(errors) => {
            return render_product_form(&state, "Create Product", draft, errors).await;
        }
    };
    let product = state.store.create_product(&new_product).await?;
    tracing::info!(id = product.id, "product created");
    Ok(Redirect::to(&product.url()).into_response())
}

/// GET /inventory/product/:id/update
pub async fn product_update_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let (product, categories) = tokio::try_join!(
        state.store.find_product(id),
        state.store.list_categories(),
    )?;
    let product = product.ok_or(WebError::NotFound("Product"))?;
    let choices = category_choices(categories, &[product.category.id]);
    let page = state.renderer.render(
        "product_form",
        &json!({
            "title": "Update Product",
            "categories": choices,
            "product": product,
        }),
    )?;
    Ok(Html(page).into_response())
}

/// POST /inventory/product/:id/update
pub async fn product_update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    RawForm(body): RawForm,
) -> Result<Response, WebError> {
    let draft = forms::product_draft(forms::form_pairs(&body)?);
    let new_product = match draft.validate() {
        Ok(new_product) => new_product,
        Err(errors) => {
            return render_product_form(&state, "Update Product", draft, errors).await;
        }
    };
    if !state.store.update_product(id, &new_product).await? {
        return Err(WebError::NotFound("Product"));
    }
    Ok(Redirect::to(&format!("/inventory/product/{id}")).into_response())
}

/// GET /inventory/product/:id/delete
pub async fn product_delete_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    // Nothing to confirm when the record is already gone.
    let Some(product) = state.store.find_product(id).await? else {
        return Ok(Redirect::to("/inventory/products").into_response());
    };
    let page = state.renderer.render(
        "product_delete",
        &json!({ "title": "Delete Product", "product": product }),
    )?;
    Ok(Html(page).into_response())
}

/// POST /inventory/product/:id/delete
///
/// Unconditional: nothing references products, so there is no guard.
pub async fn product_delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    state.store.delete_product(id).await?;
    tracing::info!(id, "product deleted");
    Ok(Redirect::to("/inventory/products").into_response())
}

/// Re-renders the product form with the echoed draft, the collected errors,
/// and the full category list with the submitted selection marked.
async fn render_product_form(
    state: &AppState,
    title: &str,
    draft: ProductDraft,
    errors: Vec<crate::domain::FieldError>,
) -> Result<Response, WebError> {
    let categories = state.store.list_categories().await?;
    let choices = category_choices(categories, &draft.selected_ids());
    let page = state.renderer.render(
        "product_form",
        &json!({
            "title": title,
            "categories": choices,
            "product": draft,
            "errors": errors,
        }),
    )?;
    Ok(Html(page).into_response())
}
