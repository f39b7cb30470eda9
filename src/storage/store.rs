//! Data-access contract consumed by the HTTP handlers.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{Category, NewProduct, Product, ProductDetail, ProductRef, ProductSummary};

/// Queries and writes used by the inventory handlers.
///
/// Implementations are shared across requests behind an `Arc`, so every
/// method takes `&self`. Reads that a handler issues together must be safe
/// to run concurrently.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// All categories ordered by name ascending.
    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn find_category(&self, id: i64) -> Result<Option<Category>>;

    /// Case-insensitive name match, the collation-style equality used by the
    /// duplicate check on category creation.
    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>>;

    async fn create_category(&self, name: &str) -> Result<Category>;

    /// Returns `false` when no category with `id` exists.
    async fn update_category(&self, id: i64, name: &str) -> Result<bool>;

    /// Fails while products still reference the category.
    async fn delete_category(&self, id: i64) -> Result<()>;

    async fn count_categories(&self) -> Result<i64>;

    /// All products ordered by name ascending, category names resolved.
    async fn list_products(&self) -> Result<Vec<ProductSummary>>;

    /// One product with its category reference resolved.
    async fn find_product(&self, id: i64) -> Result<Option<ProductDetail>>;

    /// Name-only references to the products in one category.
    async fn find_products_by_category(&self, category_id: i64) -> Result<Vec<ProductRef>>;

    async fn create_product(&self, new_product: &NewProduct) -> Result<Product>;

    /// Returns `false` when no product with `id` exists.
    async fn update_product(&self, id: i64, new_product: &NewProduct) -> Result<bool>;

    /// Removing an absent product is a no-op, not an error.
    async fn delete_product(&self, id: i64) -> Result<()>;

    async fn count_products(&self) -> Result<i64>;

    /// Cheap connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<()>;
}
