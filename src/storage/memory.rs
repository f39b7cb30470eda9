//! In-memory inventory store for tests and demos.

use std::collections::HashMap;

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Category, NewProduct, Product, ProductDetail, ProductRef, ProductSummary};
use crate::storage::store::InventoryStore;

#[derive(Default)]
struct Tables {
    next_category_id: i64,
    next_product_id: i64,
    categories: HashMap<i64, Category>,
    products: HashMap<i64, Product>,
}

/// Inventory store keeping everything in process memory.
///
/// Mirrors the observable behavior of the PostgreSQL store: name-sorted
/// listings, case-insensitive name matching, and reference checks on writes.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let tables = self.tables.lock().await;
        let mut categories: Vec<Category> = tables.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn find_category(&self, id: i64) -> Result<Option<Category>> {
        let tables = self.tables.lock().await;
        Ok(tables.categories.get(&id).cloned())
    }

    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        let needle = name.to_lowercase();
        let tables = self.tables.lock().await;
        Ok(tables
            .categories
            .values()
            .find(|category| category.name.to_lowercase() == needle)
            .cloned())
    }

    async fn create_category(&self, name: &str) -> Result<Category> {
        let mut tables = self.tables.lock().await;
        tables.next_category_id += 1;
        let category = Category {
            id: tables.next_category_id,
            name: name.to_string(),
        };
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn update_category(&self, id: i64, name: &str) -> Result<bool> {
        let mut tables = self.tables.lock().await;
        match tables.categories.get_mut(&id) {
            Some(category) => {
                category.name = name.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_category(&self, id: i64) -> Result<()> {
        let mut tables = self.tables.lock().await;
        // Same restriction the FK enforces in PostgreSQL.
        if tables.products.values().any(|p| p.category_id == id) {
            bail!("category {} is still referenced by products", id);
        }
        tables.categories.remove(&id);
        Ok(())
    }

    async fn count_categories(&self) -> Result<i64> {
        let tables = self.tables.lock().await;
        Ok(tables.categories.len() as i64)
    }

    async fn list_products(&self) -> Result<Vec<ProductSummary>> {
        let tables = self.tables.lock().await;
        let mut products: Vec<ProductSummary> = tables
            .products
            .values()
            .map(|product| {
                let category_name = tables
                    .categories
                    .get(&product.category_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                ProductSummary {
                    id: product.id,
                    name: product.name.clone(),
                    category_name,
                }
            })
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn find_product(&self, id: i64) -> Result<Option<ProductDetail>> {
        let tables = self.tables.lock().await;
        let Some(product) = tables.products.get(&id) else {
            return Ok(None);
        };
        let Some(category) = tables.categories.get(&product.category_id) else {
            bail!("product {} references missing category", id);
        };
        Ok(Some(ProductDetail {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            category: category.clone(),
            price: product.price,
            quantity_in_stock: product.quantity_in_stock,
        }))
    }

    async fn find_products_by_category(&self, category_id: i64) -> Result<Vec<ProductRef>> {
        let tables = self.tables.lock().await;
        let mut products: Vec<ProductRef> = tables
            .products
            .values()
            .filter(|product| product.category_id == category_id)
            .map(|product| ProductRef {
                id: product.id,
                name: product.name.clone(),
            })
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn create_product(&self, new_product: &NewProduct) -> Result<Product> {
        let mut tables = self.tables.lock().await;
        if !tables.categories.contains_key(&new_product.category_id) {
            bail!("category {} does not exist", new_product.category_id);
        }
        tables.next_product_id += 1;
        let product = Product {
            id: tables.next_product_id,
            name: new_product.name.clone(),
            description: new_product.description.clone(),
            category_id: new_product.category_id,
            price: new_product.price,
            quantity_in_stock: new_product.quantity_in_stock,
        };
        tables.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: i64, new_product: &NewProduct) -> Result<bool> {
        let mut tables = self.tables.lock().await;
        if !tables.categories.contains_key(&new_product.category_id) {
            bail!("category {} does not exist", new_product.category_id);
        }
        match tables.products.get_mut(&id) {
            Some(product) => {
                product.name = new_product.name.clone();
                product.description = new_product.description.clone();
                product.category_id = new_product.category_id;
                product.price = new_product.price;
                product.quantity_in_stock = new_product.quantity_in_stock;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_product(&self, id: i64) -> Result<()> {
        let mut tables = self.tables.lock().await;
        tables.products.remove(&id);
        Ok(())
    }

    async fn count_products(&self) -> Result<i64> {
        let tables = self.tables.lock().await;
        Ok(tables.products.len() as i64)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
