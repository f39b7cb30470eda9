//! PostgreSQL-backed inventory store.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::domain::{Category, NewProduct, Product, ProductDetail, ProductRef, ProductSummary};
use crate::infra::config;
use crate::storage::store::InventoryStore;

/// Inventory store over a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connects using `DATABASE_URL` and prepares the schema.
    pub async fn connect() -> Result<Self> {
        dotenv::dotenv().ok();
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&config::database_url())
            .await?;
        Self::with_pool(pool).await
    }

    /// Wraps an existing pool and prepares the schema.
    pub async fn with_pool(pool: PgPool) -> Result<Self> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS categories (
                id   BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await?;
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS products (
                id                BIGSERIAL PRIMARY KEY,
                name              TEXT NOT NULL,
                description       TEXT NOT NULL,
                category_id       BIGINT NOT NULL REFERENCES categories(id) ON DELETE RESTRICT,
                price             DOUBLE PRECISION NOT NULL,
                quantity_in_stock BIGINT NOT NULL
            )",
        )
        .execute(&pool)
        .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl InventoryStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(categories)
    }

    async fn find_category(&self, id: i64) -> Result<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(category)
    }

    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name FROM categories WHERE LOWER(name) = LOWER($1)",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(category)
    }

    async fn create_category(&self, name: &str) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(category)
    }

    async fn update_category(&self, id: i64, name: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE categories SET name = $2 WHERE id = $1")
            .bind(id)
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_category(&self, id: i64) -> Result<()> {
        // The FK on products is ON DELETE RESTRICT; a referenced category
        // surfaces here as a constraint violation.
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn count_categories(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn list_products(&self) -> Result<Vec<ProductSummary>> {
        let products = sqlx::query_as::<_, ProductSummary>(
            "SELECT p.id, p.name, c.name AS category_name
             FROM products p
             JOIN categories c ON c.id = p.category_id
             ORDER BY p.name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    async fn find_product(&self, id: i64) -> Result<Option<ProductDetail>> {
        let row = sqlx::query(
            "SELECT p.id, p.name, p.description, p.price, p.quantity_in_stock,
                    c.id AS category_id, c.name AS category_name
             FROM products p
             JOIN categories c ON c.id = p.category_id
             WHERE p.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(ProductDetail {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            category: Category {
                id: row.try_get("category_id")?,
                name: row.try_get("category_name")?,
            },
            price: row.try_get("price")?,
            quantity_in_stock: row.try_get("quantity_in_stock")?,
        }))
    }

    async fn find_products_by_category(&self, category_id: i64) -> Result<Vec<ProductRef>> {
        let products = sqlx::query_as::<_, ProductRef>(
            "SELECT id, name FROM products WHERE category_id = $1 ORDER BY name ASC",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    async fn create_product(&self, new_product: &NewProduct) -> Result<Product> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, description, category_id, price, quantity_in_stock)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, name, description, category_id, price, quantity_in_stock",
        )
        .bind(&new_product.name)
        .bind(&new_product.description)
        .bind(new_product.category_id)
        .bind(new_product.price)
        .bind(new_product.quantity_in_stock)
        .fetch_one(&self.pool)
        .await?;
        Ok(product)
    }

    async fn update_product(&self, id: i64, new_product: &NewProduct) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE products
             SET name = $2, description = $3, category_id = $4, price = $5,
                 quantity_in_stock = $6
             WHERE id = $1",
        )
        .bind(id)
        .bind(&new_product.name)
        .bind(&new_product.description)
        .bind(new_product.category_id)
        .bind(new_product.price)
        .bind(new_product.quantity_in_stock)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_product(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn count_products(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
