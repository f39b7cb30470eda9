//! Product records, their resolved views, and the form draft.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::category::Category;
use crate::domain::validate::{self, FieldError};

/// A product row as stored. `category_id` references exactly one category;
/// the store refuses writes whose reference does not resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category_id: i64,
    pub price: f64,
    pub quantity_in_stock: i64,
}

impl Product {
    /// Path of this product's detail page.
    pub fn url(&self) -> String {
        format!("/inventory/product/{}", self.id)
    }
}

/// A product with its category reference resolved to the full record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetail {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub price: f64,
    pub quantity_in_stock: i64,
}

/// List-page view: product name plus the resolved category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub category_name: String,
}

/// Name-only reference used when listing the products inside one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ProductRef {
    pub id: i64,
    pub name: String,
}

/// A validated draft ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub category_id: i64,
    pub price: f64,
    pub quantity_in_stock: i64,
}

/// Raw form values for creating or updating a product.
///
/// `categories` holds every submitted selection, already normalized: an
/// absent field is an empty list, a single checkbox a one-element list.
/// Values stay as text so a failed validation echoes them back verbatim.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity_in_stock: String,
    pub categories: Vec<String>,
}

impl ProductDraft {
    /// Trims and checks every field, collecting all errors rather than
    /// stopping at the first. The record keeps exactly one category
    /// reference; the first selected id wins.
    pub fn validate(&self) -> Result<NewProduct, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = validate::required(&mut errors, "name", &self.name, "Name must not be empty.");
        if name.chars().count() > 100 {
            errors.push(FieldError::new(
                "name",
                "Name must not exceed 100 characters.",
            ));
        }
        let description = validate::required(
            &mut errors,
            "description",
            &self.description,
            "Description must not be empty.",
        );
        let price_text =
            validate::required(&mut errors, "price", &self.price, "Price must not be empty.");
        let quantity_text = validate::required(
            &mut errors,
            "quantity_in_stock",
            &self.quantity_in_stock,
            "Quantity in stock must not be empty.",
        );
        let price =
            validate::numeric::<f64>(&mut errors, "price", &price_text, "Price must be a number.");
        let quantity = validate::numeric::<i64>(
            &mut errors,
            "quantity_in_stock",
            &quantity_text,
            "Quantity in stock must be a whole number.",
        );

        // Every submitted entry must be a record id; a blank or non-numeric
        // value fails the selection rather than being dropped.
        let selected = self.selected_ids();
        let category_id = if selected.is_empty() || selected.len() != self.categories.len() {
            errors.push(FieldError::new(
                "category",
                "Product must be in at least one category.",
            ));
            None
        } else {
            Some(selected[0])
        };

        if let (Some(price), Some(quantity_in_stock), Some(category_id)) =
            (price, quantity, category_id)
        {
            if errors.is_empty() {
                return Ok(NewProduct {
                    name,
                    description,
                    category_id,
                    price,
                    quantity_in_stock,
                });
            }
        }
        Err(errors)
    }

    /// Ids of the submitted selections that parse as record ids.
    pub fn selected_ids(&self) -> Vec<i64> {
        self.categories
            .iter()
            .filter_map(|value| value.trim().parse().ok())
            .collect()
    }
}
