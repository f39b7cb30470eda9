//! Raw form-body parsing.
//!
//! Browser checkbox groups submit the same field zero, one, or many times.
//! The typed `Form` extractor cannot express that, so product submissions
//! are decoded from the raw urlencoded pairs into a draft whose category
//! selection is always a list.

use anyhow::{Context, Result};

use crate::domain::ProductDraft;

/// Decodes an `application/x-www-form-urlencoded` body into key/value pairs,
/// keeping repeated keys.
pub fn form_pairs(body: &[u8]) -> Result<Vec<(String, String)>> {
    serde_urlencoded::from_bytes(body).context("malformed form body")
}

/// Builds a product draft from submitted pairs. Scalar fields keep the last
/// occurrence; every `category` occurrence is collected.
pub fn product_draft(pairs: Vec<(String, String)>) -> ProductDraft {
    let mut draft = ProductDraft::default();
    for (key, value) in pairs {
        match key.as_str() {
            "name" => draft.name = value,
            "description" => draft.description = value,
            "price" => draft.price = value,
            "quantity_in_stock" => draft.quantity_in_stock = value,
            "category" => draft.categories.push(value),
            _ => {}
        }
    }
    draft
}
