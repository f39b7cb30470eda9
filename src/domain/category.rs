//! Category records and their form draft.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::validate::{self, FieldError};

/// A product category. Names are unique case-insensitively; the store is
/// queried with a case-folding match before any insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    /// Path of this category's detail page.
    pub fn url(&self) -> String {
        format!("/inventory/category/{}", self.id)
    }
}

/// Raw form values for creating or updating a category.
///
/// Kept exactly as submitted so a failed validation can re-render the form
/// without discarding what the user typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
}

impl CategoryDraft {
    /// Trims the name and collects every rule violation.
    /// Returns the trimmed name when the draft is valid.
    pub fn validate(&self) -> Result<String, Vec<FieldError>> {
        let mut errors = Vec::new();
        let name = validate::required(&mut errors, "name", &self.name, "Name must not be empty.");
        if errors.is_empty() {
            Ok(name)
        } else {
            Err(errors)
        }
    }
}
