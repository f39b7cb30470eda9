//! Domain entities and form validation for the inventory catalog.

pub mod category;
pub mod product;
pub mod validate;

pub use category::{Category, CategoryDraft};
pub use product::{NewProduct, Product, ProductDetail, ProductDraft, ProductRef, ProductSummary};
pub use validate::FieldError;
