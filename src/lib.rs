pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::{Category, CategoryDraft, Product, ProductDetail, ProductDraft};
pub use storage::{InventoryStore, MemoryStore, PgStore};
pub use transport::http::{create_router, AppState, HtmlRenderer, TemplateRenderer};
