pub mod error;
pub mod forms;
pub mod render;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod categories;
    pub mod health;
    pub mod products;
}

pub use error::WebError;
pub use render::{HtmlRenderer, TemplateRenderer};
pub use router::create_router;
pub use types::AppState;
