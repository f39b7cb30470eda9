//! Centralized configuration (environment variables + defaults).

/// Database URL must be provided (no default) for safety.
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set")
}

/// Listen address for the HTTP server.
pub fn http_addr() -> String {
    std::env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
