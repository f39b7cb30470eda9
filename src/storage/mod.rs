//! Inventory persistence: the store contract and its implementations.

pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use store::InventoryStore;
