//! Inventory Tracker
//!
//! Keeps named products (price, quantity, category, brand) in memory, persists
//! them to a flat comma-separated text file and drives everything from an
//! interactive numbered menu.

pub mod app;
pub mod error;
pub mod formatters;
pub mod io;
pub mod models;
pub mod prompt;
pub mod store;

pub use app::{AppConfig, InventoryApp, MenuChoice};
pub use error::{InventoryError, Result};
pub use io::{load_inventory, save_inventory, LoadPolicy};
pub use models::{Direction, PriceUpdate, Product, SortKey};
pub use store::{Inventory, PriceChange, StockChange};
