//! Error types for inventory_tracker

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for inventory operations
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Product name is not in the inventory
    #[error("Product '{0}' not found in inventory.")]
    ProductNotFound(String),
    /// Product name is already in the inventory
    #[error("Product '{0}' already exists in inventory.")]
    DuplicateProduct(String),
    /// Product name was blank
    #[error("Product name cannot be empty.")]
    EmptyName,
    /// Decrease would take stock below zero
    #[error("Insufficient quantity of '{name}' in stock. Cannot subtract {requested} (available: {available}).")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },
    /// Increase would exceed the representable quantity
    #[error("Quantity of '{name}' cannot be increased by {requested}.")]
    QuantityOverflow { name: String, requested: u32 },
    /// Price text is neither a non-negative number nor the keep-price token
    #[error("Invalid price format '{0}'. Price must be a non-negative number.")]
    InvalidPrice(String),
    /// Sort field is not one of the product fields
    #[error("Invalid sort key '{0}'. Use name, price, quantity, category or brand.")]
    UnknownSortKey(String),
    /// Stock change direction is neither add nor subtract
    #[error("Invalid action '{0}'. Please enter 'add' or 'subtract'.")]
    UnknownDirection(String),
    /// Operation needs at least one product
    #[error("Inventory is empty.")]
    InventoryEmpty,
    /// Inventory file does not exist
    #[error("Inventory file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    /// A line of the inventory file could not be parsed
    #[error("Invalid inventory file format at line {line}: {reason}")]
    MalformedLine { line: u64, reason: String },
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Delimited reader/writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
