use crate::error::InventoryError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Token accepted in place of a price to keep the stored one
pub const KEEP_PRICE_TOKEN: &str = "sameprice";

/// A stocked product. The name is the key in [`crate::store::Inventory`].
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub price: f64,
    pub quantity: u32,
    pub category: String,
    pub brand: String,
}

impl Product {
    pub fn new(price: f64, quantity: u32, category: &str, brand: &str) -> Self {
        Self {
            price,
            quantity,
            category: category.to_string(),
            brand: brand.to_string(),
        }
    }
}

/// One line of the inventory file, in field order.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub category: String,
    pub brand: String,
}

impl ProductRecord {
    pub fn from_product(name: &str, product: &Product) -> Self {
        Self {
            name: name.to_string(),
            price: product.price,
            quantity: product.quantity,
            category: product.category.clone(),
            brand: product.brand.clone(),
        }
    }

    pub fn into_entry(self) -> (String, Product) {
        (
            self.name,
            Product {
                price: self.price,
                quantity: self.quantity,
                category: self.category,
                brand: self.brand,
            },
        )
    }
}

/// What to do with the stored price when stock changes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceUpdate {
    Keep,
    Set(f64),
}

impl PriceUpdate {
    /// Parse user input: blank or `sameprice` (any case) keeps the price,
    /// otherwise the text must be a non-negative number.
    pub fn parse(input: &str) -> Result<Self, InventoryError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(KEEP_PRICE_TOKEN) {
            return Ok(PriceUpdate::Keep);
        }

        match trimmed.parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => Ok(PriceUpdate::Set(price)),
            _ => Err(InventoryError::InvalidPrice(trimmed.to_string())),
        }
    }
}

/// Direction of a stock change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    /// Past-tense verb used in user messages
    pub fn verb(&self) -> &'static str {
        match self {
            Direction::Increase => "Added",
            Direction::Decrease => "Subtracted",
        }
    }

    /// Preposition linking the delta to the product in user messages
    pub fn preposition(&self) -> &'static str {
        match self {
            Direction::Increase => "to",
            Direction::Decrease => "from",
        }
    }
}

impl FromStr for Direction {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "increase" => Ok(Direction::Increase),
            "subtract" | "decrease" => Ok(Direction::Decrease),
            _ => Err(InventoryError::UnknownDirection(s.trim().to_string())),
        }
    }
}

/// Field a sorted view is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Price,
    Quantity,
    Category,
    Brand,
}

impl SortKey {
    /// Returns the lowercase field name (e.g., "price")
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::Quantity => "quantity",
            SortKey::Category => "category",
            SortKey::Brand => "brand",
        }
    }

    /// Returns the capitalized field name used in headings (e.g., "Price")
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Price => "Price",
            SortKey::Quantity => "Quantity",
            SortKey::Category => "Category",
            SortKey::Brand => "Brand",
        }
    }

    /// Returns all sort keys
    pub fn all() -> &'static [SortKey] {
        &[
            SortKey::Name,
            SortKey::Price,
            SortKey::Quantity,
            SortKey::Category,
            SortKey::Brand,
        ]
    }
}

impl FromStr for SortKey {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SortKey::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| InventoryError::UnknownSortKey(s.trim().to_string()))
    }
}
