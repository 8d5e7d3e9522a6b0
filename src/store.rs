//! In-memory product store.
//!
//! Products are keyed by name and kept in ascending name order, which is also
//! the order used when saving and the tiebreak for sorted views.
//! Every operation either applies fully or leaves the store untouched; the one
//! exception is a rejected price text in [`Inventory::adjust_quantity_with_input`],
//! where the stock change still goes through.

use crate::error::{InventoryError, Result};
use crate::models::{Direction, PriceUpdate, Product, SortKey};
use log::debug;
use std::collections::BTreeMap;

/// What happened to the price during a stock change
#[derive(Debug, Clone, PartialEq)]
pub enum PriceChange {
    Unchanged,
    Updated(f64),
    /// Price text could not be parsed; the stored price was kept
    Rejected(String),
}

/// Result of a successful stock change
#[derive(Debug, Clone, PartialEq)]
pub struct StockChange {
    pub name: String,
    pub direction: Direction,
    pub delta: u32,
    /// Quantity after the change
    pub quantity: u32,
    pub price: PriceChange,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    products: BTreeMap<String, Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.get(name.trim())
    }

    /// Iterates products in ascending name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Product)> {
        self.products.iter().map(|(name, product)| (name.as_str(), product))
    }

    /// Inserts or replaces a record without validation. Used by the loader,
    /// where a repeated name keeps the last value.
    pub(crate) fn upsert(&mut self, name: String, product: Product) {
        if self.products.insert(name.clone(), product).is_some() {
            debug!("Replaced earlier record for '{name}'");
        }
    }

    /// Adds a new product. The name is trimmed and must be non-empty and unused;
    /// category and brand are trimmed as well, matching what the loader reads back.
    pub fn add(
        &mut self,
        name: &str,
        price: f64,
        quantity: u32,
        category: &str,
        brand: &str,
    ) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InventoryError::EmptyName);
        }
        if self.products.contains_key(name) {
            return Err(InventoryError::DuplicateProduct(name.to_string()));
        }
        validate_price(price)?;

        debug!("Adding '{name}': price={price}, quantity={quantity}");
        let product = Product::new(price, quantity, category.trim(), brand.trim());
        self.products.insert(name.to_string(), product);
        Ok(())
    }

    /// Removes a product and returns its record
    pub fn remove(&mut self, name: &str) -> Result<Product> {
        let name = name.trim();
        let removed = self
            .products
            .remove(name)
            .ok_or_else(|| InventoryError::ProductNotFound(name.to_string()))?;
        debug!("Removed '{name}'");
        Ok(removed)
    }

    /// Moves stock by `delta` in `direction` and optionally replaces the price.
    ///
    /// Fails without touching the store if the product is missing, a decrease
    /// exceeds current stock, an increase overflows, or the price is invalid.
    pub fn adjust_quantity(
        &mut self,
        name: &str,
        delta: u32,
        direction: Direction,
        price: PriceUpdate,
    ) -> Result<StockChange> {
        let name = name.trim();
        if let PriceUpdate::Set(value) = price {
            validate_price(value)?;
        }

        let product = self
            .products
            .get_mut(name)
            .ok_or_else(|| InventoryError::ProductNotFound(name.to_string()))?;

        let quantity = match direction {
            Direction::Increase => {
                product
                    .quantity
                    .checked_add(delta)
                    .ok_or_else(|| InventoryError::QuantityOverflow {
                        name: name.to_string(),
                        requested: delta,
                    })?
            }
            Direction::Decrease => {
                product
                    .quantity
                    .checked_sub(delta)
                    .ok_or_else(|| InventoryError::InsufficientStock {
                        name: name.to_string(),
                        requested: delta,
                        available: product.quantity,
                    })?
            }
        };

        product.quantity = quantity;
        let price = match price {
            PriceUpdate::Keep => PriceChange::Unchanged,
            PriceUpdate::Set(value) => {
                product.price = value;
                PriceChange::Updated(value)
            }
        };

        debug!("Stock of '{name}' is now {quantity} ({direction:?} by {delta})");
        Ok(StockChange {
            name: name.to_string(),
            direction,
            delta,
            quantity,
            price,
        })
    }

    /// Like [`Inventory::adjust_quantity`] but takes the price as user text.
    ///
    /// Unparseable price text does not block the stock change: quantity is
    /// still applied and the result carries [`PriceChange::Rejected`].
    pub fn adjust_quantity_with_input(
        &mut self,
        name: &str,
        delta: u32,
        direction: Direction,
        price_input: &str,
    ) -> Result<StockChange> {
        match PriceUpdate::parse(price_input) {
            Ok(price) => self.adjust_quantity(name, delta, direction, price),
            Err(_) => {
                let mut change = self.adjust_quantity(name, delta, direction, PriceUpdate::Keep)?;
                change.price = PriceChange::Rejected(price_input.trim().to_string());
                Ok(change)
            }
        }
    }

    /// Returns all products ordered ascending by `key`.
    ///
    /// The sort is stable over name order, so ties stay in name order.
    pub fn sorted_by(&self, key: SortKey) -> Vec<(&str, &Product)> {
        let mut entries: Vec<(&str, &Product)> = self.iter().collect();
        match key {
            SortKey::Name => {}
            SortKey::Price => entries.sort_by(|a, b| a.1.price.total_cmp(&b.1.price)),
            SortKey::Quantity => entries.sort_by_key(|(_, p)| p.quantity),
            SortKey::Category => entries.sort_by(|a, b| a.1.category.cmp(&b.1.category)),
            SortKey::Brand => entries.sort_by(|a, b| a.1.brand.cmp(&b.1.brand)),
        }
        entries
    }

    /// Sorted view from user text. Emptiness is checked before the key.
    pub fn sort_view(&self, key_input: &str) -> Result<(SortKey, Vec<(&str, &Product)>)> {
        if self.is_empty() {
            return Err(InventoryError::InventoryEmpty);
        }
        let key: SortKey = key_input.parse()?;
        Ok((key, self.sorted_by(key)))
    }
}

fn validate_price(price: f64) -> Result<()> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(InventoryError::InvalidPrice(price.to_string()))
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
