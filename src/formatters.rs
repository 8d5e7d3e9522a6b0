use crate::models::{Product, SortKey};
use crate::store::{Inventory, PriceChange, StockChange};

pub const EMPTY_INVENTORY_MESSAGE: &str = "Inventory is empty.";

pub fn format_product_line(name: &str, product: &Product, currency: &str) -> String {
    format!(
        "Name: {name}, Category: {}, Brand: {}, Price: {currency}{:.2}, Quantity: {}",
        product.category, product.brand, product.price, product.quantity
    )
}

fn push_rows<'a>(
    output: &mut String,
    rows: impl IntoIterator<Item = (&'a str, &'a Product)>,
    currency: &str,
) {
    for (name, product) in rows {
        output.push_str(&format_product_line(name, product, currency));
        output.push('\n');
    }
}

/// Full listing in name order, or the empty message
pub fn format_inventory(inventory: &Inventory, currency: &str) -> String {
    if inventory.is_empty() {
        return format!("{EMPTY_INVENTORY_MESSAGE}\n");
    }

    let mut output = String::from("Current Inventory:\n");
    push_rows(&mut output, inventory.iter(), currency);
    output
}

pub fn format_sorted_inventory(key: SortKey, rows: &[(&str, &Product)], currency: &str) -> String {
    let mut output = format!("Sorted Inventory by {}:\n", key.label());
    push_rows(&mut output, rows.iter().copied(), currency);
    output
}

/// User message for a completed stock change
pub fn format_stock_change(change: &StockChange, currency: &str) -> String {
    let base = format!(
        "{} {} {} the quantity of '{}'",
        change.direction.verb(),
        change.delta,
        change.direction.preposition(),
        change.name
    );

    match &change.price {
        PriceChange::Unchanged => {
            format!("{base} without changing the price. New quantity: {}.", change.quantity)
        }
        PriceChange::Updated(price) => format!(
            "{base} and updated price to {currency}{price:.2}. New quantity: {}.",
            change.quantity
        ),
        PriceChange::Rejected(_) => format!("{base}. New quantity: {}.", change.quantity),
    }
}
