//! Reading and writing the inventory file.
//!
//! One product per line: `name,price,quantity,category,brand`. No header and
//! no quoting, so field values must not contain commas.

use crate::error::{InventoryError, Result};
use crate::models::{Product, ProductRecord};
use crate::store::Inventory;
use csv::StringRecord;
use log::{debug, info, warn};
use std::fs::File;
use std::io;
use std::path::Path;

/// Number of fields on every line
pub const FIELD_COUNT: usize = 5;

/// How the loader reacts to a malformed line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Any bad line fails the whole load
    #[default]
    Strict,
    /// Bad lines are logged and skipped
    SkipInvalid,
}

/// Loads the inventory file at `path`.
///
/// A missing file is reported as [`InventoryError::FileNotFound`]. Under
/// [`LoadPolicy::Strict`] the first malformed line aborts the load. Blank lines
/// are ignored and a repeated name keeps the last line's values.
pub fn load_inventory<P: AsRef<Path>>(path: P, policy: LoadPolicy) -> Result<Inventory> {
    let path = path.as_ref();
    debug!("Loading inventory from {}", path.display());

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(InventoryError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut inventory = Inventory::new();
    let mut skipped = 0;

    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if policy == LoadPolicy::SkipInvalid => {
                warn!("Skipping unreadable line: {e}");
                skipped += 1;
                continue;
            }
            Err(e) => {
                warn!("Aborting load of {}: {e}", path.display());
                return Err(e.into());
            }
        };
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();

        match parse_record(&record, line) {
            Ok((name, product)) => inventory.upsert(name, product),
            Err(e) => match policy {
                LoadPolicy::Strict => {
                    warn!("Aborting load of {}: {e}", path.display());
                    return Err(e);
                }
                LoadPolicy::SkipInvalid => {
                    warn!("Skipping line: {e}");
                    skipped += 1;
                }
            },
        }
    }

    info!(
        "Loaded {} products from {} ({} lines skipped)",
        inventory.len(),
        path.display(),
        skipped
    );
    Ok(inventory)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<(String, Product)> {
    let malformed = |reason: String| InventoryError::MalformedLine { line, reason };

    if record.len() != FIELD_COUNT {
        return Err(malformed(format!(
            "expected {FIELD_COUNT} fields, found {}",
            record.len()
        )));
    }

    let parsed: ProductRecord = record
        .deserialize(None)
        .map_err(|e| malformed(e.to_string()))?;

    if parsed.name.is_empty() {
        return Err(malformed("product name is empty".to_string()));
    }
    if !parsed.price.is_finite() || parsed.price < 0.0 {
        return Err(malformed(format!("invalid price {}", parsed.price)));
    }

    Ok(parsed.into_entry())
}

/// Overwrites `path` with every product in name order. Returns the number of
/// lines written.
pub fn save_inventory<P: AsRef<Path>>(path: P, inventory: &Inventory) -> Result<usize> {
    let path = path.as_ref();
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)?;

    for (name, product) in inventory.iter() {
        wtr.serialize(ProductRecord::from_product(name, product))?;
    }
    wtr.flush()?;

    info!("Saved {} products to {}", inventory.len(), path.display());
    Ok(inventory.len())
}
