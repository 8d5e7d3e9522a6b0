use inventory_tracker::error::InventoryError;
use inventory_tracker::io::{load_inventory, save_inventory, LoadPolicy};
use inventory_tracker::models::Product;
use inventory_tracker::store::Inventory;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

// Test fixtures - sample data for testing

fn create_sample_content() -> String {
    "Pen,10.0,100,Stationery,Acme\n\
     Notebook,45.5,20,Stationery,Classmate\n\
     Stapler,120,3,Office,Kangaro\n"
        .to_string()
}

fn create_content_with_short_line() -> String {
    "Pen,10.0,100,Stationery,Acme\n\
     Notebook,45.5,20,Stationery\n\
     Stapler,120,3,Office,Kangaro\n"
        .to_string()
}

fn sample_inventory() -> Inventory {
    let mut inventory = Inventory::new();
    inventory.add("Pen", 10.0, 100, "Stationery", "Acme").unwrap();
    inventory.add("Notebook", 45.5, 20, "Stationery", "Classmate").unwrap();
    inventory.add("Glue Stick", 0.75, 0, "Craft", "Fevistik").unwrap();
    inventory
}

fn write_temp(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{content}").unwrap();
    temp_file
}

// Tests for load_inventory

#[test]
fn test_load_valid_file() {
    let temp_file = write_temp(&create_sample_content());

    let inventory = load_inventory(temp_file.path(), LoadPolicy::Strict).unwrap();

    assert_eq!(inventory.len(), 3);
    assert_eq!(
        inventory.get("Pen"),
        Some(&Product::new(10.0, 100, "Stationery", "Acme"))
    );
    assert_eq!(inventory.get("Stapler").unwrap().price, 120.0);
}

#[test]
fn test_load_missing_file_reports_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("inventory.txt");

    let result = load_inventory(&path, LoadPolicy::Strict);

    assert!(matches!(result, Err(InventoryError::FileNotFound(p)) if p == path));
}

#[test]
fn test_load_short_line_discards_whole_file() {
    let temp_file = write_temp(&create_content_with_short_line());

    let result = load_inventory(temp_file.path(), LoadPolicy::Strict);

    assert!(matches!(
        result,
        Err(InventoryError::MalformedLine { line: 2, .. })
    ));
}

#[test]
fn test_load_non_numeric_quantity_is_malformed() {
    let temp_file = write_temp("Pen,10.0,lots,Stationery,Acme\n");

    let result = load_inventory(temp_file.path(), LoadPolicy::Strict);

    assert!(matches!(result, Err(InventoryError::MalformedLine { line: 1, .. })));
}

#[test]
fn test_load_negative_values_are_malformed() {
    for content in ["Pen,-1.0,5,Stationery,Acme\n", "Pen,1.0,-5,Stationery,Acme\n"] {
        let temp_file = write_temp(content);
        let result = load_inventory(temp_file.path(), LoadPolicy::Strict);
        assert!(
            matches!(result, Err(InventoryError::MalformedLine { .. })),
            "expected malformed line for {content:?}"
        );
    }
}

#[test]
fn test_load_skip_invalid_keeps_good_lines() {
    let temp_file = write_temp(&create_content_with_short_line());

    let inventory = load_inventory(temp_file.path(), LoadPolicy::SkipInvalid).unwrap();

    assert_eq!(inventory.len(), 2);
    assert!(inventory.get("Pen").is_some());
    assert!(inventory.get("Stapler").is_some());
    assert!(inventory.get("Notebook").is_none());
}

#[test]
fn test_load_skip_invalid_skips_non_utf8_line() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"Pen,10.0,100,Stationery,Acme\n").unwrap();
    temp_file.write_all(b"Ink\xff,3,9,Stationery,Quink\n").unwrap();
    temp_file.write_all(b"Cup,4.5,12,Kitchen,Mugz\n").unwrap();

    let inventory = load_inventory(temp_file.path(), LoadPolicy::SkipInvalid).unwrap();

    assert_eq!(inventory.len(), 2);
    assert!(inventory.get("Pen").is_some());
    assert!(inventory.get("Cup").is_some());
}

#[test]
fn test_load_strict_rejects_non_utf8_line() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"Pen,10.0,100,Stationery,Acme\n").unwrap();
    temp_file.write_all(b"Ink\xff,3,9,Stationery,Quink\n").unwrap();

    let result = load_inventory(temp_file.path(), LoadPolicy::Strict);

    assert!(matches!(result, Err(InventoryError::Csv(_))));
}

#[test]
fn test_load_empty_file() {
    let temp_file = NamedTempFile::new().unwrap();

    let inventory = load_inventory(temp_file.path(), LoadPolicy::Strict).unwrap();

    assert!(inventory.is_empty());
}

#[test]
fn test_load_ignores_blank_lines_and_keeps_last_duplicate() {
    let temp_file = write_temp("Pen,10.0,100,Stationery,Acme\n\nPen,12.0,7,Stationery,Acme\n");

    let inventory = load_inventory(temp_file.path(), LoadPolicy::Strict).unwrap();

    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory.get("Pen").unwrap().quantity, 7);
}

#[test]
fn test_load_accepts_crlf_line_endings() {
    let temp_file = write_temp("Pen,10.0,100,Stationery,Acme\r\nInk,3,9,Stationery,Acme\r\n");

    let inventory = load_inventory(temp_file.path(), LoadPolicy::Strict).unwrap();

    assert_eq!(inventory.get("Ink").unwrap().brand, "Acme");
}

// Tests for save_inventory

#[test]
fn test_save_writes_one_line_per_product_in_name_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("inventory.txt");

    let written = save_inventory(&path, &sample_inventory()).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(written, 3);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Glue Stick,0.75,0,Craft,Fevistik"));
    assert!(lines[1].starts_with("Notebook,45.5,20,"));
    assert!(lines[2].starts_with("Pen,10"));
    assert!(content.ends_with('\n'));
    assert!(!content.contains('"'));
}

#[test]
fn test_save_overwrites_existing_file() {
    let temp_file = write_temp(&create_sample_content());
    let mut inventory = Inventory::new();
    inventory.add("Ink", 3.0, 9, "Stationery", "Acme").unwrap();

    save_inventory(temp_file.path(), &inventory).unwrap();
    let content = fs::read_to_string(temp_file.path()).unwrap();

    assert_eq!(content.lines().count(), 1);
    assert!(content.starts_with("Ink,"));
}

#[test]
fn test_save_then_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("inventory.txt");
    let inventory = sample_inventory();

    save_inventory(&path, &inventory).unwrap();
    let loaded = load_inventory(&path, LoadPolicy::Strict).unwrap();

    assert_eq!(loaded, inventory);
}

#[test]
fn test_save_then_load_round_trip_with_padded_fields() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("inventory.txt");
    let mut inventory = Inventory::new();
    inventory.add("Pen", 10.0, 100, " Stationery", "Acme ").unwrap();
    inventory.add("Tray", 80.0, 6, "Office  ", "  Deskmate").unwrap();

    save_inventory(&path, &inventory).unwrap();
    let loaded = load_inventory(&path, LoadPolicy::Strict).unwrap();

    assert_eq!(loaded, inventory);
    assert_eq!(loaded.get("Pen").unwrap().category, "Stationery");
    assert_eq!(loaded.get("Tray").unwrap().brand, "Deskmate");
}

#[test]
fn test_save_empty_inventory_creates_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("inventory.txt");

    save_inventory(&path, &Inventory::new()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_save_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("inventory.txt");

    let result = save_inventory(&path, &sample_inventory());

    assert!(result.is_err());
}
