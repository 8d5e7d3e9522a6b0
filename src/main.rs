//! Inventory Tracker - interactive product inventory
//!
//! Loads the inventory file at startup, then runs the menu on stdin/stdout.
//! The file is only written when the user picks "Save Inventory".

use clap::Parser;
use inventory_tracker::app::{DEFAULT_CURRENCY, DEFAULT_INVENTORY_FILE};
use inventory_tracker::{AppConfig, InventoryApp, LoadPolicy};
use std::io;
use std::path::PathBuf;

/// Interactive inventory tracker backed by a comma-separated text file
#[derive(Parser, Debug)]
#[command(name = "inventory_tracker")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the inventory file
    #[arg(short, long, default_value = DEFAULT_INVENTORY_FILE)]
    file: PathBuf,

    /// Currency symbol shown before prices
    #[arg(long, default_value = DEFAULT_CURRENCY)]
    currency: String,

    /// Skip malformed lines when loading instead of discarding the whole file
    #[arg(long, default_value_t = false)]
    skip_invalid_lines: bool,
}

impl Args {
    fn into_config(self) -> AppConfig {
        AppConfig {
            file: self.file,
            currency: self.currency,
            load_policy: if self.skip_invalid_lines {
                LoadPolicy::SkipInvalid
            } else {
                LoadPolicy::Strict
            },
        }
    }
}

fn main() {
    // Logs go to stderr; keep the default quiet so they don't interleave with the menu.
    // Examples: RUST_LOG=info, RUST_LOG=inventory_tracker=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Args::parse().into_config();
    log::info!("Starting inventory_tracker");

    let stdin = io::stdin();
    let mut app = InventoryApp::new(config, stdin.lock(), io::stdout());

    if let Err(e) = app.load().and_then(|()| app.run()) {
        log::error!("Terminal error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
