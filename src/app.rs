use log::{debug, info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::{
    error::InventoryError,
    formatters::{format_inventory, format_sorted_inventory, format_stock_change},
    io::{load_inventory, save_inventory, LoadPolicy},
    models::Direction,
    prompt::Prompter,
    store::{Inventory, PriceChange},
};

pub const DEFAULT_INVENTORY_FILE: &str = "inventory.txt";
pub const DEFAULT_CURRENCY: &str = "₹";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub file: PathBuf,
    pub currency: String,
    pub load_policy: LoadPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_INVENTORY_FILE),
            currency: DEFAULT_CURRENCY.to_string(),
            load_policy: LoadPolicy::Strict,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    UpdateQuantity,
    Display,
    Sort,
    Save,
    Exit,
}

impl MenuChoice {
    pub fn all() -> &'static [MenuChoice] {
        &[
            MenuChoice::Add,
            MenuChoice::Remove,
            MenuChoice::UpdateQuantity,
            MenuChoice::Display,
            MenuChoice::Sort,
            MenuChoice::Save,
            MenuChoice::Exit,
        ]
    }

    pub fn number(&self) -> usize {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::Remove => 2,
            MenuChoice::UpdateQuantity => 3,
            MenuChoice::Display => 4,
            MenuChoice::Sort => 5,
            MenuChoice::Save => 6,
            MenuChoice::Exit => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Product",
            MenuChoice::Remove => "Remove Product",
            MenuChoice::UpdateQuantity => "Update Quantity",
            MenuChoice::Display => "Display Inventory",
            MenuChoice::Sort => "Sort Inventory",
            MenuChoice::Save => "Save Inventory",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Parse a menu number such as "3"
    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        Self::all().iter().copied().find(|c| c.number() == number)
    }
}

/// Whether the menu loop keeps going after a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Reads one answer or leaves the handler with `Flow::Quit` at end of input
macro_rules! answer_or_quit {
    ($expr:expr) => {
        match $expr? {
            Some(value) => value,
            None => return Ok(Flow::Quit),
        }
    };
}

pub struct InventoryApp<R, W> {
    config: AppConfig,
    inventory: Inventory,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> InventoryApp<R, W> {
    pub fn new(config: AppConfig, input: R, output: W) -> Self {
        Self {
            config,
            inventory: Inventory::new(),
            prompter: Prompter::new(input, output),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_parts(self) -> (Inventory, W) {
        (self.inventory, self.prompter.into_output())
    }

    /// Loads the configured file. Any failure leaves an empty inventory and is
    /// reported to the user rather than returned.
    pub fn load(&mut self) -> io::Result<()> {
        let path = &self.config.file;
        info!("Inventory file: {}", path.display());

        match load_inventory(path, self.config.load_policy) {
            Ok(inventory) => {
                self.inventory = inventory;
            }
            Err(InventoryError::FileNotFound(_)) => {
                warn!("{} does not exist yet", path.display());
                self.inventory = Inventory::new();
                self.prompter
                    .say("Inventory file not found. Starting with empty inventory.")?;
            }
            Err(e) => {
                self.inventory = Inventory::new();
                self.prompter
                    .say(&format!("Error: {e}. Starting with empty inventory."))?;
            }
        }
        Ok(())
    }

    /// Runs the menu until Exit or end of input. Nothing is saved implicitly.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(answer) = self.prompter.ask("Enter your choice: ")? else {
                debug!("Input closed, leaving menu");
                break;
            };

            let Some(choice) = MenuChoice::parse(&answer) else {
                self.prompter.say("Invalid choice. Please try again.")?;
                continue;
            };
            debug!("Menu choice: {choice:?}");

            if self.handle(choice)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        self.prompter.say("")?;
        for choice in MenuChoice::all() {
            self.prompter
                .say(&format!("{}. {}", choice.number(), choice.label()))?;
        }
        Ok(())
    }

    fn handle(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::Add => self.add_product(),
            MenuChoice::Remove => self.remove_product(),
            MenuChoice::UpdateQuantity => self.update_quantity(),
            MenuChoice::Display => self.display(),
            MenuChoice::Sort => self.sort(),
            MenuChoice::Save => self.save(),
            MenuChoice::Exit => {
                self.prompter.say("Exiting program.")?;
                Ok(Flow::Quit)
            }
        }
    }

    fn report_error(&mut self, error: &InventoryError) -> io::Result<()> {
        debug!("Operation failed: {error}");
        self.prompter.say(&format!("Error: {error}"))
    }

    fn add_product(&mut self) -> io::Result<Flow> {
        self.prompter.say("\nAdding Product:")?;
        let name = answer_or_quit!(self.prompter.ask("Enter product name: "));
        let category = answer_or_quit!(self.prompter.ask("Enter product category: "));
        let brand = answer_or_quit!(self.prompter.ask("Enter product brand: "));
        let price_prompt = format!("Enter product price: {}", self.config.currency);
        let price = answer_or_quit!(self.prompter.ask_non_negative(&price_prompt));
        let quantity = answer_or_quit!(self.prompter.ask_quantity("Enter product quantity: "));

        match self.inventory.add(&name, price, quantity, &category, &brand) {
            Ok(()) => self.prompter.say(&format!(
                "Product '{}' added to inventory with category '{category}' and brand '{brand}'.",
                name.trim()
            ))?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn remove_product(&mut self) -> io::Result<Flow> {
        self.prompter.say("\nRemoving Product:")?;
        let name = answer_or_quit!(self.prompter.ask("Enter product name to remove: "));

        match self.inventory.remove(&name) {
            Ok(_) => self
                .prompter
                .say(&format!("Product '{}' removed from inventory.", name.trim()))?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn update_quantity(&mut self) -> io::Result<Flow> {
        self.prompter.say("\nUpdating Quantity:")?;
        let name = answer_or_quit!(self
            .prompter
            .ask("Enter product name to update quantity: "));
        let action = answer_or_quit!(self
            .prompter
            .ask("Do you want to add or subtract quantity? (add/subtract): "));

        let direction: Direction = match action.parse() {
            Ok(direction) => direction,
            Err(e) => {
                self.report_error(&e)?;
                return Ok(Flow::Continue);
            }
        };

        let quantity_prompt = match direction {
            Direction::Increase => "Enter quantity to add: ",
            Direction::Decrease => "Enter quantity to subtract: ",
        };
        let delta = answer_or_quit!(self.prompter.ask_quantity(quantity_prompt));
        let price_prompt = format!(
            "Enter new price or type 'sameprice' to keep the current price: {}",
            self.config.currency
        );
        let price_input = answer_or_quit!(self.prompter.ask(&price_prompt));

        match self
            .inventory
            .adjust_quantity_with_input(&name, delta, direction, &price_input)
        {
            Ok(change) => {
                self.prompter
                    .say(&format_stock_change(&change, &self.config.currency))?;
                if let PriceChange::Rejected(text) = change.price {
                    self.report_error(&InventoryError::InvalidPrice(text))?;
                }
            }
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn display(&mut self) -> io::Result<Flow> {
        self.prompter.say("\nDisplaying Inventory:")?;
        let listing = format_inventory(&self.inventory, &self.config.currency);
        self.prompter.write_raw(&listing)?;
        Ok(Flow::Continue)
    }

    fn sort(&mut self) -> io::Result<Flow> {
        self.prompter.say("\nSorting Inventory:")?;
        let key_input = answer_or_quit!(self
            .prompter
            .ask("Enter sort key (name/price/quantity/category/brand): "));

        let listing = match self.inventory.sort_view(&key_input) {
            Ok((key, rows)) => format_sorted_inventory(key, &rows, &self.config.currency),
            Err(InventoryError::InventoryEmpty) => format!("{}\n", InventoryError::InventoryEmpty),
            Err(e) => format!("Error: {e}\n"),
        };
        self.prompter.write_raw(&listing)?;
        Ok(Flow::Continue)
    }

    fn save(&mut self) -> io::Result<Flow> {
        self.prompter.say("\nSaving Inventory:")?;
        match save_inventory(&self.config.file, &self.inventory) {
            Ok(count) => {
                debug!("Wrote {count} lines");
                self.prompter.say("Inventory saved successfully.")?;
            }
            Err(e) => {
                warn!("Save to {} failed: {e}", self.config.file.display());
                self.report_error(&e)?;
            }
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
