//! Interactive session
//!
//! The menu loop and one handler per menu command.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;

use crate::codec::{parse_decimal, SEPARATOR};
use crate::error::{InventoryError, Result};
use crate::inventory::Inventory;
use crate::record::{
    validate_id, validate_name, validate_price, validate_quantity, validate_rating, Game,
};

use super::{IdGenerator, MenuChoice, Prompter, RandomIds};

/// One run of the menu loop over an inventory
pub struct Session<R, W> {
    /// Inventory being managed
    inventory: Inventory,

    /// Console input/output
    prompter: Prompter<R, W>,

    /// Item numbers for games entered without one
    ids: Box<dyn IdGenerator>,

    /// Wait for Enter after each report
    pause: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with random item numbers
    pub fn new(inventory: Inventory, input: R, output: W) -> Self {
        let pause = inventory.config().pause_after_report;
        Self {
            inventory,
            prompter: Prompter::new(input, output),
            ids: Box::new(RandomIds::new()),
            pause,
        }
    }

    /// Replace the item number generator
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Run the menu loop until Exit or end of input
    ///
    /// Only failures on the console streams end the loop early.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;

            let Some(input) = self.prompter.ask("Enter your choice: ")? else {
                tracing::debug!("input closed, leaving menu loop");
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&input) else {
                self.prompter.say("Invalid option. Try again.")?;
                continue;
            };

            tracing::debug!(?choice, "menu command");

            match choice {
                MenuChoice::ListAll => self.display_all()?,
                MenuChoice::Add => self.add_game()?,
                MenuChoice::FindById => self.search_by_id()?,
                MenuChoice::FindByMaxPrice => self.search_by_max_price()?,
                MenuChoice::Statistics => self.show_statistics()?,
                MenuChoice::Exit => {
                    self.prompter
                        .say("\nThank you for using the Video Game Shop!")?;
                    return Ok(());
                }
            }
        }
    }

    // =========================================================================
    // Command Handlers
    // =========================================================================

    fn display_all(&mut self) -> io::Result<()> {
        let records = match self.inventory.list_all() {
            Ok(records) => records,
            Err(e) => return self.report_error(&e),
        };

        let mut shown = 0;
        for game in records {
            match game {
                Ok(game) => {
                    self.prompter.say(format_args!("\n{game}"))?;
                    shown += 1;
                }
                Err(e) => return self.report_error(&e),
            }
        }

        if shown == 0 {
            self.prompter.say("No games in inventory.")?;
        }
        self.pause()
    }

    fn add_game(&mut self) -> io::Result<()> {
        if self.inventory.is_full() {
            return self.prompter.say("Inventory full.");
        }

        let Some(game) = self.read_game()? else {
            return Ok(());
        };

        let id = game.id();
        match self.inventory.add(game) {
            Ok(()) => self.prompter.say(format_args!("Game {id} added.")),
            Err(e) => self.report_error(&e),
        }
    }

    fn search_by_id(&mut self) -> io::Result<()> {
        let Some(input) = self.prompter.ask("Enter the item number to search: ")? else {
            return Ok(());
        };

        let Ok(id) = input.trim().parse::<i32>() else {
            self.prompter.say("Invalid item number.")?;
            return self.pause();
        };

        match self.inventory.find_by_id(id) {
            Ok(game) => self.prompter.say(format_args!("\n{game}"))?,
            Err(InventoryError::NotFound { .. }) => self.prompter.say("Game not found.")?,
            Err(e) => self.report_error(&e)?,
        }
        self.pause()
    }

    fn search_by_max_price(&mut self) -> io::Result<()> {
        let Some(input) = self.prompter.ask("Enter the maximum price: ")? else {
            return Ok(());
        };

        let Some(max_price) = parse_decimal(&input) else {
            self.prompter.say("Invalid price.")?;
            return self.pause();
        };

        match self.inventory.find_by_max_price(max_price) {
            Ok(games) if games.is_empty() => {
                self.prompter.say("No games found within that price range.")?
            }
            Ok(games) => {
                for game in &games {
                    self.prompter.say(format_args!("\n{game}"))?;
                }
            }
            Err(e) => self.report_error(&e)?,
        }
        self.pause()
    }

    fn show_statistics(&mut self) -> io::Result<()> {
        match self.inventory.statistics() {
            Ok(stats) => self.prompter.say(format_args!("\n{stats}"))?,
            Err(InventoryError::NoData) => self.prompter.say("No data available.")?,
            Err(e) => self.report_error(&e)?,
        }
        self.pause()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn show_menu(&mut self) -> io::Result<()> {
        self.prompter.say("\n=== VIDEO GAME SHOP MENU ===")?;
        for choice in MenuChoice::ALL {
            self.prompter
                .say(format_args!("{}. {}", choice.number(), choice.label()))?;
        }
        Ok(())
    }

    /// Prompt for every field of a new game
    ///
    /// Returns `None` if input ends before all fields are entered.
    fn read_game(&mut self) -> io::Result<Option<Game>> {
        let ids = &mut self.ids;
        let Some(id) = self.prompter.ask_until(
            "Enter item number (or leave blank to auto-generate): ",
            |raw| parse_item_number(raw).map(|id| id.unwrap_or_else(|| ids.next_id())),
        )?
        else {
            return Ok(None);
        };

        let Some(name) = self.prompter.ask_until("Enter item name: ", parse_name)? else {
            return Ok(None);
        };
        let Some(price) = self.prompter.ask_until("Enter price: ", parse_price)? else {
            return Ok(None);
        };
        let Some(rating) = self
            .prompter
            .ask_until("Enter user rating (0-5): ", parse_rating)?
        else {
            return Ok(None);
        };
        let Some(quantity) = self.prompter.ask_until("Enter quantity: ", parse_quantity)? else {
            return Ok(None);
        };

        match Game::new(id, name, price, rating, quantity) {
            Ok(game) => Ok(Some(game)),
            Err(e) => {
                self.prompter.say(e.reason)?;
                Ok(None)
            }
        }
    }

    fn report_error(&mut self, error: &InventoryError) -> io::Result<()> {
        tracing::warn!(error = %error, "command failed");
        self.prompter.say(format_args!("Error: {error}"))
    }

    fn pause(&mut self) -> io::Result<()> {
        if self.pause {
            self.prompter
                .ask("\nPress Enter to return to the menu...")?;
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the inventory
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_inner(self) -> (Inventory, W) {
        let (_, output) = self.prompter.into_inner();
        (self.inventory, output)
    }
}

// =============================================================================
// Field Parsers
// =============================================================================

/// Blank means "generate one"
fn parse_item_number(raw: &str) -> std::result::Result<Option<i32>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let id: i32 = raw
        .parse()
        .map_err(|_| "Invalid input. Please enter a 4-digit number.".to_string())?;
    validate_id(id).map(Some).map_err(|e| e.reason.to_string())
}

fn parse_name(raw: &str) -> std::result::Result<String, String> {
    let name = validate_name(raw.trim().to_string()).map_err(|e| e.reason.to_string())?;

    if parse_decimal(&name).is_some() {
        return Err("Item name cannot be a number.".to_string());
    }
    if name.contains(SEPARATOR) {
        return Err("Item name cannot contain commas.".to_string());
    }
    Ok(name)
}

fn parse_price(raw: &str) -> std::result::Result<Decimal, String> {
    let price =
        parse_decimal(raw).ok_or_else(|| "Price must be a non-negative number.".to_string())?;
    validate_price(price).map_err(|e| e.reason.to_string())
}

fn parse_rating(raw: &str) -> std::result::Result<f64, String> {
    let rating: f64 = raw
        .trim()
        .parse()
        .map_err(|_| "Rating must be between 0 and 5.".to_string())?;
    validate_rating(rating).map_err(|e| e.reason.to_string())
}

fn parse_quantity(raw: &str) -> std::result::Result<i32, String> {
    let quantity: i32 = raw
        .trim()
        .parse()
        .map_err(|_| "Quantity must be a non-negative integer.".to_string())?;
    validate_quantity(quantity).map_err(|e| e.reason.to_string())
}
