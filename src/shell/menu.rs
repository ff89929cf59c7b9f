//! Menu commands

/// A command picked from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListAll,
    Add,
    FindById,
    FindByMaxPrice,
    Statistics,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::ListAll,
        MenuChoice::Add,
        MenuChoice::FindById,
        MenuChoice::FindByMaxPrice,
        MenuChoice::Statistics,
        MenuChoice::Exit,
    ];

    /// Parse a menu number (`1`..`6`) or command word
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "list" => Some(MenuChoice::ListAll),
            "2" | "add" => Some(MenuChoice::Add),
            "3" | "find" => Some(MenuChoice::FindById),
            "4" | "price" => Some(MenuChoice::FindByMaxPrice),
            "5" | "stats" => Some(MenuChoice::Statistics),
            "6" | "exit" | "quit" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// Menu number shown to the user
    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::ListAll => 1,
            MenuChoice::Add => 2,
            MenuChoice::FindById => 3,
            MenuChoice::FindByMaxPrice => 4,
            MenuChoice::Statistics => 5,
            MenuChoice::Exit => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::ListAll => "Display All Games",
            MenuChoice::Add => "Add New Game",
            MenuChoice::FindById => "Search by Item Number",
            MenuChoice::FindByMaxPrice => "Search by Maximum Price",
            MenuChoice::Statistics => "Statistical Analysis",
            MenuChoice::Exit => "Exit",
        }
    }
}
