//! Shell Module
//!
//! Interactive, menu-driven front end over an [`Inventory`](crate::Inventory).
//!
//! ## Architecture
//! - `MenuChoice`: the six menu commands
//! - `Prompter`: line-oriented prompting with retry-until-valid
//! - `IdGenerator`: item numbers for games added without one
//! - `Session`: the menu loop, generic over its input and output streams
//!
//! No inventory error ends the loop; each is reported and the menu comes back.

mod ids;
mod menu;
mod prompt;
mod session;

pub use ids::{IdGenerator, RandomIds};
pub use menu::MenuChoice;
pub use prompt::Prompter;
pub use session::Session;
