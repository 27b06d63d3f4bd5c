// Terminal front end: prompts, the numbered menu and its handlers

pub mod account;
pub mod interactive;
pub mod utils;

pub use interactive::{run_menu, MenuChoice};
pub use utils::Console;
