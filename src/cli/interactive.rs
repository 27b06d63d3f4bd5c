use anyhow::Result;
use log::debug;
use std::io::{BufRead, Write};

use crate::account::AccountStore;
use crate::cli::account;
use crate::cli::utils::Console;

/// Main menu entries, keyed by the number the operator types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuChoice {
    Create,
    List,
    Deposit,
    Withdraw,
    Update,
    Delete,
    Find,
    History,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::Create,
        MenuChoice::List,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Find,
        MenuChoice::History,
        MenuChoice::Exit,
    ];

    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::Create => 1,
            MenuChoice::List => 2,
            MenuChoice::Deposit => 3,
            MenuChoice::Withdraw => 4,
            MenuChoice::Update => 5,
            MenuChoice::Delete => 6,
            MenuChoice::Find => 7,
            MenuChoice::History => 8,
            MenuChoice::Exit => 0,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuChoice::Create => "Create New Account",
            MenuChoice::List => "Display All Accounts",
            MenuChoice::Deposit => "Deposit Money",
            MenuChoice::Withdraw => "Withdraw Money",
            MenuChoice::Update => "Update Account",
            MenuChoice::Delete => "Delete Account",
            MenuChoice::Find => "Find Account",
            MenuChoice::History => "View Transaction History",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn from_input(input: &str) -> Option<Self> {
        let number = input.trim().parse::<u8>().ok()?;
        Self::ALL.into_iter().find(|choice| choice.number() == number)
    }
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>, title: &str) -> Result<()> {
    console.print_header(title)?;
    // Exit is listed last
    for choice in MenuChoice::ALL {
        console.print_line(&format!("{}. {}", choice.number(), choice.label()))?;
    }
    Ok(())
}

/// Present the menu until the operator exits or input runs out
pub fn run_menu<R: BufRead, W: Write>(
    store: &mut AccountStore,
    console: &mut Console<R, W>,
    title: &str,
) -> Result<()> {
    loop {
        print_menu(console, title)?;

        let Some(input) = console.read_line("Enter your choice: ")? else {
            break;
        };
        let Some(choice) = MenuChoice::from_input(&input) else {
            console.print_error("Invalid choice. Try again.")?;
            continue;
        };
        debug!("Menu choice: {:?}", choice);

        match choice {
            MenuChoice::Create => account::create_account(store, console)?,
            MenuChoice::List => account::display_accounts(store, console)?,
            MenuChoice::Deposit => account::deposit(store, console)?,
            MenuChoice::Withdraw => account::withdraw(store, console)?,
            MenuChoice::Update => account::update_account(store, console)?,
            MenuChoice::Delete => account::delete_account(store, console)?,
            MenuChoice::Find => account::find_account(store, console)?,
            MenuChoice::History => account::view_history(store, console)?,
            MenuChoice::Exit => break,
        }

        if console.at_eof() {
            break;
        }
    }

    console.print_info("Exiting system...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1", Some(MenuChoice::Create); "create")]
    #[test_case(" 8 ", Some(MenuChoice::History); "history with padding")]
    #[test_case("0", Some(MenuChoice::Exit); "exit")]
    #[test_case("9", None; "out of range")]
    #[test_case("-1", None; "negative")]
    #[test_case("deposit", None; "not a number")]
    #[test_case("", None; "empty")]
    fn test_menu_choice_from_input(input: &str, expected: Option<MenuChoice>) {
        assert_eq!(MenuChoice::from_input(input), expected);
    }

    #[test]
    fn test_numbers_are_unique() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::from_input(&choice.number().to_string()), Some(choice));
        }
    }
}
