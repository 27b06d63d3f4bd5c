use anyhow::Result;
use log::error;
use std::io::{BufRead, Write};

use crate::account::{AccountError, AccountStore, Posting};
use crate::cli::utils::Console;
use crate::database::models::Account;

/// Format one account as a table row
pub fn format_account_row(account: &Account) -> String {
    format!(
        "{:<15}{:<20}{:.2}",
        account.account_number(),
        account.name(),
        account.balance()
    )
}

/// Print an account error for the operator. Storage failures are also logged.
fn report_error<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: &AccountError,
) -> Result<()> {
    let message = match err {
        AccountError::NotFound(_) => "Account Not Found!".to_string(),
        AccountError::InsufficientFunds { .. } => format!("Insufficient balance! {}", err),
        AccountError::Storage(e) => {
            error!("Storage failure: {}", e);
            err.to_string()
        }
        _ => err.to_string(),
    };
    console.print_error(&message)
}

/// Confirm a saved deposit or withdrawal, noting a log line that could not be written
fn report_posting<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    kind: &str,
    posting: &Posting,
) -> Result<()> {
    let mut message = format!("{} Successful! New balance: {:.2}", kind, posting.balance);
    if let Some(e) = &posting.log_error {
        message.push_str(&format!(" (transaction log not written: {})", e));
    }
    console.print_success(&message)
}

fn read_account_number<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<Option<i32>> {
    console.read_parsed(prompt, "Invalid account number.")
}

/// Collect number, name and opening balance, then create the account
pub fn create_account<R: BufRead, W: Write>(
    store: &mut AccountStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some(account_number) = read_account_number(console, "Enter Account Number: ")? else {
        return Ok(());
    };
    let Some(name) = console.read_line("Enter Account Holder Name: ")? else {
        return Ok(());
    };
    let Some(balance) = console.read_amount("Enter Initial Balance: ")? else {
        return Ok(());
    };

    match store.create(account_number, &name, balance) {
        Ok(_) => console.print_success("Account Created Successfully!"),
        Err(e) => report_error(console, &e),
    }
}

/// Print every account as a table, in store order
pub fn display_accounts<R: BufRead, W: Write>(
    store: &AccountStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    let accounts = store.list();
    if accounts.is_empty() {
        return console.print_info("No accounts to display.");
    }

    console.print_line(&format!("{:<15}{:<20}{}", "Account No", "Name", "Balance"))?;
    console.print_line(&"-".repeat(50))?;
    for account in accounts {
        console.print_line(&format_account_row(account))?;
    }
    Ok(())
}

pub fn deposit<R: BufRead, W: Write>(
    store: &mut AccountStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some(account_number) = read_account_number(console, "Enter Account Number: ")? else {
        return Ok(());
    };
    let Some(amount) = console.read_amount("Enter Deposit Amount: ")? else {
        return Ok(());
    };

    match store.deposit(account_number, amount) {
        Ok(posting) => report_posting(console, "Deposit", &posting),
        Err(e) => report_error(console, &e),
    }
}

pub fn withdraw<R: BufRead, W: Write>(
    store: &mut AccountStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some(account_number) = read_account_number(console, "Enter Account Number: ")? else {
        return Ok(());
    };
    let Some(amount) = console.read_amount("Enter Withdrawal Amount: ")? else {
        return Ok(());
    };

    match store.withdraw(account_number, amount) {
        Ok(posting) => report_posting(console, "Withdrawal", &posting),
        Err(e) => report_error(console, &e),
    }
}

/// Rename an account. The new name is only asked for once the account is found.
pub fn update_account<R: BufRead, W: Write>(
    store: &mut AccountStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some(account_number) =
        read_account_number(console, "Enter Account Number to Update: ")?
    else {
        return Ok(());
    };
    if let Err(e) = store.find(account_number) {
        return report_error(console, &e);
    }
    let Some(new_name) = console.read_line("Enter New Name: ")? else {
        return Ok(());
    };

    match store.rename(account_number, &new_name) {
        Ok(()) => console.print_success("Account Updated Successfully!"),
        Err(e) => report_error(console, &e),
    }
}

pub fn delete_account<R: BufRead, W: Write>(
    store: &mut AccountStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some(account_number) =
        read_account_number(console, "Enter Account Number to Delete: ")?
    else {
        return Ok(());
    };

    match store.delete(account_number) {
        Ok(_) => console.print_success("Account Deleted Successfully!"),
        Err(e) => report_error(console, &e),
    }
}

pub fn find_account<R: BufRead, W: Write>(
    store: &AccountStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some(account_number) =
        read_account_number(console, "Enter Account Number to Search: ")?
    else {
        return Ok(());
    };

    match store.find(account_number) {
        Ok(account) => {
            console.print_info("Account Found:")?;
            console.print_line(&format_account_row(account))
        }
        Err(e) => report_error(console, &e),
    }
}

/// Print the transaction log of an account, oldest entry first
pub fn view_history<R: BufRead, W: Write>(
    store: &AccountStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some(account_number) = read_account_number(console, "Enter Account Number: ")? else {
        return Ok(());
    };

    match store.history(account_number) {
        Ok(lines) => {
            console.print_header(&format!("Transaction History for {}", account_number))?;
            for line in lines {
                console.print_line(&line)?;
            }
            Ok(())
        }
        Err(e) => report_error(console, &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_format() {
        let account = Account::new(100, "Alice Smith", 75.0);
        assert_eq!(
            format_account_row(&account),
            "100            Alice Smith         75.00"
        );
    }
}
