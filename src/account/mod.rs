// Account management module
// This module owns the in-memory account store and the deposit/withdrawal
// processing that feeds the transaction log.

mod management;
mod transactions;

pub use management::AccountStore;
pub use transactions::Posting;

use crate::database::StorageError;

/// Account operation errors
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Account {0} not found")]
    NotFound(i32),

    #[error(
        "Insufficient balance in account {account_number}: \
         balance {balance:.2}, requested {requested:.2}"
    )]
    InsufficientFunds {
        account_number: i32,
        balance: f64,
        requested: f64,
    },

    #[error("No transaction history for account {0}")]
    NoHistory(i32),

    #[error("Account number {0} is already in use")]
    DuplicateAccount(i32),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
