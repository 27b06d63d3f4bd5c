use log::{info, warn};

use super::{AccountError, AccountStore};
use crate::database::{models::TransactionType, StorageError};

/// Outcome of a deposit or withdrawal that reached the account file
#[derive(Debug)]
pub struct Posting {
    /// Balance after the transaction
    pub balance: f64,
    /// Set when the balance was saved but the log line could not be appended
    pub log_error: Option<StorageError>,
}

impl AccountStore {
    /// Credit `amount` to the first account numbered `account_number`.
    pub fn deposit(
        &mut self,
        account_number: i32,
        amount: f64,
    ) -> Result<Posting, AccountError> {
        let account = self.find_mut(account_number)?;
        account.deposit(amount);
        let balance = account.balance();

        self.save()?;
        let log_error = self.log_transaction(account_number, TransactionType::Deposit, amount);

        info!("Deposited {:.2} into account {}", amount, account_number);
        Ok(Posting { balance, log_error })
    }

    /// Debit `amount` when the balance covers it. A refused withdrawal is
    /// neither persisted nor logged.
    pub fn withdraw(
        &mut self,
        account_number: i32,
        amount: f64,
    ) -> Result<Posting, AccountError> {
        let account = self.find_mut(account_number)?;
        if let Err(err) = account.withdraw(amount) {
            warn!("Withdrawal of {:.2} from account {} refused", amount, account_number);
            return Err(err);
        }
        let balance = account.balance();

        self.save()?;
        let log_error =
            self.log_transaction(account_number, TransactionType::Withdrawal, amount);

        info!("Withdrew {:.2} from account {}", amount, account_number);
        Ok(Posting { balance, log_error })
    }

    /// Log lines for `account_number`, oldest first
    pub fn history(&self, account_number: i32) -> Result<Vec<String>, AccountError> {
        let lines = self
            .log
            .read(account_number)
            .map_err(|e| AccountError::Storage(StorageError::Log(e)))?;
        lines.ok_or(AccountError::NoHistory(account_number))
    }

    // Runs after the balance is saved; failures are returned, not raised.
    fn log_transaction(
        &self,
        account_number: i32,
        transaction_type: TransactionType,
        amount: f64,
    ) -> Option<StorageError> {
        match self.log.record(account_number, transaction_type, amount) {
            Ok(()) => None,
            Err(e) => {
                warn!("Transaction log for account {} not written: {}", account_number, e);
                Some(StorageError::Log(e))
            }
        }
    }
}
