use log::{debug, info};
use std::path::PathBuf;

use super::AccountError;
use crate::audit::TransactionLog;
use crate::config::Config;
use crate::database::{self, models::Account};

/// The session's accounts, kept in insertion order and mirrored to a flat file
#[derive(Debug)]
pub struct AccountStore {
    pub(super) accounts: Vec<Account>,
    pub(super) data_path: PathBuf,
    pub(super) log: TransactionLog,
    allow_duplicate_numbers: bool,
}

impl AccountStore {
    /// Empty store writing to `data_path` and logging through `log`
    pub fn new(
        data_path: impl Into<PathBuf>,
        log: TransactionLog,
        allow_duplicate_numbers: bool,
    ) -> Self {
        Self {
            accounts: Vec::new(),
            data_path: data_path.into(),
            log,
            allow_duplicate_numbers,
        }
    }

    /// Open the store described by `config`, loading any existing account file
    pub fn open(config: &Config) -> Result<Self, AccountError> {
        let mut store = Self::new(
            &config.storage.path,
            TransactionLog::new(&config.audit.log_dir),
            config.accounts.allow_duplicate_numbers,
        );
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory accounts with the contents of the account file
    pub fn load(&mut self) -> Result<(), AccountError> {
        self.accounts = database::load_accounts(&self.data_path)?;
        Ok(())
    }

    /// Rewrite the account file from memory
    pub fn save(&self) -> Result<(), AccountError> {
        database::save_accounts(&self.data_path, &self.accounts)?;
        Ok(())
    }

    pub fn create(
        &mut self,
        account_number: i32,
        name: &str,
        balance: f64,
    ) -> Result<&Account, AccountError> {
        if !self.allow_duplicate_numbers && self.position(account_number).is_some() {
            return Err(AccountError::DuplicateAccount(account_number));
        }

        self.accounts.push(Account::new(account_number, name, balance));
        self.save()?;

        info!("Account {} created for {}", account_number, name);
        let index = self.accounts.len() - 1;
        Ok(&self.accounts[index])
    }

    /// All accounts in store order
    pub fn list(&self) -> &[Account] {
        &self.accounts
    }

    /// First account whose number matches
    pub fn find(&self, account_number: i32) -> Result<&Account, AccountError> {
        debug!("Looking up account {}", account_number);
        self.accounts
            .iter()
            .find(|account| account.account_number() == account_number)
            .ok_or(AccountError::NotFound(account_number))
    }

    pub(super) fn find_mut(&mut self, account_number: i32) -> Result<&mut Account, AccountError> {
        self.accounts
            .iter_mut()
            .find(|account| account.account_number() == account_number)
            .ok_or(AccountError::NotFound(account_number))
    }

    fn position(&self, account_number: i32) -> Option<usize> {
        self.accounts
            .iter()
            .position(|account| account.account_number() == account_number)
    }

    pub fn rename(&mut self, account_number: i32, new_name: &str) -> Result<(), AccountError> {
        self.find_mut(account_number)?.rename(new_name);
        self.save()?;

        info!("Account {} renamed to {}", account_number, new_name);
        Ok(())
    }

    /// Remove the first account with `account_number`, keeping the order of the rest
    pub fn delete(&mut self, account_number: i32) -> Result<Account, AccountError> {
        let index = self
            .position(account_number)
            .ok_or(AccountError::NotFound(account_number))?;
        let removed = self.accounts.remove(index);
        self.save()?;

        info!("Account {} deleted", account_number);
        Ok(removed)
    }
}
