use crate::account::AccountError;

/// A single bank account record
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    account_number: i32,
    name: String,
    balance: f64,
}

impl Account {
    pub fn new(account_number: i32, name: impl Into<String>, balance: f64) -> Self {
        Self {
            account_number,
            name: name.into(),
            balance,
        }
    }

    pub fn account_number(&self) -> i32 {
        self.account_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Add `amount` to the balance. The sign of `amount` is not checked.
    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// Subtract `amount` when the balance covers it, otherwise leave the
    /// balance untouched.
    pub fn withdraw(&mut self, amount: f64) -> Result<(), AccountError> {
        if self.balance >= amount {
            self.balance -= amount;
            Ok(())
        } else {
            Err(AccountError::InsufficientFunds {
                account_number: self.account_number,
                balance: self.balance,
                requested: amount,
            })
        }
    }

    pub fn rename(&mut self, new_name: impl Into<String>) {
        self.name = new_name.into();
    }
}

/// Transaction type recorded in the per-account log
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransactionType {
    Deposit,
    Withdrawal,
}

impl TransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Deposit => "Deposit",
            TransactionType::Withdrawal => "Withdrawal",
        }
    }
}
