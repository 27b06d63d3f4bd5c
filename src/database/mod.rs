use log::{debug, info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub mod models;

#[cfg(test)]
mod tests;

use models::Account;

/// Account file errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Account file I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to replace account file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Transaction log I/O error: {0}")]
    Log(io::Error),

    #[error("Malformed account file at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Load every account record from the flat file at `path`.
///
/// A missing file is an empty store. Trailing blank lines are ignored and an
/// incomplete last record is dropped with a warning.
pub fn load_accounts(path: &Path) -> Result<Vec<Account>, StorageError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("No account file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };

    let accounts = decode_accounts(&contents)?;
    info!("Loaded {} accounts from {}", accounts.len(), path.display());
    Ok(accounts)
}

/// Rewrite the flat file at `path` with `accounts`, in order.
///
/// The records are written to a temporary file next to `path` which then
/// replaces it, so a crash mid-write leaves the previous file intact.
pub fn save_accounts(path: &Path, accounts: &[Account]) -> Result<(), StorageError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(encode_accounts(accounts).as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path)?;

    debug!("Saved {} accounts to {}", accounts.len(), path.display());
    Ok(())
}

/// Three lines per record: number, name, balance.
pub fn encode_accounts(accounts: &[Account]) -> String {
    let mut out = String::new();
    for account in accounts {
        out.push_str(&format!(
            "{}\n{}\n{}\n",
            account.account_number(),
            account.name(),
            account.balance()
        ));
    }
    out
}

pub fn decode_accounts(contents: &str) -> Result<Vec<Account>, StorageError> {
    let mut lines: Vec<&str> = contents.lines().collect();
    while lines.last().map_or(false, |line| line.trim().is_empty()) {
        lines.pop();
    }

    let leftover = lines.len() % 3;
    if leftover != 0 {
        warn!(
            "Dropping incomplete trailing record ({} of 3 lines) at line {}",
            leftover,
            lines.len() - leftover + 1
        );
    }

    lines
        .chunks_exact(3)
        .enumerate()
        .map(|(index, record)| {
            let first_line = index * 3 + 1;
            let account_number = record[0].trim().parse::<i32>().map_err(|e| {
                StorageError::Malformed {
                    line: first_line,
                    reason: format!("invalid account number {:?}: {}", record[0], e),
                }
            })?;
            let balance = record[2].trim().parse::<f64>().map_err(|e| {
                StorageError::Malformed {
                    line: first_line + 2,
                    reason: format!("invalid balance {:?}: {}", record[2], e),
                }
            })?;
            Ok(Account::new(account_number, record[1], balance))
        })
        .collect()
}
