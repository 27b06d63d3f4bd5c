use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::database::models::TransactionType;

/// Append-only transaction log, one `txn_<account number>.log` file per account
#[derive(Debug, Clone)]
pub struct TransactionLog {
    log_dir: PathBuf,
}

impl TransactionLog {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
        }
    }

    /// Path of the log file for `account_number`
    pub fn path_for(&self, account_number: i32) -> PathBuf {
        self.log_dir.join(format!("txn_{}.log", account_number))
    }

    /// Append one entry stamped with the current time
    pub fn record(
        &self,
        account_number: i32,
        transaction_type: TransactionType,
        amount: f64,
    ) -> io::Result<()> {
        self.record_at(Utc::now(), account_number, transaction_type, amount)
    }

    pub fn record_at(
        &self,
        timestamp: DateTime<Utc>,
        account_number: i32,
        transaction_type: TransactionType,
        amount: f64,
    ) -> io::Result<()> {
        if !self.log_dir.as_os_str().is_empty() && !self.log_dir.exists() {
            fs::create_dir_all(&self.log_dir)?;
        }

        let path = self.path_for(account_number);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{}", format_entry(timestamp, transaction_type, amount))?;

        debug!(
            "Logged {} of {:.2} to {}",
            transaction_type.as_str(),
            amount,
            path.display()
        );
        Ok(())
    }

    /// Every entry for `account_number` in append order, or `None` when the
    /// account has no log file yet.
    pub fn read(&self, account_number: i32) -> io::Result<Option<Vec<String>>> {
        read_lines(&self.path_for(account_number))
    }
}

/// `<RFC 3339 UTC timestamp> - <Deposit|Withdrawal>: <amount to 2 places>`
pub fn format_entry(
    timestamp: DateTime<Utc>,
    transaction_type: TransactionType,
    amount: f64,
) -> String {
    format!(
        "{} - {}: {:.2}",
        timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
        transaction_type.as_str(),
        amount
    )
}

fn read_lines(path: &Path) -> io::Result<Option<Vec<String>>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents.lines().map(str::to_string).collect())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    #[test]
    fn test_entry_format() {
        let timestamp = Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap();
        assert_eq!(
            format_entry(timestamp, TransactionType::Deposit, 25.0),
            "2026-10-19T09:30:00Z - Deposit: 25.00"
        );
        assert_eq!(
            format_entry(timestamp, TransactionType::Withdrawal, 3.456),
            "2026-10-19T09:30:00Z - Withdrawal: 3.46"
        );
    }

    #[test]
    fn test_log_file_name_embeds_account_number() {
        let log = TransactionLog::new("/var/bank");
        assert_eq!(log.path_for(42), PathBuf::from("/var/bank/txn_42.log"));
    }

    #[test]
    fn test_entries_are_appended_in_order() {
        let dir = tempdir().unwrap();
        let log = TransactionLog::new(dir.path());
        let timestamp = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();

        log.record_at(timestamp, 7, TransactionType::Deposit, 10.0).unwrap();
        log.record_at(timestamp, 7, TransactionType::Withdrawal, 4.0).unwrap();
        log.record_at(timestamp, 8, TransactionType::Deposit, 1.0).unwrap();

        assert_eq!(
            log.read(7).unwrap().unwrap(),
            vec![
                "2026-01-02T03:04:05Z - Deposit: 10.00".to_string(),
                "2026-01-02T03:04:05Z - Withdrawal: 4.00".to_string(),
            ]
        );
        assert_eq!(log.read(8).unwrap().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_log_reads_as_none() {
        let dir = tempdir().unwrap();
        let log = TransactionLog::new(dir.path());
        assert!(log.read(1).unwrap().is_none());
    }

    #[test]
    fn test_log_directory_is_created() {
        let dir = tempdir().unwrap();
        let log = TransactionLog::new(dir.path().join("logs"));
        log.record(3, TransactionType::Deposit, 2.0).unwrap();
        assert!(dir.path().join("logs").join("txn_3.log").exists());
    }
}
