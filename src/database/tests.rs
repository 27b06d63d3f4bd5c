use tempfile::tempdir;

use super::models::Account;
use super::{decode_accounts, encode_accounts, load_accounts, save_accounts, StorageError};

/// Test fixture with a handful of accounts, one of them duplicated
fn sample_accounts() -> Vec<Account> {
    vec![
        Account::new(100, "Alice", 50.0),
        Account::new(200, "Bob Marley Jr", 10.25),
        Account::new(100, "Alice Again", -3.5),
        Account::new(7, "", 0.1 + 0.2),
    ]
}

#[test]
fn test_encode_layout() {
    let encoded = encode_accounts(&[Account::new(100, "Alice Smith", 75.0)]);
    assert_eq!(encoded, "100\nAlice Smith\n75\n");
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("accounts.dat");

    let accounts = sample_accounts();
    save_accounts(&path, &accounts).unwrap();

    assert_eq!(load_accounts(&path).unwrap(), accounts);
}

#[test]
fn test_save_replaces_previous_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("accounts.dat");

    save_accounts(&path, &sample_accounts()).unwrap();
    save_accounts(&path, &[Account::new(1, "Solo", 1.0)]).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1\nSolo\n1\n");
    // No temporary files are left next to the account file
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("bank").join("accounts.dat");

    save_accounts(&path, &sample_accounts()).unwrap();

    assert!(path.exists());
}

#[test]
fn test_missing_file_is_empty_store() {
    let dir = tempdir().unwrap();
    let accounts = load_accounts(&dir.path().join("nope.dat")).unwrap();
    assert!(accounts.is_empty());
}

#[test]
fn test_trailing_blank_lines_ignored() {
    let accounts = decode_accounts("1\nA\n2.5\n\n\n").unwrap();
    assert_eq!(accounts, vec![Account::new(1, "A", 2.5)]);
}

#[test]
fn test_incomplete_trailing_record_dropped() {
    let accounts = decode_accounts("1\nA\n2.5\n2\nB\n").unwrap();
    assert_eq!(accounts, vec![Account::new(1, "A", 2.5)]);
}

#[test]
fn test_malformed_balance_reports_line() {
    let err = decode_accounts("1\nA\n2.5\n2\nB\nlots\n").unwrap_err();
    match err {
        StorageError::Malformed { line, .. } => assert_eq!(line, 6),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_malformed_account_number_reports_line() {
    let err = decode_accounts("Alice\n1\n2.5\n").unwrap_err();
    assert!(matches!(err, StorageError::Malformed { line: 1, .. }));
}

#[test]
fn test_empty_file() {
    assert!(decode_accounts("").unwrap().is_empty());
}
