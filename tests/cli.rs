use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CAFE: &str = "UPI: Rs. 500.00 paid to CAFE COFFEE DAY. UPI Ref: 123456789.";
const JOHN: &str = "You have received Rs. 1000.00 from JOHN DOE via UPI. Reference: UPI987654321.";

fn smsledger(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("smsledger").unwrap();
    cmd.env("SMSLEDGER_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

fn enable_sms(dir: &TempDir) {
    smsledger(dir)
        .args(["sms", "enable"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Permission Granted"));
}

#[test]
fn test_config_uses_data_dir_override() {
    let dir = TempDir::new().unwrap();

    smsledger(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(dir.path().to_string_lossy().as_ref()))
        .stdout(predicate::str::contains("SMS detection:   false"));
}

#[test]
fn test_init_writes_settings() {
    let dir = TempDir::new().unwrap();

    smsledger(&dir).arg("init").assert().success();

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("transactions.json").exists());
}

#[test]
fn test_sms_commands_require_enable() {
    let dir = TempDir::new().unwrap();

    smsledger(&dir)
        .args(["sms", "process", CAFE])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not enabled"));
}

#[test]
fn test_process_and_duplicate() {
    let dir = TempDir::new().unwrap();
    enable_sms(&dir);

    smsledger(&dir)
        .args(["sms", "process", CAFE])
        .assert()
        .success()
        .stdout(predicate::str::contains("SMS Transaction Detected"))
        .stdout(predicate::str::contains("To CAFE COFFEE DAY (UPI): ₹500.00"));

    smsledger(&dir)
        .args(["sms", "process", CAFE])
        .assert()
        .success()
        .stderr(predicate::str::contains("Already Processed"));

    smsledger(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 of 1 transactions"));
}

#[test]
fn test_non_financial_message() {
    let dir = TempDir::new().unwrap();
    enable_sms(&dir);

    smsledger(&dir)
        .args(["sms", "process", "Hello, are we still meeting at 5?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No Transaction Found"));
}

#[test]
fn test_check_is_dry_run() {
    let dir = TempDir::new().unwrap();
    enable_sms(&dir);

    smsledger(&dir)
        .args(["sms", "check", JOHN])
        .assert()
        .success()
        .stdout(predicate::str::contains("Type:        Income"))
        .stdout(predicate::str::contains("From JOHN DOE (UPI)"));

    smsledger(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));

    smsledger(&dir)
        .args(["sms", "process", JOHN])
        .assert()
        .success()
        .stdout(predicate::str::contains("SMS Transaction Detected"));
}

#[test]
fn test_import_file() {
    let dir = TempDir::new().unwrap();
    enable_sms(&dir);

    let file = dir.path().join("inbox.txt");
    fs::write(&file, format!("{}\n\n{}\n{}\nHello there\n", CAFE, JOHN, CAFE)).unwrap();

    smsledger(&dir)
        .args(["sms", "import"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Scanned 4 messages: 2 detected, 1 duplicates, 1 without a transaction",
        ));

    smsledger(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transactions: 2"))
        .stdout(predicate::str::contains("₹1000.00"))
        .stdout(predicate::str::contains("₹500.00"));
}

#[test]
fn test_manual_add_and_summary() {
    let dir = TempDir::new().unwrap();

    smsledger(&dir)
        .args(["add", "income", "1,500.50", "Freelance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income Added"))
        .stdout(predicate::str::contains("Freelance: ₹1500.50"));

    smsledger(&dir)
        .args(["add", "expense", "500", "Groceries", "--category", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense Added"));

    smsledger(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance:"))
        .stdout(predicate::str::contains("₹1000.50"));

    smsledger(&dir)
        .args(["list", "--type", "expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Freelance").not());
}

#[test]
fn test_manual_add_rejects_zero_amount() {
    let dir = TempDir::new().unwrap();

    smsledger(&dir)
        .args(["add", "expense", "0", "Nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_manual_add_rejects_oversized_amount() {
    let dir = TempDir::new().unwrap();

    smsledger(&dir)
        .args(["add", "income", "100000000000000000", "Lottery"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"))
        .stderr(predicate::str::contains("Amount too large"));

    smsledger(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn test_delete_unknown_transaction() {
    let dir = TempDir::new().unwrap();

    smsledger(&dir)
        .args(["delete", "txn-00000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found"));
}

#[test]
fn test_audit_log_written() {
    let dir = TempDir::new().unwrap();

    smsledger(&dir)
        .args(["add", "income", "100", "Gift"])
        .assert()
        .success();

    let log = fs::read_to_string(dir.path().join("audit.log")).unwrap();
    assert_eq!(log.lines().count(), 1);
    assert!(log.contains("\"operation\":\"create\""));
}

#[test]
fn test_history_lists_audit_entries() {
    let dir = TempDir::new().unwrap();

    smsledger(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit entries found."));

    smsledger(&dir)
        .args(["add", "expense", "75", "Tea"])
        .assert()
        .success();

    smsledger(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Transaction"))
        .stdout(predicate::str::contains("(Tea)"));
}
