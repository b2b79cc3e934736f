use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_TRACKER_DATA_DIR", data_dir)
        .env_remove("BUDGET_LOG");
    cmd
}

#[test]
fn first_run_seeds_default_categories() {
    let temp_dir = TempDir::new().unwrap();

    budget(temp_dir.path())
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("500.00 zł"))
        .stdout(predicate::str::contains("Transport"))
        .stdout(predicate::str::contains("Entertainment"))
        .stdout(predicate::str::contains("Other"));

    let categories = fs::read_to_string(temp_dir.path().join("categories.csv")).unwrap();
    assert!(categories.starts_with("Category,Limit\n"));
    assert!(categories.contains("Food,500.00"));

    let transactions = fs::read_to_string(temp_dir.path().join("budget_data.csv")).unwrap();
    assert_eq!(transactions.trim_end(), "Type,Category,Amount,Date,Description");
}

#[test]
fn expense_over_limit_warns_but_records() {
    let temp_dir = TempDir::new().unwrap();

    budget(temp_dir.path())
        .args(["txn", "add", "income", "Other", "1000", "--date", "2025-01-01"])
        .assert()
        .success();

    budget(temp_dir.path())
        .args([
            "txn",
            "add",
            "expense",
            "Food",
            "600",
            "--date",
            "2025-01-02",
            "--description",
            "Groceries",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Income: 1000.00 zł | Expenses: 600.00 zł | Balance: 400.00 zł",
        ))
        .stderr(predicate::str::contains("Limit exceeded for 'Food'"));

    let transactions = fs::read_to_string(temp_dir.path().join("budget_data.csv")).unwrap();
    assert!(transactions.contains("expense,Food,600.00,2025-01-02,Groceries"));

    budget(temp_dir.path())
        .args(["report", "limits"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OVER"));
}

#[test]
fn blank_description_is_replaced() {
    let temp_dir = TempDir::new().unwrap();

    budget(temp_dir.path())
        .args(["txn", "add", "expense", "Transport", "12.5", "-d", "2025-03-04"])
        .assert()
        .success();

    budget(temp_dir.path())
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12.50 zł"))
        .stdout(predicate::str::contains("No description"));
}

#[test]
fn unknown_category_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    budget(temp_dir.path())
        .args(["txn", "add", "expense", "Gifts", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found: Gifts"));

    let transactions = fs::read_to_string(temp_dir.path().join("budget_data.csv")).unwrap();
    assert_eq!(transactions.lines().count(), 1);
}

#[test]
fn malformed_amount_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    budget(temp_dir.path())
        .args(["txn", "add", "expense", "Food", "ten"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));

    budget(temp_dir.path())
        .args(["txn", "add", "expense", "Food", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn category_lifecycle() {
    let temp_dir = TempDir::new().unwrap();

    budget(temp_dir.path())
        .args(["category", "add", "Gifts", "--limit", "150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added category: Gifts"));

    budget(temp_dir.path())
        .args(["category", "add", "Gifts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category already exists: Gifts"));

    budget(temp_dir.path())
        .args(["category", "add", "Gift2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));

    budget(temp_dir.path())
        .args(["category", "set-limit", "Gifts", "75.50"])
        .assert()
        .success();

    budget(temp_dir.path())
        .args(["category", "show", "Gifts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("75.50 zł"));

    budget(temp_dir.path())
        .args(["category", "remove", "Gifts"])
        .assert()
        .success();

    budget(temp_dir.path())
        .args(["category", "show", "Gifts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found: Gifts"));
}

#[test]
fn corrupt_category_store_is_quarantined() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("categories.csv"),
        "Category,Limit\nFood,lots\n",
    )
    .unwrap();

    budget(temp_dir.path())
        .args(["category", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("categories store recovered"))
        .stdout(predicate::str::contains("Entertainment"));

    let quarantined = temp_dir.path().join("categories.csv.corrupt");
    assert_eq!(
        fs::read_to_string(quarantined).unwrap(),
        "Category,Limit\nFood,lots\n"
    );
}

#[test]
fn breakdown_exports_csv() {
    let temp_dir = TempDir::new().unwrap();

    for (category, amount) in [("Food", "30"), ("Food", "10"), ("Transport", "40")] {
        budget(temp_dir.path())
            .args(["txn", "add", "expense", category, amount, "-d", "2025-02-01"])
            .assert()
            .success();
    }

    let output = temp_dir.path().join("breakdown.csv");
    budget(temp_dir.path())
        .args(["report", "breakdown", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("exported"));

    let exported = fs::read_to_string(output).unwrap();
    let lines: Vec<_> = exported.lines().collect();
    assert_eq!(lines[0], "Category,Spent,Percentage");
    assert!(lines[1].starts_with("Food,40.00,50"));
    assert!(lines[2].starts_with("Transport,40.00,50"));
}

#[test]
fn balance_report_tracks_running_total() {
    let temp_dir = TempDir::new().unwrap();

    budget(temp_dir.path())
        .args(["report", "balance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions recorded yet."));

    budget(temp_dir.path())
        .args(["txn", "add", "income", "Other", "100", "-d", "2025-01-01"])
        .assert()
        .success();
    budget(temp_dir.path())
        .args(["txn", "add", "expense", "Food", "250", "-d", "2025-01-02"])
        .assert()
        .success();

    budget(temp_dir.path())
        .args(["report", "balance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-150.00 zł"));

    budget(temp_dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: -150.00 zł"));
}

#[test]
fn overflowing_amount_is_rejected_and_ledger_stays_usable() {
    let temp_dir = TempDir::new().unwrap();
    let huge = "50000000000000000";

    budget(temp_dir.path())
        .args(["txn", "add", "income", "Other", huge, "-d", "2025-01-01"])
        .assert()
        .success();

    budget(temp_dir.path())
        .args(["txn", "add", "income", "Other", huge, "-d", "2025-01-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));

    let transactions = fs::read_to_string(temp_dir.path().join("budget_data.csv")).unwrap();
    assert_eq!(transactions.lines().count(), 2);

    budget(temp_dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income: 50000000000000000.00 zł"));

    budget(temp_dir.path())
        .args(["report", "balance"])
        .assert()
        .success();
}

#[test]
fn unrenderable_date_format_falls_back_to_iso() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("config.json"), r#"{"date_format":"%Q"}"#).unwrap();

    budget(temp_dir.path())
        .args(["txn", "add", "income", "Other", "10", "-d", "2025-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("on 2025-01-01"));

    budget(temp_dir.path())
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-01"));
}

#[test]
fn category_names_are_trimmed() {
    let temp_dir = TempDir::new().unwrap();

    budget(temp_dir.path())
        .args(["category", "add", " Books"])
        .assert()
        .success();

    budget(temp_dir.path())
        .args(["category", "set-limit", " Books", "20"])
        .assert()
        .success();

    budget(temp_dir.path())
        .args(["category", "remove", " Books"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed category: Books"));
}

#[test]
fn config_save_writes_settings_file() {
    let temp_dir = TempDir::new().unwrap();
    let settings_file = temp_dir.path().join("config.json");

    budget(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: zł"));
    assert!(!settings_file.exists());

    budget(temp_dir.path())
        .args(["config", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved to"));

    let saved = fs::read_to_string(settings_file).unwrap();
    assert!(saved.contains("\"date_format\": \"%Y-%m-%d\""));
}
