//! End-to-end CLI tests
//!
//! Each test points the binary at a fresh temp data directory via the
//! BUDGET_DISTRIBUTOR_DATA_DIR override, so tests never touch real data.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_DISTRIBUTOR_DATA_DIR", dir.path());
    cmd
}

#[test]
fn category_add_and_list() {
    let dir = TempDir::new().unwrap();

    budget_cmd(&dir)
        .args(["category", "add", "Rent", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added category: Rent (50%)"));

    budget_cmd(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Total: 50%"))
        .stdout(predicate::str::contains("must reach 100%"));
}

#[test]
fn category_add_rejects_overflow() {
    let dir = TempDir::new().unwrap();

    budget_cmd(&dir)
        .args(["category", "add", "Rent", "60"])
        .assert()
        .success();

    budget_cmd(&dir)
        .args(["category", "add", "Food", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Total percentage cannot exceed 100%"));
}

#[test]
fn category_add_rejects_duplicate_name() {
    let dir = TempDir::new().unwrap();

    budget_cmd(&dir)
        .args(["category", "add", "Rent", "40"])
        .assert()
        .success();

    budget_cmd(&dir)
        .args(["category", "add", "Rent", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category already exists: Rent"));
}

#[test]
fn calculate_requires_complete_percentages() {
    let dir = TempDir::new().unwrap();

    budget_cmd(&dir)
        .args(["calculate", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one category"));

    budget_cmd(&dir)
        .args(["category", "add", "Rent", "50"])
        .assert()
        .success();

    budget_cmd(&dir)
        .args(["calculate", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Total percentage must equal 100%"));
}

#[test]
fn full_distribute_add_withdraw_flow() {
    let dir = TempDir::new().unwrap();

    for (name, pct) in [("Rent", "50"), ("Food", "30"), ("Fun", "20")] {
        budget_cmd(&dir)
            .args(["category", "add", name, pct])
            .assert()
            .success();
    }

    budget_cmd(&dir)
        .args(["calculate", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distributed $1000.00 across 3 categories."))
        .stdout(predicate::str::contains("$500.00"))
        .stdout(predicate::str::contains("$300.00"))
        .stdout(predicate::str::contains("$200.00"));

    budget_cmd(&dir)
        .args(["add-funds", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "$100.00 added to your budget. New total budget: $1100.00",
        ));

    budget_cmd(&dir)
        .args(["withdraw", "0", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "$50.00 withdrawn from Rent. New amount: $500.00",
        ));

    budget_cmd(&dir)
        .args(["show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total budget: $1050.00"))
        .stdout(predicate::str::contains("$330.00"))
        .stdout(predicate::str::contains("$220.00"));
}

#[test]
fn withdraw_over_balance_fails() {
    let dir = TempDir::new().unwrap();

    budget_cmd(&dir)
        .args(["category", "add", "Everything", "100"])
        .assert()
        .success();

    budget_cmd(&dir)
        .args(["calculate", "100"])
        .assert()
        .success();

    budget_cmd(&dir)
        .args(["withdraw", "0", "100.01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cannot withdraw more than $100.00 from Everything",
        ));
}

#[test]
fn add_funds_before_distribution_updates_total_only() {
    let dir = TempDir::new().unwrap();

    budget_cmd(&dir)
        .args(["add-funds", "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New total budget: $250.00"))
        .stdout(predicate::str::contains("distribute funds when ready"));

    budget_cmd(&dir)
        .args(["show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total budget: $250.00"));
}

#[test]
fn state_survives_between_invocations() {
    let dir = TempDir::new().unwrap();

    budget_cmd(&dir)
        .args(["category", "add", "Rent", "100"])
        .assert()
        .success();

    budget_cmd(&dir)
        .args(["calculate", "500"])
        .assert()
        .success();

    // Corrupting nothing: a fresh process reloads the same aggregate
    budget_cmd(&dir)
        .args(["show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total budget: $500.00"))
        .stdout(predicate::str::contains("$500.00"));
}

#[test]
fn corrupt_data_file_falls_back_to_empty() {
    let dir = TempDir::new().unwrap();

    budget_cmd(&dir)
        .args(["category", "add", "Rent", "100"])
        .assert()
        .success();

    let budget_file = dir.path().join("data").join("budget.json");
    std::fs::write(&budget_file, "{ not json").unwrap();

    budget_cmd(&dir)
        .args(["show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("starting empty"))
        .stdout(predicate::str::contains("No categories yet"));
}

#[test]
fn config_prints_paths() {
    let dir = TempDir::new().unwrap();

    budget_cmd(&dir)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("budget.json"))
        .stdout(predicate::str::contains("Currency:       $"));
}

#[test]
fn invalid_amount_is_a_validation_error() {
    let dir = TempDir::new().unwrap();

    budget_cmd(&dir)
        .args(["add-funds", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid money format"));
}
