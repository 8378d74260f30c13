use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker(base: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tracker").unwrap();
    cmd.env("TRACKER_DATA_DIR", base).env_remove("RUST_LOG");
    cmd
}

fn seed(base: &Path) {
    let data = base.join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("categories.txt"), "1,Food\n2,Salary\n").unwrap();
    fs::write(data.join("expenses.txt"), "1,Coffee,5.00,1,2024-04-10\n").unwrap();
    fs::write(data.join("incomes.txt"), "1,Pay,10.00,2,2024-03-29\n").unwrap();
}

#[test]
fn graph_total_prints_dates_in_order() {
    let temp_dir = TempDir::new().unwrap();
    seed(temp_dir.path());

    tracker(temp_dir.path())
        .args(["graph", "--range", "total"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-29\nIncome : 10.00"))
        .stdout(predicate::str::contains("2024-04-10\nExpense : 5.00"));
}

#[test]
fn graph_with_category_filter_labels_header() {
    let temp_dir = TempDir::new().unwrap();
    seed(temp_dir.path());

    tracker(temp_dir.path())
        .args(["graph", "--range", "Total", "--category", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-04-10 - Food"))
        .stdout(predicate::str::contains("Income :").not());
}

#[test]
fn graph_without_data_warns() {
    let temp_dir = TempDir::new().unwrap();

    fs::write(temp_dir.path().join("config.json"), r#"{"use_color": false}"#).unwrap();

    tracker(temp_dir.path())
        .arg("graph")
        .assert()
        .success()
        .stdout("Couldn't find any income or expense yet.\n");
}

#[test]
fn graph_unknown_category_fails() {
    let temp_dir = TempDir::new().unwrap();
    seed(temp_dir.path());

    tracker(temp_dir.path())
        .args(["graph", "--category", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found: 42"));
}

#[test]
fn graph_rejects_unknown_range() {
    let temp_dir = TempDir::new().unwrap();

    tracker(temp_dir.path())
        .args(["graph", "--range", "yearly"])
        .assert()
        .failure();
}

#[test]
fn malformed_lines_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    seed(temp_dir.path());
    fs::write(
        temp_dir.path().join("data").join("expenses.txt"),
        "garbage\n1,Coffee,5.00,1,2024-04-10\n2,Tea,abc,1,2024-04-11\n",
    )
    .unwrap();

    tracker(temp_dir.path())
        .args(["graph", "--range", "total"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense : 5.00"))
        .stdout(predicate::str::contains("2024-04-11").not());
}

#[test]
fn menu_session_persists_records() {
    let temp_dir = TempDir::new().unwrap();

    tracker(temp_dir.path())
        .arg("menu")
        .write_stdin("1\n1\nFood\n5\n3\n1\nCoffee\n5\n2024/04/10\n1\n5\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added with ID 1."));

    let expenses = fs::read_to_string(temp_dir.path().join("data").join("expenses.txt")).unwrap();
    assert_eq!(expenses, "1,Coffee,5.00,1,2024-04-10\n");
}

#[test]
fn menu_exits_cleanly_at_end_of_input() {
    let temp_dir = TempDir::new().unwrap();

    tracker(temp_dir.path()).write_stdin("").assert().success();
}

#[test]
fn config_prints_paths_and_writes_settings() {
    let temp_dir = TempDir::new().unwrap();

    tracker(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory:"))
        .stdout(predicate::str::contains("%Y/%m/%d"));

    assert!(temp_dir.path().join("config.json").exists());
}
