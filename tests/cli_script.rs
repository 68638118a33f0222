use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn run_script(home: &Path, script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cannon_cli").unwrap();
    cmd.env("CANNON_CLI_SCRIPT", "1")
        .env("CANNON_CORE_HOME", home)
        .env_remove("RUST_LOG")
        .write_stdin(script.to_string())
        .assert()
        .success()
}

#[test]
fn summary_reports_seed_burn_against_default_budget() {
    let home = TempDir::new().unwrap();
    run_script(home.path(), "summary\nexit\n")
        .stdout(contains("Total monthly burn"))
        .stdout(contains("Budget             : $5,000"));
}

#[test]
fn added_expense_is_listed_and_saved() {
    let home = TempDir::new().unwrap();
    let script = "add \"Morning Coffee\" 4.50 Food daily\nlist --search coffee --sort a-z\nexit\n";
    run_script(home.path(), script)
        .stdout(contains("Morning Coffee (Food)"))
        .stdout(contains("Morning Coffee"));

    let json = fs::read_to_string(home.path().join("expenses.json")).unwrap();
    assert!(json.contains("\"Morning Coffee\""));
    assert!(json.contains("\"daily\""));
}

#[test]
fn invalid_input_reports_validation_message() {
    let home = TempDir::new().unwrap();
    run_script(home.path(), "add \"\" 5 Food\nadd Tea -2 Food\nexit\n")
        .stdout(contains("Name is required."))
        .stdout(contains("Amount cannot be negative."));
    assert!(!home.path().join("expenses.json").exists());
}

#[test]
fn settings_persist_between_runs() {
    let home = TempDir::new().unwrap();
    run_script(home.path(), "budget 3000\ncurrency eur\nexit\n")
        .stdout(contains("Currency set to EUR"));

    let config = fs::read_to_string(home.path().join("config").join("config.json")).unwrap();
    assert!(config.contains("\"EUR\""));
    assert!(config.contains("3000"));

    run_script(home.path(), "budget\nexit\n").stdout(contains("3.000\u{a0}€"));
}

#[test]
fn unknown_commands_get_suggestions() {
    let home = TempDir::new().unwrap();
    run_script(home.path(), "sumary\nquit\n").stdout(contains("Suggestion: `summary`?"));
}

#[test]
fn context_and_briefing_render() {
    let home = TempDir::new().unwrap();
    run_script(home.path(), "context\nbriefing\nexit\n")
        .stdout(contains("Cur:USD|Burn:"))
        .stdout(contains("Count:51"))
        .stdout(contains("You are tracking 51 distinct data points."));
}

#[test]
fn backups_can_be_restored() {
    let home = TempDir::new().unwrap();
    run_script(home.path(), "backup before cleanup\nbackups\nexit\n")
        .stdout(contains("Backup created: expenses_"))
        .stdout(contains("_before-cleanup.json"));

    let backup = fs::read_dir(home.path().join("backups"))
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .find(|name| name.ends_with("_before-cleanup.json"))
        .unwrap();
    run_script(home.path(), &format!("restore {backup}\nexit\n"))
        .stdout(contains("Restored 51 expenses"));
}

#[test]
fn infinite_amounts_are_refused_and_data_survives() {
    let home = TempDir::new().unwrap();
    run_script(home.path(), "add Mine 12 Food\nadd Huge inf Food\nadd Huger 1e999 Food\nexit\n")
        .stdout(contains("amount must be a finite number"));

    run_script(home.path(), "list --search mine\nexit\n")
        .stdout(contains("Mine"))
        .stdout(contains("1 of 52 expenses"));
}
