#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use cannon_core::{
    config::ConfigManager,
    core::ExpenseManager,
    domain::{Expense, Frequency},
    storage::JsonStorage,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Returns a fresh directory that outlives the calling test.
pub fn scratch_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Creates isolated managers backed by unique directories for each test.
pub fn setup_test_env() -> (ExpenseManager, ConfigManager, PathBuf) {
    let base = scratch_dir();
    let storage = JsonStorage::new(Some(base.clone()), Some(3)).expect("create json storage backend");
    let manager = ExpenseManager::open(Box::new(storage)).expect("open expense manager");
    let config_manager =
        ConfigManager::with_base_dir(base.clone()).expect("create config manager for temp dir");
    (manager, config_manager, base)
}

pub fn expense(name: &str, category: &str, amount: f64, frequency: Frequency) -> Expense {
    Expense::new(name, category, amount, frequency)
}

pub fn one_off(name: &str, category: &str, amount: f64) -> Expense {
    Expense::new(name, category, amount, Frequency::OneTime).with_recurring(Some(false))
}

/// A small mixed-frequency collection used across suites.
pub fn household() -> Vec<Expense> {
    vec![
        expense("Rent", "Housing", 1200.0, Frequency::Monthly),
        expense("Coffee", "Food", 5.0, Frequency::Daily),
        expense("Netflix", "Entertainment", 15.5, Frequency::Monthly),
        one_off("Laptop", "Tech", 1800.0),
        expense("Insurance", "Insurance", 600.0, Frequency::Yearly),
    ]
}

pub fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}
