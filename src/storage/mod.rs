pub mod json_backend;

use crate::{core::errors::BudgetError, domain::Expense};

pub type Result<T> = std::result::Result<T, BudgetError>;

/// Persistence provider for the expense collection.
///
/// `load_expenses` must always produce a usable collection: the stored one,
/// or the default seed set when nothing usable has been stored.
pub trait ExpenseStore: Send + Sync {
    fn load_expenses(&self) -> Result<Vec<Expense>>;
    fn save_expenses(&self, expenses: &[Expense]) -> Result<()>;
    fn backup(&self, expenses: &[Expense], note: Option<&str>) -> Result<String>;
    fn list_backups(&self) -> Result<Vec<BackupInfo>>;
    fn restore(&self, backup_name: &str) -> Result<Vec<Expense>>;
}

pub use json_backend::{BackupInfo, JsonStorage};
